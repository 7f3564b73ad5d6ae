//! 应用层错误定义
//!
//! 统一的命令/查询错误类型

use thiserror::Error;

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 验证错误（空文本、未知音色等）
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 音频未找到
    #[error("Audio not found: {0}")]
    AudioNotFound(String),

    /// 合成失败（外部服务与兜底路径都失败，防御性分支）
    #[error("Synthesis failed: {0}")]
    SynthesisFailed(String),

    /// 存储错误
    #[error("Storage error: {0}")]
    StorageError(String),
}

impl ApplicationError {
    /// 创建验证错误
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError(message.into())
    }
}

impl From<crate::application::ports::AudioStoreError> for ApplicationError {
    fn from(err: crate::application::ports::AudioStoreError) -> Self {
        match err {
            crate::application::ports::AudioStoreError::NotFound(id) => Self::AudioNotFound(id),
            crate::application::ports::AudioStoreError::Io(msg) => Self::StorageError(msg),
        }
    }
}

impl From<crate::domain::VoiceError> for ApplicationError {
    fn from(err: crate::domain::VoiceError) -> Self {
        Self::ValidationError(err.to_string())
    }
}
