//! TTS Engine Port - 语音合成引擎抽象
//!
//! 定义语音合成的抽象接口，具体实现在 infrastructure/adapters 层

use async_trait::async_trait;
use thiserror::Error;

/// TTS 错误
#[derive(Debug, Error)]
pub enum TtsError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Service error: {0}")]
    ServiceError(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// 合成请求
#[derive(Debug, Clone)]
pub struct SynthesisRequest {
    /// 要合成的文本（调用方保证非空）
    pub text: String,
    /// 音色 ID（已经过目录解析）
    pub voice: String,
}

/// 合成结果
#[derive(Debug, Clone)]
pub struct SynthesizedAudio {
    /// 编码后的音频字节
    pub data: Vec<u8>,
    /// 音频时长（秒），可解析时填充
    pub duration_secs: Option<f64>,
    /// 采样率，可解析时填充
    pub sample_rate: Option<u32>,
}

/// TTS Engine Port
///
/// 外部 TTS 服务与本地兜底合成共用的抽象接口
#[async_trait]
pub trait TtsEnginePort: Send + Sync {
    /// 执行语音合成，返回编码后的音频字节
    async fn synthesize(&self, request: &SynthesisRequest) -> Result<SynthesizedAudio, TtsError>;

    /// 检查引擎是否可用
    async fn health_check(&self) -> bool {
        true // 默认实现
    }
}
