//! Audio Store Port - 出站端口
//!
//! 定义音频文件存储的抽象接口，具体实现在 infrastructure/adapters 层。
//! 存储对音频字节拥有唯一所有权：创建、查找、删除都经过这里。

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;
use uuid::Uuid;

/// 音频存储错误
#[derive(Debug, Error)]
pub enum AudioStoreError {
    #[error("Audio not found: {0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(String),
}

/// 音频 ID
///
/// 不透明的唯一标识，内部为 UUID v4
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AudioId(Uuid);

impl AudioId {
    /// 生成新的随机 ID
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// 宽松解析：格式非法返回 None，调用方按 NotFound 处理
    pub fn parse(s: &str) -> Option<Self> {
        Uuid::parse_str(s).ok().map(Self)
    }
}

impl std::fmt::Display for AudioId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// 存储条目（用于清理扫描）
#[derive(Debug, Clone)]
pub struct StoredEntry {
    pub id: AudioId,
    pub created_at: DateTime<Utc>,
}

/// Audio Store Port - 出站端口
///
/// 一个条目一个文件，目录列举即索引
#[async_trait]
pub trait AudioStorePort: Send + Sync {
    /// 保存音频，返回新生成的 ID
    ///
    /// 相同内容的并发调用必须获得不同的 ID
    async fn put(&self, data: &[u8]) -> Result<AudioId, AudioStoreError>;

    /// 按 ID 读取音频，不存在返回 NotFound
    async fn get(&self, id: AudioId) -> Result<Vec<u8>, AudioStoreError>;

    /// 按 ID 删除音频，不存在时为 no-op
    async fn delete(&self, id: AudioId) -> Result<(), AudioStoreError>;

    /// 枚举当前所有条目（顺序不保证）
    async fn list(&self) -> Result<Vec<StoredEntry>, AudioStoreError>;
}
