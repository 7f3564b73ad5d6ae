//! Audio Query - 音频查询及处理器

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::{AudioId, AudioStorePort};

/// 音频查询（ID 为未解析的原始字符串）
#[derive(Debug, Clone)]
pub struct GetAudioQuery {
    pub id: String,
}

/// 音频查询响应
#[derive(Debug, Clone)]
pub struct GetAudioResponse {
    pub id: AudioId,
    pub data: Vec<u8>,
}

/// GetAudio Handler - 按 ID 获取音频数据
///
/// 格式非法的 ID 与不存在的 ID 一律按未找到处理，不报解析错误
pub struct GetAudioHandler {
    audio_store: Arc<dyn AudioStorePort>,
}

impl GetAudioHandler {
    pub fn new(audio_store: Arc<dyn AudioStorePort>) -> Self {
        Self { audio_store }
    }

    pub async fn handle(&self, query: GetAudioQuery) -> Result<GetAudioResponse, ApplicationError> {
        let id = AudioId::parse(&query.id)
            .ok_or_else(|| ApplicationError::AudioNotFound(query.id.clone()))?;

        let data = self.audio_store.get(id).await?;

        Ok(GetAudioResponse { id, data })
    }
}
