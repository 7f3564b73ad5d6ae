//! Synthesize Command - 合成命令及处理器

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::application::error::ApplicationError;
use crate::application::ports::{AudioId, AudioStorePort, SynthesisRequest};
use crate::application::synthesis::SynthesisService;
use crate::domain::VoiceCatalog;

/// 合成命令
#[derive(Debug, Clone)]
pub struct SynthesizeCommand {
    pub text: String,
    /// 未指定时使用目录默认音色
    pub voice: Option<String>,
}

/// 合成响应
#[derive(Debug, Clone)]
pub struct SynthesizeResponse {
    pub audio_id: AudioId,
    pub text: String,
    pub voice: String,
    pub timestamp: DateTime<Utc>,
}

/// Synthesize Handler
///
/// 验证文本与音色 → 门面合成 → 提交存储。
/// 空文本在这里拦截，不会产生任何存储条目
pub struct SynthesizeHandler {
    synthesis: Arc<SynthesisService>,
    audio_store: Arc<dyn AudioStorePort>,
    catalog: VoiceCatalog,
}

impl SynthesizeHandler {
    pub fn new(
        synthesis: Arc<SynthesisService>,
        audio_store: Arc<dyn AudioStorePort>,
        catalog: VoiceCatalog,
    ) -> Self {
        Self {
            synthesis,
            audio_store,
            catalog,
        }
    }

    pub async fn handle(
        &self,
        command: SynthesizeCommand,
    ) -> Result<SynthesizeResponse, ApplicationError> {
        if command.text.is_empty() {
            return Err(ApplicationError::validation("text is empty"));
        }

        let voice = self.catalog.resolve(command.voice.as_deref())?;

        let request = SynthesisRequest {
            text: command.text.clone(),
            voice: voice.to_string(),
        };

        let audio = self
            .synthesis
            .synthesize(&request)
            .await
            .map_err(|e| ApplicationError::SynthesisFailed(e.to_string()))?;

        let audio_id = self.audio_store.put(&audio.data).await?;

        tracing::info!(
            audio_id = %audio_id,
            voice = %voice,
            text_len = command.text.chars().count(),
            audio_size = audio.data.len(),
            duration_secs = ?audio.duration_secs,
            "Speech synthesized"
        );

        Ok(SynthesizeResponse {
            audio_id,
            text: command.text,
            voice: voice.to_string(),
            timestamp: Utc::now(),
        })
    }
}
