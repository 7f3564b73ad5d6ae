//! Application State
//!
//! HTTP 层共享的应用状态：端口、处理器与音色目录

use std::sync::Arc;

use crate::application::{
    AudioStorePort, GetAudioHandler, SynthesisService, SynthesizeHandler,
};
use crate::domain::VoiceCatalog;

/// 应用状态
pub struct AppState {
    /// 对外可达的 Base URL，用于拼接 audio_url
    pub public_base_url: String,
    pub catalog: VoiceCatalog,

    // ========== Handlers ==========
    pub synthesize_handler: SynthesizeHandler,
    pub get_audio_handler: GetAudioHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(
        public_base_url: impl Into<String>,
        synthesis: Arc<SynthesisService>,
        audio_store: Arc<dyn AudioStorePort>,
    ) -> Self {
        let catalog = VoiceCatalog::new();

        Self {
            public_base_url: public_base_url.into(),
            catalog: catalog.clone(),
            synthesize_handler: SynthesizeHandler::new(synthesis, audio_store.clone(), catalog),
            get_audio_handler: GetAudioHandler::new(audio_store),
        }
    }

    /// 音频下载 URL
    pub fn audio_url(&self, id: impl std::fmt::Display) -> String {
        format!("{}/audio/{}", self.public_base_url, id)
    }
}
