//! Synthesis Service - 合成策略门面
//!
//! 两级策略：优先调用外部 TTS 引擎，任何失败都回退到本地提示音引擎。
//! 兜底引擎对非空文本是全函数，因此门面整体失败只剩防御性分支。

use std::sync::Arc;

use crate::application::ports::{SynthesisRequest, SynthesizedAudio, TtsEnginePort, TtsError};

/// 合成门面
pub struct SynthesisService {
    /// 首选引擎（外部 TTS 服务），未配置时直接走兜底
    preferred: Option<Arc<dyn TtsEnginePort>>,
    /// 兜底引擎（本地提示音）
    fallback: Arc<dyn TtsEnginePort>,
}

impl SynthesisService {
    pub fn new(preferred: Option<Arc<dyn TtsEnginePort>>, fallback: Arc<dyn TtsEnginePort>) -> Self {
        Self { preferred, fallback }
    }

    /// 执行合成
    ///
    /// 首选引擎失败进 warn 日志后回退，不向上传播
    pub async fn synthesize(&self, request: &SynthesisRequest) -> Result<SynthesizedAudio, TtsError> {
        if let Some(preferred) = &self.preferred {
            match preferred.synthesize(request).await {
                Ok(audio) => {
                    tracing::debug!(
                        voice = %request.voice,
                        audio_size = audio.data.len(),
                        "Preferred TTS engine succeeded"
                    );
                    return Ok(audio);
                }
                Err(e) => {
                    tracing::warn!(
                        error = %e,
                        voice = %request.voice,
                        "Preferred TTS engine failed, falling back to tone generator"
                    );
                }
            }
        }

        self.fallback.synthesize(request).await
    }
}
