//! Tone TTS Client - 本地兜底合成引擎
//!
//! 不调用任何外部服务：按文本长度生成正弦提示音并编码为 WAV。
//! 对非空文本永不失败，是合成门面的最后一级。

use async_trait::async_trait;

use crate::application::ports::{SynthesisRequest, SynthesizedAudio, TtsEnginePort, TtsError};
use crate::domain::{tone, wav};

/// 本地提示音引擎
#[derive(Debug, Default)]
pub struct ToneTtsClient;

impl ToneTtsClient {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl TtsEnginePort for ToneTtsClient {
    async fn synthesize(&self, request: &SynthesisRequest) -> Result<SynthesizedAudio, TtsError> {
        let samples = tone::generate(&request.text);
        let duration = tone::duration_secs(&request.text);
        let data = wav::encode(tone::SAMPLE_RATE, &samples);

        tracing::debug!(
            text_len = request.text.chars().count(),
            voice = %request.voice,
            duration_secs = duration,
            audio_size = data.len(),
            "ToneTtsClient: generated fallback audio"
        );

        Ok(SynthesizedAudio {
            data,
            duration_secs: Some(duration),
            sample_rate: Some(tone::SAMPLE_RATE),
        })
    }
}
