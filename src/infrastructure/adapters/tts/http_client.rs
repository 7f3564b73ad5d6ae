//! HTTP TTS Client - 调用外部 TTS HTTP 服务
//!
//! 实现 TtsEnginePort trait，通过 HTTP 调用外部 TTS 服务
//!
//! 外部 TTS API:
//! POST {base_url}/synthesize
//! Request: {"text": "...", "voice": "..."}  (JSON)
//! Response: 音频二进制（通常为 WAV）

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;

use crate::application::ports::{SynthesisRequest, SynthesizedAudio, TtsEnginePort, TtsError};
use crate::domain::wav;

/// TTS 合成请求体 (JSON)
#[derive(Debug, Serialize)]
struct TtsHttpRequest<'a> {
    text: &'a str,
    voice: &'a str,
}

/// HTTP TTS 客户端配置
#[derive(Debug, Clone)]
pub struct HttpTtsClientConfig {
    /// TTS 服务基础 URL
    pub base_url: String,
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
}

impl Default for HttpTtsClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            timeout_secs: 30,
        }
    }
}

impl HttpTtsClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// HTTP TTS 客户端
pub struct HttpTtsClient {
    client: Client,
    config: HttpTtsClientConfig,
}

impl HttpTtsClient {
    /// 创建新的 HTTP TTS 客户端
    pub fn new(config: HttpTtsClientConfig) -> Result<Self, TtsError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| TtsError::NetworkError(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// 获取合成 URL
    fn synthesize_url(&self) -> String {
        format!("{}/synthesize", self.config.base_url)
    }

    /// 获取健康检查 URL
    fn health_url(&self) -> String {
        format!("{}/health", self.config.base_url)
    }
}

#[async_trait]
impl TtsEnginePort for HttpTtsClient {
    async fn synthesize(&self, request: &SynthesisRequest) -> Result<SynthesizedAudio, TtsError> {
        let http_request = TtsHttpRequest {
            text: &request.text,
            voice: &request.voice,
        };

        tracing::debug!(
            url = %self.synthesize_url(),
            text_len = request.text.chars().count(),
            voice = %request.voice,
            "Sending TTS synthesize request"
        );

        let response = self
            .client
            .post(self.synthesize_url())
            .json(&http_request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    TtsError::Timeout
                } else if e.is_connect() {
                    TtsError::NetworkError(format!("Cannot connect to TTS service: {}", e))
                } else {
                    TtsError::NetworkError(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(TtsError::ServiceError(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        let data = response
            .bytes()
            .await
            .map_err(|e| TtsError::InvalidResponse(format!("Failed to read audio: {}", e)))?
            .to_vec();

        if data.is_empty() {
            return Err(TtsError::InvalidResponse("empty audio body".to_string()));
        }

        // 能解析为 WAV 时提取元数据，其他封装格式原样透传
        let (duration_secs, sample_rate) = match wav::parse(&data) {
            Ok(info) => (Some(info.duration_secs()), Some(info.sample_rate)),
            Err(_) => (None, None),
        };

        tracing::info!(
            audio_size = data.len(),
            duration_secs = ?duration_secs,
            sample_rate = ?sample_rate,
            "External TTS synthesis completed"
        );

        Ok(SynthesizedAudio {
            data,
            duration_secs,
            sample_rate,
        })
    }

    async fn health_check(&self) -> bool {
        match self
            .client
            .get(self.health_url())
            .timeout(Duration::from_secs(5))
            .send()
            .await
        {
            Ok(response) => response.status().is_success(),
            Err(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = HttpTtsClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:8000");
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn test_config_builder() {
        let config = HttpTtsClientConfig::new("http://tts.internal:9000").with_timeout(60);
        assert_eq!(config.base_url, "http://tts.internal:9000");
        assert_eq!(config.timeout_secs, 60);
    }

    #[test]
    fn test_urls() {
        let client = HttpTtsClient::new(HttpTtsClientConfig::new("http://example.com")).unwrap();
        assert_eq!(client.synthesize_url(), "http://example.com/synthesize");
        assert_eq!(client.health_url(), "http://example.com/health");
    }
}
