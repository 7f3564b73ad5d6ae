//! Data Transfer Objects - HTTP 请求/响应结构

use serde::{Deserialize, Serialize};

/// 合成请求体
///
/// text 缺失按空字符串处理，由应用层统一拦截
#[derive(Debug, Deserialize)]
pub struct SynthesizeRequest {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub voice: Option<String>,
}

/// 合成响应体
#[derive(Debug, Serialize)]
pub struct SynthesizeResponse {
    /// 可直接下载的音频 URL
    pub audio_url: String,
    pub text: String,
    pub voice: String,
    /// ISO-8601 时间戳
    pub timestamp: String,
}

/// 健康检查响应体
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: String,
}
