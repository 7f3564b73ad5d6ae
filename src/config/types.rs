//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;
use std::path::PathBuf;

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// 服务器配置
    #[serde(default)]
    pub server: ServerConfig,

    /// 外部 TTS 引擎配置
    #[serde(default)]
    pub tts: TtsConfig,

    /// 存储配置
    #[serde(default)]
    pub storage: StorageConfig,

    /// 音频保留配置
    #[serde(default)]
    pub retention: RetentionConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 服务器配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,

    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,

    /// 对外可达的 Base URL（用于拼接 audio_url）
    /// 未设置时使用 http://{host}:{port}
    #[serde(default)]
    pub base_url: Option<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5001
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            base_url: None,
        }
    }
}

impl ServerConfig {
    /// 获取服务器监听地址
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// 获取对外的 Base URL
    pub fn public_base_url(&self) -> String {
        self.base_url.clone().unwrap_or_else(|| {
            let host = if self.host == "0.0.0.0" {
                "localhost"
            } else {
                &self.host
            };
            format!("http://{}:{}", host, self.port)
        })
    }
}

/// 外部 TTS 引擎配置
#[derive(Debug, Clone, Deserialize)]
pub struct TtsConfig {
    /// 是否启用外部 TTS 服务（关闭时只走本地兜底）
    #[serde(default)]
    pub enabled: bool,

    /// TTS 服务基础 URL
    #[serde(default = "default_tts_url")]
    pub url: String,

    /// 请求超时时间（秒）
    #[serde(default = "default_tts_timeout")]
    pub timeout_secs: u64,
}

fn default_tts_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_tts_timeout() -> u64 {
    30
}

impl Default for TtsConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            url: default_tts_url(),
            timeout_secs: default_tts_timeout(),
        }
    }
}

/// 存储配置
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// 音频存储目录，默认平台临时目录
    #[serde(default = "default_audio_dir")]
    pub audio_dir: PathBuf,
}

fn default_audio_dir() -> PathBuf {
    std::env::temp_dir()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            audio_dir: default_audio_dir(),
        }
    }
}

/// 音频保留配置
#[derive(Debug, Clone, Deserialize)]
pub struct RetentionConfig {
    /// 是否启用定期清理
    #[serde(default = "default_retention_enabled")]
    pub enabled: bool,

    /// 清理扫描间隔（秒）
    #[serde(default = "default_retention_interval")]
    pub interval_secs: u64,

    /// 条目最大保留时长（秒）
    #[serde(default = "default_max_age")]
    pub max_age_secs: u64,
}

fn default_retention_enabled() -> bool {
    true
}

fn default_retention_interval() -> u64 {
    600 // 10 分钟
}

fn default_max_age() -> u64 {
    3600 // 1 小时
}

impl Default for RetentionConfig {
    fn default() -> Self {
        Self {
            enabled: default_retention_enabled(),
            interval_secs: default_retention_interval(),
            max_age_secs: default_max_age(),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 是否启用 JSON 格式
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 5001);
        assert!(!config.tts.enabled);
        assert_eq!(config.retention.max_age_secs, 3600);
        assert_eq!(config.storage.audio_dir, std::env::temp_dir());
    }

    #[test]
    fn test_server_addr() {
        let config = ServerConfig::default();
        assert_eq!(config.addr(), "0.0.0.0:5001");
    }

    #[test]
    fn test_public_base_url_replaces_wildcard_host() {
        let config = ServerConfig::default();
        assert_eq!(config.public_base_url(), "http://localhost:5001");
    }

    #[test]
    fn test_public_base_url_explicit_override() {
        let config = ServerConfig {
            base_url: Some("https://tts.example.com".to_string()),
            ..Default::default()
        };
        assert_eq!(config.public_base_url(), "https://tts.example.com");
    }
}
