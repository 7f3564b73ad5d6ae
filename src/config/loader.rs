//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 环境变量
//! 2. 配置文件（config.toml）
//! 3. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::AppConfig;

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["config", "config.local"];

/// 加载应用配置
///
/// 按优先级从高到低合并配置：
/// 1. 环境变量（前缀 `KOE_`，层级分隔符 `__`）
/// 2. 配置文件（config.toml 或 config.local.toml）
/// 3. 默认值
///
/// # 环境变量示例
/// - `KOE_SERVER__PORT=8080`
/// - `KOE_TTS__ENABLED=true`
/// - `KOE_TTS__URL=http://tts-server:8000`
/// - `KOE_STORAGE__AUDIO_DIR=/var/lib/koe/audio`
/// - `KOE_RETENTION__MAX_AGE_SECS=7200`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 首先设置默认值（最低优先级）
    builder = builder
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 5001)?
        .set_default("tts.enabled", false)?
        .set_default("tts.url", "http://localhost:8000")?
        .set_default("tts.timeout_secs", 30)?
        .set_default(
            "storage.audio_dir",
            std::env::temp_dir().to_string_lossy().to_string(),
        )?
        .set_default("retention.enabled", true)?
        .set_default("retention.interval_secs", 600)?
        .set_default("retention.max_age_secs", 3600)?
        .set_default("log.level", "info")?
        .set_default("log.json", false)?;

    // 2. 添加配置文件（如果存在）
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 添加环境变量（最高优先级）
    // 前缀: KOE_，层级分隔符: __（双下划线）
    builder = builder.add_source(
        Environment::with_prefix("KOE")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    // 4. 构建并反序列化
    let config = builder.build()?;
    let app_config: AppConfig = config
        .try_deserialize()
        .map_err(|e| ConfigError::ParseError(format!("Failed to deserialize config: {}", e)))?;

    // 5. 验证配置
    validate_config(&app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "Server port cannot be 0".to_string(),
        ));
    }

    if config.tts.enabled && config.tts.url.is_empty() {
        return Err(ConfigError::ValidationError(
            "TTS URL cannot be empty when TTS is enabled".to_string(),
        ));
    }

    if config.storage.audio_dir.as_os_str().is_empty() {
        return Err(ConfigError::ValidationError(
            "Audio directory cannot be empty".to_string(),
        ));
    }

    if config.retention.enabled && config.retention.interval_secs == 0 {
        return Err(ConfigError::ValidationError(
            "Retention interval cannot be 0 when retention is enabled".to_string(),
        ));
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志）
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Server: {}:{}", config.server.host, config.server.port);
    tracing::info!("Public Base URL: {}", config.server.public_base_url());
    tracing::info!("External TTS Enabled: {}", config.tts.enabled);
    if config.tts.enabled {
        tracing::info!("External TTS URL: {}", config.tts.url);
        tracing::info!("External TTS Timeout: {}s", config.tts.timeout_secs);
    }
    tracing::info!("Audio Directory: {:?}", config.storage.audio_dir);
    tracing::info!("Retention Enabled: {}", config.retention.enabled);
    if config.retention.enabled {
        tracing::info!("Retention Interval: {}s", config.retention.interval_secs);
        tracing::info!("Retention Max Age: {}s", config.retention.max_age_secs);
    }
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_passes_for_valid_config() {
        let config = AppConfig::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validation_error_for_zero_port() {
        let mut config = AppConfig::default();
        config.server.port = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_empty_tts_url_when_enabled() {
        let mut config = AppConfig::default();
        config.tts.enabled = true;
        config.tts.url = String::new();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_empty_tts_url_allowed_when_disabled() {
        let mut config = AppConfig::default();
        config.tts.url = String::new();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validation_error_for_zero_retention_interval() {
        let mut config = AppConfig::default();
        config.retention.interval_secs = 0;
        assert!(validate_config(&config).is_err());
    }
}
