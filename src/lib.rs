//! Koe - 轻量 TTS 转发服务
//!
//! 架构: Hexagonal (Ports & Adapters)
//!
//! 领域层 (domain/):
//! - tone: 兜底提示音的 PCM 采样生成
//! - wav: RIFF/WAVE 编码与解析
//! - voice: 音色目录
//!
//! 应用层 (application/):
//! - Ports: 端口定义（TtsEngine, AudioStore）
//! - Synthesis: 合成策略门面（外部服务优先，本地提示音兜底）
//! - Commands / Queries: 合成命令与音频查询处理器
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API（axum）
//! - Adapters: HTTP TTS Client, Tone TTS Client, File Audio Store
//! - Worker: 过期音频定期清理

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
