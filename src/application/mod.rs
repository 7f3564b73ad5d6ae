//! 应用层 - 用例编排
//!
//! 包含:
//! - ports: 六边形架构端口定义（TtsEngine、AudioStore）
//! - synthesis: 合成策略门面（外部引擎 + 本地兜底）
//! - commands: 合成命令及处理器
//! - queries: 音频查询及处理器
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;
pub mod queries;
pub mod synthesis;

pub use commands::{SynthesizeCommand, SynthesizeHandler, SynthesizeResponse};
pub use error::ApplicationError;
pub use ports::{
    AudioId, AudioStoreError, AudioStorePort, StoredEntry, SynthesisRequest, SynthesizedAudio,
    TtsEnginePort, TtsError,
};
pub use queries::{GetAudioHandler, GetAudioQuery, GetAudioResponse};
pub use synthesis::SynthesisService;
