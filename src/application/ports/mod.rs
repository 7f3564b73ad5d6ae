//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod audio_store;
mod tts_engine;

pub use audio_store::{AudioId, AudioStoreError, AudioStorePort, StoredEntry};
pub use tts_engine::{SynthesisRequest, SynthesizedAudio, TtsEnginePort, TtsError};
