//! Infrastructure Adapters
//!
//! 六边形架构的适配器实现

pub mod storage;
pub mod tts;

pub use storage::FileAudioStore;
pub use tts::{HttpTtsClient, HttpTtsClientConfig, ToneTtsClient};
