//! Domain Layer - 领域层
//!
//! 纯函数与值对象，不依赖基础设施:
//! - tone: 兜底提示音的 PCM 采样生成
//! - wav: RIFF/WAVE 编码与解析
//! - voice: 音色目录

pub mod tone;
pub mod voice;
pub mod wav;

pub use voice::{VoiceCatalog, VoiceError, DEFAULT_VOICE};
pub use wav::{WavError, WavInfo};
