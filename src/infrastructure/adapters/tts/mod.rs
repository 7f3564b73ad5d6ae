//! TTS Adapters - 合成引擎实现

mod http_client;
mod tone_client;

pub use http_client::{HttpTtsClient, HttpTtsClientConfig};
pub use tone_client::ToneTtsClient;
