//! HTTP Handlers

mod audio;
mod health;
mod synthesize;
mod voices;

pub use audio::get_audio;
pub use health::{health, home};
pub use synthesize::synthesize;
pub use voices::list_voices;
