//! Storage Adapters - 音频存储实现

mod file_store;

pub use file_store::FileAudioStore;
