//! File Audio Store - 文件系统音频存储实现
//!
//! 实现 AudioStorePort trait。一个条目一个文件，文件名由 ID 决定，
//! 目录列举即索引，创建时间取文件修改时间。
//!
//! 文件名保留原有的 `.mp3` 后缀以兼容既有客户端，
//! 即使兜底路径写入的内容实际是 WAV。

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::application::ports::{AudioId, AudioStoreError, AudioStorePort, StoredEntry};

/// 存储文件名前缀
const FILE_PREFIX: &str = "speech_";

/// 存储文件名后缀
const FILE_SUFFIX: &str = ".mp3";

/// 文件系统音频存储
pub struct FileAudioStore {
    /// 存储根目录（显式注入，不读进程全局状态）
    base_dir: PathBuf,
}

impl FileAudioStore {
    /// 创建新的文件存储，确保根目录存在
    pub async fn new(base_dir: impl AsRef<Path>) -> Result<Self, AudioStoreError> {
        let base_dir = base_dir.as_ref().to_path_buf();

        fs::create_dir_all(&base_dir)
            .await
            .map_err(|e| AudioStoreError::Io(e.to_string()))?;

        Ok(Self { base_dir })
    }

    /// 获取存储根目录
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// ID 对应的存储文件名
    pub fn file_name(id: AudioId) -> String {
        format!("{}{}{}", FILE_PREFIX, id, FILE_SUFFIX)
    }

    fn audio_path(&self, id: AudioId) -> PathBuf {
        self.base_dir.join(Self::file_name(id))
    }

    /// 从文件名还原 ID，非本存储的文件返回 None
    fn parse_file_name(name: &str) -> Option<AudioId> {
        let id_part = name.strip_prefix(FILE_PREFIX)?.strip_suffix(FILE_SUFFIX)?;
        AudioId::parse(id_part)
    }
}

#[async_trait]
impl AudioStorePort for FileAudioStore {
    async fn put(&self, data: &[u8]) -> Result<AudioId, AudioStoreError> {
        let id = AudioId::generate();
        let path = self.audio_path(id);

        fs::write(&path, data)
            .await
            .map_err(|e| AudioStoreError::Io(e.to_string()))?;

        tracing::debug!(
            audio_id = %id,
            size = data.len(),
            path = %path.display(),
            "Stored audio file"
        );

        Ok(id)
    }

    async fn get(&self, id: AudioId) -> Result<Vec<u8>, AudioStoreError> {
        let path = self.audio_path(id);

        match fs::read(&path).await {
            Ok(data) => Ok(data),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(AudioStoreError::NotFound(id.to_string()))
            }
            Err(e) => Err(AudioStoreError::Io(e.to_string())),
        }
    }

    async fn delete(&self, id: AudioId) -> Result<(), AudioStoreError> {
        let path = self.audio_path(id);

        match fs::remove_file(&path).await {
            Ok(()) => {
                tracing::debug!(audio_id = %id, "Deleted audio file");
                Ok(())
            }
            // 不存在视为已删除
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AudioStoreError::Io(e.to_string())),
        }
    }

    async fn list(&self) -> Result<Vec<StoredEntry>, AudioStoreError> {
        let mut entries = Vec::new();
        let mut dir = fs::read_dir(&self.base_dir)
            .await
            .map_err(|e| AudioStoreError::Io(e.to_string()))?;

        while let Some(entry) = dir
            .next_entry()
            .await
            .map_err(|e| AudioStoreError::Io(e.to_string()))?
        {
            let name = entry.file_name();
            let Some(id) = name.to_str().and_then(Self::parse_file_name) else {
                continue;
            };

            let Ok(metadata) = entry.metadata().await else {
                // get/delete 竞争下条目可能刚被移除，跳过
                continue;
            };

            let created_at: DateTime<Utc> = metadata
                .modified()
                .map(DateTime::from)
                .unwrap_or_else(|_| Utc::now());

            entries.push(StoredEntry { id, created_at });
        }

        Ok(entries)
    }
}
