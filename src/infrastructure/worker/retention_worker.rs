//! Retention Worker - 过期音频清理任务
//!
//! 启动时先扫一轮，之后按固定间隔扫描存储，删除超过保留时长的条目。
//! 单个条目删除失败只记日志，扫描继续。任务由 CancellationToken 随进程
//! 生命周期统一取消，不是埋在启动代码里的一次性副作用。

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio_util::sync::CancellationToken;

use crate::application::ports::{AudioId, AudioStorePort, StoredEntry};

/// 清理任务配置
#[derive(Debug, Clone)]
pub struct RetentionConfig {
    /// 扫描间隔（秒）
    pub interval_secs: u64,
    /// 条目最大保留时长（秒）
    pub max_age_secs: u64,
}

impl Default for RetentionConfig {
    fn default() -> Self {
        Self {
            interval_secs: 600,
            max_age_secs: 3600,
        }
    }
}

/// 在条目列表中选出已过期的 ID
///
/// 过期判定为严格大于：恰好等于保留时长的条目不删
pub fn select_expired(
    entries: &[StoredEntry],
    now: DateTime<Utc>,
    max_age_secs: u64,
) -> Vec<AudioId> {
    // 超出 i64 的配置值饱和处理，等同于永不过期
    let max_age_secs = i64::try_from(max_age_secs).unwrap_or(i64::MAX);

    entries
        .iter()
        .filter(|e| {
            let age = now.signed_duration_since(e.created_at);
            age.num_seconds() > max_age_secs
        })
        .map(|e| e.id)
        .collect()
}

/// 过期音频清理 Worker
pub struct RetentionWorker {
    config: RetentionConfig,
    audio_store: Arc<dyn AudioStorePort>,
}

impl RetentionWorker {
    pub fn new(config: RetentionConfig, audio_store: Arc<dyn AudioStorePort>) -> Self {
        Self {
            config,
            audio_store,
        }
    }

    /// 执行一轮清理
    ///
    /// now 显式传入，时间边界可直接测试。返回删除的条目数
    pub async fn sweep_once(&self, now: DateTime<Utc>) -> u64 {
        let entries = match self.audio_store.list().await {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(error = %e, "Retention sweep: failed to list store");
                return 0;
            }
        };

        let expired = select_expired(&entries, now, self.config.max_age_secs);
        let mut deleted = 0u64;

        for id in expired {
            match self.audio_store.delete(id).await {
                Ok(()) => {
                    tracing::info!(audio_id = %id, "Deleted expired audio");
                    deleted += 1;
                }
                Err(e) => {
                    // 可能与请求路径的 delete 竞争，跳过继续
                    tracing::warn!(audio_id = %id, error = %e, "Failed to delete expired audio");
                }
            }
        }

        if deleted > 0 {
            tracing::info!(
                deleted,
                scanned = entries.len(),
                max_age_secs = self.config.max_age_secs,
                "Retention sweep completed"
            );
        }

        deleted
    }

    /// 运行清理循环直到取消
    pub async fn run(self, cancel: CancellationToken) {
        tracing::info!(
            interval_secs = self.config.interval_secs,
            max_age_secs = self.config.max_age_secs,
            "Retention worker started"
        );

        // 启动先扫一轮
        self.sweep_once(Utc::now()).await;

        let mut interval = tokio::time::interval(Duration::from_secs(self.config.interval_secs));
        interval.tick().await; // 第一个 tick 立即完成，已在上面扫过

        loop {
            tokio::select! {
                _ = interval.tick() => {
                    self.sweep_once(Utc::now()).await;
                }
                _ = cancel.cancelled() => {
                    tracing::info!("Retention worker stopped");
                    return;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::AudioStoreError;
    use async_trait::async_trait;
    use chrono::TimeDelta;
    use std::sync::Mutex;

    fn entry(id: AudioId, age_secs: i64, now: DateTime<Utc>) -> StoredEntry {
        StoredEntry {
            id,
            created_at: now - TimeDelta::seconds(age_secs),
        }
    }

    #[test]
    fn test_select_expired_boundary() {
        let now = Utc::now();
        let old = AudioId::generate();
        let fresh = AudioId::generate();
        let exact = AudioId::generate();

        let entries = vec![
            entry(old, 3601, now),
            entry(fresh, 3599, now),
            entry(exact, 3600, now),
        ];

        let expired = select_expired(&entries, now, 3600);
        assert_eq!(expired, vec![old]);
    }

    #[test]
    fn test_select_expired_empty_store() {
        assert!(select_expired(&[], Utc::now(), 3600).is_empty());
    }

    #[test]
    fn test_select_expired_saturates_huge_max_age() {
        // 超出 i64 的保留时长不能回绕成"全部过期"
        let now = Utc::now();
        let entries = vec![entry(AudioId::generate(), 3601, now)];

        assert!(select_expired(&entries, now, u64::MAX).is_empty());
        assert!(select_expired(&entries, now, i64::MAX as u64 + 1).is_empty());
    }

    /// 条目时间可控、删除可注入失败的测试存储
    struct FakeStore {
        entries: Mutex<Vec<StoredEntry>>,
        fail_delete: Option<AudioId>,
        deleted: Mutex<Vec<AudioId>>,
    }

    impl FakeStore {
        fn new(entries: Vec<StoredEntry>, fail_delete: Option<AudioId>) -> Self {
            Self {
                entries: Mutex::new(entries),
                fail_delete,
                deleted: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl AudioStorePort for FakeStore {
        async fn put(&self, _data: &[u8]) -> Result<AudioId, AudioStoreError> {
            unimplemented!("not used by the sweeper")
        }

        async fn get(&self, id: AudioId) -> Result<Vec<u8>, AudioStoreError> {
            Err(AudioStoreError::NotFound(id.to_string()))
        }

        async fn delete(&self, id: AudioId) -> Result<(), AudioStoreError> {
            if self.fail_delete == Some(id) {
                return Err(AudioStoreError::Io("disk error".to_string()));
            }
            self.entries.lock().unwrap().retain(|e| e.id != id);
            self.deleted.lock().unwrap().push(id);
            Ok(())
        }

        async fn list(&self) -> Result<Vec<StoredEntry>, AudioStoreError> {
            Ok(self.entries.lock().unwrap().clone())
        }
    }

    #[tokio::test]
    async fn test_sweep_deletes_only_expired() {
        let now = Utc::now();
        let old = AudioId::generate();
        let fresh = AudioId::generate();
        let store = Arc::new(FakeStore::new(
            vec![entry(old, 7200, now), entry(fresh, 10, now)],
            None,
        ));

        let worker = RetentionWorker::new(RetentionConfig::default(), store.clone());
        let deleted = worker.sweep_once(now).await;

        assert_eq!(deleted, 1);
        assert_eq!(store.deleted.lock().unwrap().as_slice(), &[old]);
        assert_eq!(store.entries.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_sweep_continues_past_delete_failure() {
        let now = Utc::now();
        let failing = AudioId::generate();
        let other = AudioId::generate();
        let store = Arc::new(FakeStore::new(
            vec![entry(failing, 7200, now), entry(other, 7200, now)],
            Some(failing),
        ));

        let worker = RetentionWorker::new(RetentionConfig::default(), store.clone());
        let deleted = worker.sweep_once(now).await;

        // 一个失败不影响另一个被删除
        assert_eq!(deleted, 1);
        assert_eq!(store.deleted.lock().unwrap().as_slice(), &[other]);
    }

    #[tokio::test]
    async fn test_sweep_removes_backdated_file_store_entry() {
        use crate::infrastructure::adapters::FileAudioStore;
        use std::time::{Duration as StdDuration, SystemTime};

        let temp_dir = tempfile::tempdir().unwrap();
        let store = Arc::new(FileAudioStore::new(temp_dir.path()).await.unwrap());

        let old_id = store.put(b"old audio").await.unwrap();
        let fresh_id = store.put(b"fresh audio").await.unwrap();

        // 把旧条目的文件修改时间拨回两小时前，list 的 created_at 取自 mtime
        let old_path = temp_dir.path().join(FileAudioStore::file_name(old_id));
        let file = std::fs::OpenOptions::new()
            .write(true)
            .open(&old_path)
            .unwrap();
        file.set_modified(SystemTime::now() - StdDuration::from_secs(7200))
            .unwrap();

        let worker = RetentionWorker::new(RetentionConfig::default(), store.clone());
        let deleted = worker.sweep_once(Utc::now()).await;

        assert_eq!(deleted, 1);
        assert!(store.get(old_id).await.is_err());
        assert_eq!(store.get(fresh_id).await.unwrap(), b"fresh audio");
    }

    #[tokio::test]
    async fn test_run_stops_on_cancellation() {
        let store = Arc::new(FakeStore::new(Vec::new(), None));
        let worker = RetentionWorker::new(
            RetentionConfig {
                interval_secs: 3600,
                max_age_secs: 3600,
            },
            store,
        );

        let cancel = CancellationToken::new();
        let handle = tokio::spawn(worker.run(cancel.clone()));

        cancel.cancel();
        tokio::time::timeout(Duration::from_secs(1), handle)
            .await
            .expect("worker should stop promptly")
            .unwrap();
    }
}
