//! Background Workers - 后台任务

mod retention_worker;

pub use retention_worker::{select_expired, RetentionConfig, RetentionWorker};
