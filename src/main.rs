//! Koe - 轻量 TTS 转发服务
//!
//! 接收文本 → 合成语音（外部 TTS 优先，本地提示音兜底）→
//! 临时存储 → 按 ID 提供下载，过期条目定期清理。

use std::sync::Arc;

use koe::application::{SynthesisService, TtsEnginePort};
use koe::config::{load_config, print_config};
use koe::infrastructure::adapters::{
    FileAudioStore, HttpTtsClient, HttpTtsClientConfig, ToneTtsClient,
};
use koe::infrastructure::http::{AppState, HttpServer, ServerConfig};
use koe::infrastructure::worker::{RetentionConfig, RetentionWorker};
use tokio_util::sync::CancellationToken;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    // 初始化日志
    let log_filter = format!(
        "{},koe={},tower_http=debug",
        config.log.level, config.log.level
    );
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter));
    if config.log.json {
        tracing_subscriber::fmt().json().with_env_filter(env_filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    tracing::info!("Koe - 轻量 TTS 转发服务");
    print_config(&config);

    // 确保存储目录存在
    tokio::fs::create_dir_all(&config.storage.audio_dir).await?;

    // 创建文件音频存储
    let audio_store = Arc::new(FileAudioStore::new(&config.storage.audio_dir).await?);

    // 创建合成门面：可选的外部 TTS 引擎 + 本地提示音兜底
    let preferred: Option<Arc<dyn TtsEnginePort>> = if config.tts.enabled {
        let tts_config = HttpTtsClientConfig {
            base_url: config.tts.url.clone(),
            timeout_secs: config.tts.timeout_secs,
        };
        Some(Arc::new(HttpTtsClient::new(tts_config)?))
    } else {
        None
    };
    let synthesis = Arc::new(SynthesisService::new(
        preferred,
        Arc::new(ToneTtsClient::new()),
    ));

    // 启动过期音频清理 Worker（随进程生命周期取消）
    let cancel = CancellationToken::new();
    if config.retention.enabled {
        let worker = RetentionWorker::new(
            RetentionConfig {
                interval_secs: config.retention.interval_secs,
                max_age_secs: config.retention.max_age_secs,
            },
            audio_store.clone(),
        );
        tokio::spawn(worker.run(cancel.clone()));
    }

    // 创建 HTTP 服务器
    let server_config = ServerConfig::new(&config.server.host, config.server.port);
    let state = AppState::new(config.server.public_base_url(), synthesis, audio_store);
    let server = HttpServer::new(server_config, state);

    tracing::info!("Starting HTTP server...");

    // 启动服务器（带优雅关闭），关闭信号同时取消清理任务
    let worker_cancel = cancel.clone();
    server
        .run_with_shutdown(async move {
            tokio::signal::ctrl_c()
                .await
                .expect("Failed to listen for ctrl-c");
            tracing::info!("Received shutdown signal");
            worker_cancel.cancel();
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
