//! HTTP Routes
//!
//! API Endpoints:
//! - /            GET   存活探针
//! - /synthesize  POST  合成语音，返回音频 URL
//! - /audio/{id}  GET   下载音频文件
//! - /voices      GET   音色目录
//! - /health      GET   健康检查

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(handlers::home))
        .route("/synthesize", post(handlers::synthesize))
        .route("/audio/:id", get(handlers::get_audio))
        .route("/voices", get(handlers::list_voices))
        .route("/health", get(handlers::health))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::SynthesisService;
    use crate::infrastructure::adapters::{FileAudioStore, ToneTtsClient};
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tempfile::{tempdir, TempDir};
    use tower::util::ServiceExt;

    /// 兜底引擎 + 临时目录存储的完整路由
    async fn test_app() -> (Router, TempDir) {
        let temp_dir = tempdir().unwrap();
        let store = Arc::new(FileAudioStore::new(temp_dir.path()).await.unwrap());
        let synthesis = Arc::new(SynthesisService::new(None, Arc::new(ToneTtsClient::new())));
        let state = Arc::new(AppState::new("http://localhost:5001", synthesis, store));

        (create_routes().with_state(state), temp_dir)
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_home_returns_liveness_string() {
        let (app, _dir) = test_app().await;
        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&bytes[..], b"Koe TTS Server is running!");
    }

    #[tokio::test]
    async fn test_health_reports_healthy() {
        let (app, _dir) = test_app().await;
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["status"], "healthy");
        assert!(body["timestamp"].is_string());
    }

    #[tokio::test]
    async fn test_voices_returns_catalog() {
        let (app, _dir) = test_app().await;
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/voices")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["japanese_female"], "Japanese Female Voice");
        assert_eq!(body["japanese_male"], "Japanese Male Voice");
        assert_eq!(body["japanese_cute"], "Japanese Cute Voice");
    }

    #[tokio::test]
    async fn test_synthesize_rejects_empty_text() {
        let (app, _dir) = test_app().await;
        let response = app
            .oneshot(post_json("/synthesize", json!({"text": ""})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"], "text is empty");
    }

    #[tokio::test]
    async fn test_synthesize_rejects_missing_text() {
        let (app, _dir) = test_app().await;
        let response = app
            .oneshot(post_json("/synthesize", json!({})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_synthesize_rejects_unknown_voice() {
        let (app, _dir) = test_app().await;
        let response = app
            .oneshot(post_json(
                "/synthesize",
                json!({"text": "hello", "voice": "klingon"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_synthesize_then_download_round_trip() {
        let (app, _dir) = test_app().await;

        let response = app
            .clone()
            .oneshot(post_json("/synthesize", json!({"text": "こんにちは"})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["text"], "こんにちは");
        assert_eq!(body["voice"], "japanese_female");
        assert!(body["timestamp"].is_string());

        let audio_url = body["audio_url"].as_str().unwrap();
        assert!(audio_url.starts_with("http://localhost:5001/audio/"));

        // 按返回 URL 的路径部分取音频
        let path = audio_url.strip_prefix("http://localhost:5001").unwrap();
        let response = app
            .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE].to_str().unwrap(),
            "audio/mpeg"
        );
        let disposition = response.headers()[header::CONTENT_DISPOSITION]
            .to_str()
            .unwrap()
            .to_string();
        assert!(disposition.starts_with("attachment; filename=\"speech_"));
        assert!(disposition.ends_with(".mp3\""));

        // 5 字符 → 0.5 秒 → 44 + 44100 字节的 WAV
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(bytes.len(), 44144);
        assert_eq!(&bytes[0..4], b"RIFF");
    }

    #[tokio::test]
    async fn test_unknown_audio_id_is_404() {
        let (app, _dir) = test_app().await;
        let uri = format!("/audio/{}", uuid::Uuid::new_v4());
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await;
        assert_eq!(body["error"], "audio file not found");
    }

    #[tokio::test]
    async fn test_malformed_audio_id_is_404_not_error() {
        let (app, _dir) = test_app().await;
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/audio/not-a-uuid")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await;
        assert_eq!(body["error"], "audio file not found");
    }
}
