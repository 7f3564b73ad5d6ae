//! Health Handlers - 存活探针与健康检查

use axum::Json;
use chrono::Utc;

use crate::infrastructure::http::dto::HealthResponse;

/// GET / - 存活探针
pub async fn home() -> &'static str {
    "Koe TTS Server is running!"
}

/// GET /health - 健康检查
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        timestamp: Utc::now().to_rfc3339(),
    })
}
