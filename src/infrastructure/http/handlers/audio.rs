//! Audio Handler - 音频文件下载

use axum::{
    body::Body,
    extract::{Path, State},
    http::{header, StatusCode},
    response::Response,
};
use std::sync::Arc;

use crate::application::GetAudioQuery;
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// GET /audio/{id}
///
/// 以附件形式返回存储的音频字节。文件名沿用 `speech_{id}.mp3`
/// 以兼容既有客户端（兜底路径的内容实际是 WAV）
pub async fn get_audio(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let result = state
        .get_audio_handler
        .handle(GetAudioQuery { id })
        .await?;

    let filename = format!("speech_{}.mp3", result.id);

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "audio/mpeg")
        .header(header::CONTENT_LENGTH, result.data.len())
        .header(
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", filename),
        )
        .body(Body::from(result.data))
        .map_err(|e| ApiError::Internal(e.to_string()))
}
