//! Synthesize Handler - 语音合成入口

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::application::SynthesizeCommand;
use crate::infrastructure::http::dto::{SynthesizeRequest, SynthesizeResponse};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// POST /synthesize
///
/// 空文本返回 400，成功返回可下载的 audio_url
pub async fn synthesize(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SynthesizeRequest>,
) -> Result<Json<SynthesizeResponse>, ApiError> {
    let command = SynthesizeCommand {
        text: req.text,
        voice: req.voice,
    };

    let result = state.synthesize_handler.handle(command).await?;

    Ok(Json(SynthesizeResponse {
        audio_url: state.audio_url(result.audio_id),
        text: result.text,
        voice: result.voice,
        timestamp: result.timestamp.to_rfc3339(),
    }))
}
