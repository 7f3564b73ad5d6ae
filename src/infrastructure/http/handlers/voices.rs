//! Voices Handler - 音色目录

use axum::{extract::State, Json};
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::infrastructure::http::state::AppState;

/// GET /voices
///
/// 返回音色 ID → 显示名称的静态映射
pub async fn list_voices(
    State(state): State<Arc<AppState>>,
) -> Json<BTreeMap<&'static str, &'static str>> {
    Json(state.catalog.iter().collect())
}
