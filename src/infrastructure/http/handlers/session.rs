//! Session Handlers - 会话快照与标签页

use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use std::sync::Arc;

use crate::application::session::Tab;
use crate::infrastructure::http::dto::{ApiResponse, SessionStateResponse};
use crate::infrastructure::http::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SwitchTabRequest {
    pub tab: Tab,
}

/// 完整会话快照
pub async fn session_state(
    State(state): State<Arc<AppState>>,
) -> Json<ApiResponse<SessionStateResponse>> {
    let snapshot = state.controller.snapshot().await;
    Json(ApiResponse::success(SessionStateResponse::from(&snapshot)))
}

/// 切换标签页
pub async fn switch_tab(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SwitchTabRequest>,
) -> Json<ApiResponse<SessionStateResponse>> {
    state.controller.switch_tab(req.tab).await;
    let snapshot = state.controller.snapshot().await;
    Json(ApiResponse::success(SessionStateResponse::from(&snapshot)))
}
