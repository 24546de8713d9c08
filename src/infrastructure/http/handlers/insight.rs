//! Insight Handlers - 深度洞见 / 灵修 / 经文注释

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::infrastructure::http::dto::ApiResponse;
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

#[derive(Debug, Serialize)]
pub struct InsightResponse {
    pub is_loading: bool,
    pub insight: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TextResponse {
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct CommentaryRequest {
    pub verse_text: String,
}

/// 请求当前书卷的深度洞见
///
/// 网关失败不报错：控制器落地固定兜底文案（与原视图行为一致）
pub async fn deep_insight(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<InsightResponse>>, ApiError> {
    let snapshot = state.controller.fetch_insight().await?;
    Ok(Json(ApiResponse::success(InsightResponse {
        is_loading: snapshot.is_insight_loading,
        insight: snapshot.insight,
    })))
}

/// 每日灵修短文
pub async fn daily_devotional(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<TextResponse>>, ApiError> {
    let text = state.oracle.daily_devotional().await?;
    Ok(Json(ApiResponse::success(TextResponse { text })))
}

/// 单节经文注释
pub async fn verse_commentary(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CommentaryRequest>,
) -> Result<Json<ApiResponse<TextResponse>>, ApiError> {
    if req.verse_text.trim().is_empty() {
        return Err(ApiError::BadRequest("verse_text is required".to_string()));
    }
    let text = state.oracle.verse_commentary(&req.verse_text).await?;
    Ok(Json(ApiResponse::success(TextResponse { text })))
}
