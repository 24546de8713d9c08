//! Reader Handlers - 阅读视图与导航

use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use std::sync::Arc;

use crate::infrastructure::http::dto::{ApiResponse, ReaderViewResponse};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SelectBookRequest {
    pub id: String,
}

#[derive(Debug, Deserialize)]
pub struct SelectChapterRequest {
    pub chapter: u32,
}

/// 当前阅读视图
pub async fn reader_view(
    State(state): State<Arc<AppState>>,
) -> Json<ApiResponse<ReaderViewResponse>> {
    let snapshot = state.controller.snapshot().await;
    Json(ApiResponse::success(ReaderViewResponse::from(&snapshot)))
}

/// 选中书卷（章号归一并重新取章）
pub async fn select_book(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SelectBookRequest>,
) -> Result<Json<ApiResponse<ReaderViewResponse>>, ApiError> {
    let snapshot = state.controller.select_book(&req.id).await?;

    if snapshot.reader_error.is_none() {
        state.event_publisher.publish_verses_ready(
            snapshot.book.name(),
            snapshot.chapter,
            snapshot.verses.len(),
        );
    }

    Ok(Json(ApiResponse::success(ReaderViewResponse::from(
        &snapshot,
    ))))
}

/// 选中章（按当前书卷重新取章）
pub async fn select_chapter(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SelectChapterRequest>,
) -> Result<Json<ApiResponse<ReaderViewResponse>>, ApiError> {
    let snapshot = state.controller.select_chapter(req.chapter).await?;

    if snapshot.reader_error.is_none() {
        state.event_publisher.publish_verses_ready(
            snapshot.book.name(),
            snapshot.chapter,
            snapshot.verses.len(),
        );
    }

    Ok(Json(ApiResponse::success(ReaderViewResponse::from(
        &snapshot,
    ))))
}
