//! Library Handlers - 书卷目录与每日金句

use axum::extract::State;
use axum::Json;
use std::sync::Arc;

use crate::domain::canon::catalog;
use crate::infrastructure::http::dto::{ApiResponse, BookResponse, VerseOfDayResponse};
use crate::infrastructure::http::state::AppState;

/// 列出全部书卷
pub async fn list_books() -> Json<ApiResponse<Vec<BookResponse>>> {
    let books: Vec<BookResponse> = catalog().iter().map(BookResponse::from).collect();
    Json(ApiResponse::success(books))
}

/// 本会话的每日金句
pub async fn verse_of_day(
    State(state): State<Arc<AppState>>,
) -> Json<ApiResponse<VerseOfDayResponse>> {
    let vod = state.controller.verse_of_day().await;
    Json(ApiResponse::success(VerseOfDayResponse::from(&vod)))
}
