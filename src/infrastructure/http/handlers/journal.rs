//! Journal Handlers - 书签 / 祷告 / 笔记

use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use std::sync::Arc;

use crate::infrastructure::http::dto::{
    ApiResponse, BookmarkResponse, Empty, NoteResponse, PrayerResponse,
};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

// ============================================================================
// DTOs
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct AddBookmarkRequest {
    /// 当前章里的节号
    pub verse: u32,
}

#[derive(Debug, Deserialize)]
pub struct CreatePrayerRequest {
    pub title: String,
    #[serde(default)]
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct AnswerPrayerRequest {
    pub id: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateNoteRequest {
    pub verse_ref: String,
    #[serde(default)]
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct EditNoteRequest {
    pub id: String,
    pub content: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// 列出书签
pub async fn list_bookmarks(
    State(state): State<Arc<AppState>>,
) -> Json<ApiResponse<Vec<BookmarkResponse>>> {
    let snapshot = state.controller.snapshot().await;
    let bookmarks = snapshot
        .bookmarks
        .iter()
        .map(BookmarkResponse::from)
        .collect();
    Json(ApiResponse::success(bookmarks))
}

/// 为当前章的某一节加书签
pub async fn add_bookmark(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AddBookmarkRequest>,
) -> Result<Json<ApiResponse<BookmarkResponse>>, ApiError> {
    let bookmark = state.controller.add_bookmark(req.verse).await?;
    Ok(Json(ApiResponse::success(BookmarkResponse::from(
        &bookmark,
    ))))
}

/// 列出祷告
pub async fn list_prayers(
    State(state): State<Arc<AppState>>,
) -> Json<ApiResponse<Vec<PrayerResponse>>> {
    let snapshot = state.controller.snapshot().await;
    let prayers = snapshot.prayers.iter().map(PrayerResponse::from).collect();
    Json(ApiResponse::success(prayers))
}

/// 新建祷告
pub async fn create_prayer(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreatePrayerRequest>,
) -> Result<Json<ApiResponse<PrayerResponse>>, ApiError> {
    let prayer = state
        .controller
        .create_prayer(&req.title, &req.content)
        .await?;
    Ok(Json(ApiResponse::success(PrayerResponse::from(&prayer))))
}

/// 标记祷告已应允
pub async fn answer_prayer(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AnswerPrayerRequest>,
) -> Result<Json<ApiResponse<Empty>>, ApiError> {
    state.controller.answer_prayer(&req.id).await?;
    Ok(Json(ApiResponse::ok()))
}

/// 列出笔记
pub async fn list_notes(
    State(state): State<Arc<AppState>>,
) -> Json<ApiResponse<Vec<NoteResponse>>> {
    let snapshot = state.controller.snapshot().await;
    let notes = snapshot.notes.iter().map(NoteResponse::from).collect();
    Json(ApiResponse::success(notes))
}

/// 新建笔记
pub async fn create_note(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateNoteRequest>,
) -> Result<Json<ApiResponse<NoteResponse>>, ApiError> {
    let note = state
        .controller
        .create_note(&req.verse_ref, &req.content)
        .await?;
    Ok(Json(ApiResponse::success(NoteResponse::from(&note))))
}

/// 编辑笔记内容
pub async fn edit_note(
    State(state): State<Arc<AppState>>,
    Json(req): Json<EditNoteRequest>,
) -> Result<Json<ApiResponse<NoteResponse>>, ApiError> {
    let note = state.controller.edit_note(&req.id, &req.content).await?;
    Ok(Json(ApiResponse::success(NoteResponse::from(&note))))
}
