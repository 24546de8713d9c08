//! Narration Handlers - 经文朗读
//!
//! 朗读是异步的：接口立即返回 started/busy，
//! 完成与失败经全局 WebSocket 通知（异步处理 + WS 通知模式）

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::application::narration::NarrationOutcome;
use crate::infrastructure::http::dto::ApiResponse;
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SpeakRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct SpeakResponse {
    pub status: &'static str, // "started" | "busy"
}

/// 朗读一段经文
///
/// 在途期间的请求被丢弃（返回 busy，不排队）
pub async fn speak(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SpeakRequest>,
) -> Result<Json<ApiResponse<SpeakResponse>>, ApiError> {
    if req.text.trim().is_empty() {
        return Err(ApiError::BadRequest("text is required".to_string()));
    }

    if !state.narrator.try_begin() {
        tracing::debug!("Narration request dropped: playback in progress");
        return Ok(Json(ApiResponse::success(SpeakResponse {
            status: "busy",
        })));
    }

    state.event_publisher.publish_narration_started();

    // 异步执行合成与播放，结果经 WS 通知
    let narrator = state.narrator.clone();
    let publisher = state.event_publisher.clone();
    tokio::spawn(async move {
        match narrator.perform(&req.text).await {
            Ok(NarrationOutcome::Played) => {
                tracing::info!("Narration finished");
                publisher.publish_narration_finished();
            }
            Ok(NarrationOutcome::NoAudio) => {
                tracing::info!("Narration skipped: no audio payload");
                publisher.publish_narration_unavailable();
            }
            Err(e) => {
                tracing::warn!(error = %e, "Narration failed");
                publisher.publish_narration_failed(&e.to_string());
            }
        }
    });

    Ok(Json(ApiResponse::success(SpeakResponse {
        status: "started",
    })))
}
