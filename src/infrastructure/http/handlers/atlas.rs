//! Atlas Handlers - 圣经地名接地查询

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::application::ports::GeoHint;
use crate::infrastructure::http::dto::ApiResponse;
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LocateRequest {
    pub place: String,
    /// 可选的检索提示坐标（两者必须同时给出）
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct CitationResponse {
    pub title: Option<String>,
    pub uri: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct LocateResponse {
    pub text: String,
    pub citations: Vec<CitationResponse>,
}

/// 地名接地查询
pub async fn locate(
    State(state): State<Arc<AppState>>,
    Json(req): Json<LocateRequest>,
) -> Result<Json<ApiResponse<LocateResponse>>, ApiError> {
    if req.place.trim().is_empty() {
        return Err(ApiError::BadRequest("place is required".to_string()));
    }

    let hint = match (req.latitude, req.longitude) {
        (Some(latitude), Some(longitude)) => Some(GeoHint {
            latitude,
            longitude,
        }),
        (None, None) => None,
        _ => {
            return Err(ApiError::BadRequest(
                "latitude and longitude must be provided together".to_string(),
            ))
        }
    };

    let answer = state.oracle.locate(&req.place, hint).await?;

    Ok(Json(ApiResponse::success(LocateResponse {
        text: answer.text,
        citations: answer
            .citations
            .into_iter()
            .map(|c| CitationResponse {
                title: c.title,
                uri: c.uri,
            })
            .collect(),
    })))
}
