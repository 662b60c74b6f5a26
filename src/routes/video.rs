use axum::{
    extract::{Query, State},
    Json,
};
use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    models::VideoDetail,
    routes::{first_param, trimmed, AppState, QueryPairs},
    services::shaper::shape_video_detail,
};

/// Handler for video detail endpoint
pub async fn video(
    State(state): State<Arc<AppState>>,
    Query(pairs): Query<QueryPairs>,
) -> AppResult<Json<VideoDetail>> {
    let video_id = trimmed(first_param(&pairs, "id"));
    if video_id.is_empty() {
        return Err(AppError::InvalidInput("missing id".to_string()));
    }

    let info = state.extractor.fetch_video_info(&video_id).await?;
    let detail = shape_video_detail(info)?;

    tracing::info!(
        video_id = %video_id,
        formats = detail.formats.len(),
        "Video info resolved"
    );

    Ok(Json(detail))
}
