use axum::{
    extract::{Query, State},
    Json,
};
use std::num::IntErrorKind;
use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    models::SearchResponse,
    routes::{first_param, trimmed, AppState, QueryPairs},
    services::shaper::shape_search_results,
};

pub const DEFAULT_SEARCH_LIMIT: i64 = 12;
pub const MAX_SEARCH_LIMIT: i64 = 30;

#[derive(Debug, Default)]
pub struct SearchQuery {
    q: Option<String>,
    limit: Option<String>,
}

impl From<QueryPairs> for SearchQuery {
    fn from(pairs: QueryPairs) -> Self {
        Self {
            q: first_param(&pairs, "q"),
            limit: first_param(&pairs, "limit"),
        }
    }
}

/// Parses `limit` and caps it. Only the upper bound is enforced.
fn resolve_limit(raw: Option<&str>) -> AppResult<i64> {
    let limit = match raw {
        None => DEFAULT_SEARCH_LIMIT,
        Some(value) => match value.trim().parse::<i64>() {
            Ok(limit) => limit,
            Err(e) => match e.kind() {
                IntErrorKind::PosOverflow => MAX_SEARCH_LIMIT,
                IntErrorKind::NegOverflow => i64::MIN,
                _ => return Err(AppError::InvalidInput("invalid limit".to_string())),
            },
        },
    };

    Ok(limit.min(MAX_SEARCH_LIMIT))
}

/// Handler for video search endpoint
pub async fn search(
    State(state): State<Arc<AppState>>,
    Query(pairs): Query<QueryPairs>,
) -> AppResult<Json<SearchResponse>> {
    let params = SearchQuery::from(pairs);

    let query = trimmed(params.q);
    if query.is_empty() {
        return Ok(Json(SearchResponse::default()));
    }

    let limit = resolve_limit(params.limit.as_deref())?;

    let raw = state.extractor.search_videos(&query, limit).await?;
    let results = shape_search_results(&raw);

    tracing::info!(
        query = %query,
        limit,
        results = results.len(),
        "Search completed"
    );

    Ok(Json(SearchResponse { results }))
}
