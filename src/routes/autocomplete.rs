use axum::{
    extract::{Query, State},
    Json,
};
use std::sync::Arc;

use crate::{
    error::AppResult,
    models::SuggestionResponse,
    routes::{first_param, trimmed, AppState, QueryPairs},
};

/// Handler for autocomplete endpoint
pub async fn autocomplete(
    State(state): State<Arc<AppState>>,
    Query(pairs): Query<QueryPairs>,
) -> AppResult<Json<SuggestionResponse>> {
    let query = trimmed(first_param(&pairs, "q"));
    if query.is_empty() {
        return Ok(Json(SuggestionResponse::default()));
    }

    let suggestions = state.suggestions.fetch_suggestions(&query).await?;

    tracing::info!(
        query = %query,
        suggestions = suggestions.len(),
        "Autocomplete completed"
    );

    Ok(Json(SuggestionResponse { suggestions }))
}
