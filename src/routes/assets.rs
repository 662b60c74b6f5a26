use std::sync::Arc;

use axum::{extract::State, response::Response};

use crate::{
    error::AppResult,
    routes::AppState,
    services::assets::{self, StaticAsset},
};

pub async fn index(State(state): State<Arc<AppState>>) -> AppResult<Response> {
    assets::load(&state.static_dir, StaticAsset::Index).await
}

pub async fn script(State(state): State<Arc<AppState>>) -> AppResult<Response> {
    assets::load(&state.static_dir, StaticAsset::Script).await
}

pub async fn stylesheet(State(state): State<Arc<AppState>>) -> AppResult<Response> {
    assets::load(&state.static_dir, StaticAsset::Stylesheet).await
}
