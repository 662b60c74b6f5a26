//! Autocomplete client
//!
//! Queries the public suggestion endpoint with the `firefox` client
//! profile, which answers with plain JSON of the form
//! `["query", ["suggestion", ...]]`.
use std::time::Duration;

use reqwest::Client as HttpClient;
use serde_json::Value;

use crate::{
    error::{AppError, AppResult},
    services::shaper::shape_suggestions,
};

const SUGGEST_TIMEOUT: Duration = Duration::from_secs(5);
const CLIENT_PROFILE: &str = "firefox";
const DATASET: &str = "yt";

/// Trait for autocomplete backends
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait SuggestionSource: Send + Sync {
    async fn fetch_suggestions(&self, query: &str) -> AppResult<Vec<String>>;
}

#[derive(Clone)]
pub struct HttpSuggestionClient {
    http_client: HttpClient,
    api_url: String,
}

impl HttpSuggestionClient {
    pub fn new(api_url: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_url,
        }
    }
}

#[async_trait::async_trait]
impl SuggestionSource for HttpSuggestionClient {
    async fn fetch_suggestions(&self, query: &str) -> AppResult<Vec<String>> {
        let response = self
            .http_client
            .get(&self.api_url)
            .query(&[("client", CLIENT_PROFILE), ("ds", DATASET), ("q", query)])
            .timeout(SUGGEST_TIMEOUT)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "Suggestion API returned status {}: {}",
                status, body
            )));
        }

        let payload: Value = response.json().await?;
        let suggestions = shape_suggestions(&payload);

        tracing::debug!(
            query = %query,
            count = suggestions.len(),
            "Suggestions fetched"
        );

        Ok(suggestions)
    }
}
