use serde::{Deserialize, Serialize};

/// One search hit as returned to the client
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchResultItem {
    pub id: Option<String>,
    pub title: Option<String>,
    pub channel: Option<String>,
    pub thumbnail: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

/// Full metadata for a single video
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VideoDetail {
    pub id: Option<String>,
    pub title: Option<String>,
    pub channel: Option<String>,
    pub channel_url: Option<String>,
    pub thumbnail: Option<String>,
    pub description: Option<String>,
    /// Muxed formats only, highest resolution first
    pub formats: Vec<FormatOption>,
}

/// A playable stream variant carrying both audio and video
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FormatOption {
    pub itag: Option<String>,
    pub height: Option<u64>,
    pub fps: Option<f64>,
    pub ext: Option<String>,
    pub url: Option<String>,
    pub format_note: Option<String>,
    pub filesize: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct SearchResponse {
    pub results: Vec<SearchResultItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct SuggestionResponse {
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HealthResponse {
    pub status: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}
