use std::io::ErrorKind;
use std::path::Path;

use axum::{
    http::{header, HeaderValue},
    response::{IntoResponse, Response},
};

use crate::error::{AppError, AppResult};

/// The only files the frontend bundle exposes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StaticAsset {
    Index,
    Script,
    Stylesheet,
}

impl StaticAsset {
    pub fn file_name(self) -> &'static str {
        match self {
            StaticAsset::Index => "index.html",
            StaticAsset::Script => "app.js",
            StaticAsset::Stylesheet => "styles.css",
        }
    }

    pub fn content_type(self) -> HeaderValue {
        let mime = mime_guess::from_path(self.file_name()).first_or_octet_stream();
        HeaderValue::from_str(mime.as_ref())
            .unwrap_or_else(|_| HeaderValue::from_static("application/octet-stream"))
    }
}

/// Reads one bundle file from `static_dir` into a response
pub async fn load(static_dir: &Path, asset: StaticAsset) -> AppResult<Response> {
    let path = static_dir.join(asset.file_name());

    let bytes = tokio::fs::read(&path).await.map_err(|e| match e.kind() {
        ErrorKind::NotFound => AppError::NotFound(asset.file_name().to_string()),
        _ => AppError::Internal(format!("failed to read {}: {}", path.display(), e)),
    })?;

    Ok(([(header::CONTENT_TYPE, asset.content_type())], bytes).into_response())
}
