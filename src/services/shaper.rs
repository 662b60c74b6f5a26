//! Converts raw collaborator payloads into the response models.
//!
//! This is the only place that looks inside yt-dlp or suggestion JSON;
//! everything downstream works with typed models.
use serde_json::Value;

use crate::{
    error::{AppError, AppResult},
    models::{
        ytdlp::{channel_or_uploader, RawEntry, RawFormat, RawInfo},
        FormatOption, SearchResultItem, VideoDetail,
    },
};

/// Projects a flattened search playlist into result items.
///
/// A payload that is not an object, or that has no `entries` array,
/// yields no results. Entries that are not objects are skipped. Order
/// follows the playlist.
pub fn shape_search_results(raw: &Value) -> Vec<SearchResultItem> {
    let Some(entries) = raw
        .as_object()
        .and_then(|data| data.get("entries"))
        .and_then(Value::as_array)
    else {
        return Vec::new();
    };

    entries
        .iter()
        .filter(|entry| entry.is_object())
        .filter_map(|entry| match serde_json::from_value::<RawEntry>(entry.clone()) {
            Ok(entry) => Some(SearchResultItem::from(entry)),
            Err(e) => {
                tracing::debug!(error = %e, "Skipping malformed search entry");
                None
            }
        })
        .collect()
}

/// Projects a single-video info dictionary.
///
/// Formats lacking either a video or an audio stream are dropped, and the
/// rest are ordered tallest first with a missing height counting as 0.
/// Equal heights keep yt-dlp's order. A malformed format record is an
/// error rather than a shorter list.
pub fn shape_video_detail(raw: Value) -> AppResult<VideoDetail> {
    if !raw.is_object() {
        return Err(AppError::Extraction(
            "video info payload is not an object".to_string(),
        ));
    }

    let info: RawInfo = serde_json::from_value(raw)
        .map_err(|e| AppError::Extraction(format!("unexpected video info shape: {}", e)))?;

    let raw_formats = info
        .formats
        .unwrap_or_default()
        .into_iter()
        .map(parse_format)
        .collect::<AppResult<Vec<RawFormat>>>()?;

    let mut formats: Vec<FormatOption> = raw_formats
        .into_iter()
        .filter(RawFormat::is_muxed)
        .map(FormatOption::from)
        .collect();

    sort_formats(&mut formats);

    Ok(VideoDetail {
        id: info.id,
        title: info.title,
        channel: channel_or_uploader(info.channel, info.uploader),
        channel_url: info.channel_url,
        thumbnail: info.thumbnail,
        description: info.description,
        formats,
    })
}

/// Any malformed format fails the whole lookup
fn parse_format(format: Value) -> AppResult<RawFormat> {
    if !format.is_object() {
        return Err(AppError::Extraction(
            "format record is not an object".to_string(),
        ));
    }

    serde_json::from_value(format)
        .map_err(|e| AppError::Extraction(format!("unexpected format shape: {}", e)))
}

/// Descending by height; `sort_by` is stable so ties keep their order.
fn sort_formats(formats: &mut [FormatOption]) {
    formats.sort_by(|a, b| b.height.unwrap_or(0).cmp(&a.height.unwrap_or(0)));
}

/// Unwraps the `[query, [suggestion, ...]]` autocomplete array.
pub fn shape_suggestions(raw: &Value) -> Vec<String> {
    raw.as_array()
        .and_then(|payload| payload.get(1))
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(|item| item.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}
