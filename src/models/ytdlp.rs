//! Lenient views over yt-dlp's JSON output.
//!
//! yt-dlp emits loosely typed dictionaries whose keys vary by extractor,
//! so every field here is optional. These types never leave the shaper.
use serde::{Deserialize, Deserializer};
use serde_json::{Number, Value};

use super::{FormatOption, SearchResultItem};

/// One entry of a flattened search playlist
#[derive(Debug, Clone, Deserialize)]
pub struct RawEntry {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub channel: Option<String>,
    #[serde(default)]
    pub uploader: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(rename = "_type", default = "default_entry_type")]
    pub entry_type: Option<String>,
}

fn default_entry_type() -> Option<String> {
    Some("video".to_string())
}

/// Top-level info dictionary for a single video
#[derive(Debug, Clone, Deserialize)]
pub struct RawInfo {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub channel: Option<String>,
    #[serde(default)]
    pub uploader: Option<String>,
    #[serde(default)]
    pub channel_url: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Kept untyped so one odd format cannot sink the whole record
    #[serde(default)]
    pub formats: Option<Vec<Value>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawFormat {
    #[serde(default)]
    pub format_id: Option<String>,
    #[serde(default)]
    pub vcodec: Option<String>,
    #[serde(default)]
    pub acodec: Option<String>,
    #[serde(default, deserialize_with = "lenient_u64")]
    pub height: Option<u64>,
    #[serde(default)]
    pub fps: Option<f64>,
    #[serde(default)]
    pub ext: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub format_note: Option<String>,
    #[serde(default, deserialize_with = "lenient_u64")]
    pub filesize: Option<u64>,
}

/// Accepts integral counts that arrive as floats (`720.0`). Negative
/// values read as absent.
fn lenient_u64<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let number = Option::<Number>::deserialize(deserializer)?;
    Ok(number.and_then(|n| {
        n.as_u64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && *f >= 0.0)
                .map(|f| f as u64)
        })
    }))
}

/// yt-dlp's marker for "this stream is absent"
pub const NO_CODEC: &str = "none";

impl RawFormat {
    /// True when the format carries both a video and an audio stream
    pub fn is_muxed(&self) -> bool {
        self.vcodec.as_deref() != Some(NO_CODEC) && self.acodec.as_deref() != Some(NO_CODEC)
    }
}

/// `channel` when it is non-empty, else `uploader`
pub(crate) fn channel_or_uploader(
    channel: Option<String>,
    uploader: Option<String>,
) -> Option<String> {
    channel.filter(|c| !c.is_empty()).or(uploader)
}

impl From<RawEntry> for SearchResultItem {
    fn from(entry: RawEntry) -> Self {
        SearchResultItem {
            id: entry.id,
            title: entry.title,
            channel: channel_or_uploader(entry.channel, entry.uploader),
            thumbnail: entry.thumbnail,
            kind: entry.entry_type,
        }
    }
}

impl From<RawFormat> for FormatOption {
    fn from(format: RawFormat) -> Self {
        FormatOption {
            itag: format.format_id,
            height: format.height,
            fps: format.fps,
            ext: format.ext,
            url: format.url,
            format_note: format.format_note,
            filesize: format.filesize,
        }
    }
}
