//! yt-dlp extraction client
//!
//! yt-dlp is the media-extraction collaborator: it resolves searches and
//! video ids into nested JSON. We never download media, we only ask it to
//! dump one JSON document per call.
use std::io::ErrorKind;
use std::process::Output;

use serde_json::Value;
use tokio::process::Command;
use tracing::instrument;

use crate::error::{AppError, AppResult};

/// How yt-dlp is told to behave. Built once at startup and shared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractionConfig {
    pub quiet: bool,
    pub skip_download: bool,
    /// Return shallow playlist entries without resolving each one
    pub flat_playlist: bool,
    pub no_check_certificate: bool,
    pub no_warnings: bool,
    pub no_cache_dir: bool,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            quiet: true,
            skip_download: true,
            flat_playlist: true,
            no_check_certificate: true,
            no_warnings: true,
            no_cache_dir: true,
        }
    }
}

impl ExtractionConfig {
    /// Same settings with playlist flattening off, for full video lookups
    pub fn for_single_video(&self) -> Self {
        Self {
            flat_playlist: false,
            ..*self
        }
    }

    /// Renders the settings as yt-dlp command-line options
    pub fn to_args(&self) -> Vec<&'static str> {
        let mut args = vec!["--dump-single-json"];

        if self.skip_download {
            args.push("--skip-download");
        }
        if self.quiet {
            args.push("--quiet");
        }
        if self.no_warnings {
            args.push("--no-warnings");
        }
        if self.no_check_certificate {
            args.push("--no-check-certificates");
        }
        if self.no_cache_dir {
            args.push("--no-cache-dir");
        }
        args.push(if self.flat_playlist {
            "--flat-playlist"
        } else {
            "--no-flat-playlist"
        });

        args
    }
}

/// Trait for media extraction backends
///
/// Both operations hand back the collaborator's JSON untouched; shaping
/// happens in [`crate::services::shaper`].
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait MediaExtractor: Send + Sync {
    /// Runs a platform search for up to `limit` items in flattened mode
    async fn search_videos(&self, query: &str, limit: i64) -> AppResult<Value>;

    /// Resolves the full info dictionary for one video id
    async fn fetch_video_info(&self, video_id: &str) -> AppResult<Value>;
}

/// Builds the yt-dlp search directive for `limit` results
pub fn search_directive(query: &str, limit: i64) -> String {
    format!("ytsearch{}:{}", limit, query)
}

#[derive(Debug, Clone)]
pub struct YtDlpExtractor {
    program: String,
    config: ExtractionConfig,
}

impl YtDlpExtractor {
    pub fn new(program: impl Into<String>, config: ExtractionConfig) -> Self {
        Self {
            program: program.into(),
            config,
        }
    }

    /// Full argument list for one invocation. The target follows `--` so
    /// ids starting with a dash are not read as options.
    fn build_args(config: &ExtractionConfig, target: &str) -> Vec<String> {
        let mut args: Vec<String> = config.to_args().into_iter().map(String::from).collect();
        args.push("--".to_string());
        args.push(target.to_string());
        args
    }

    async fn run(&self, config: &ExtractionConfig, target: &str) -> AppResult<Value> {
        let args = Self::build_args(config, target);

        let output = Command::new(&self.program)
            .args(&args)
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|e| {
                if e.kind() == ErrorKind::NotFound {
                    AppError::Extraction(format!("{} is not installed", self.program))
                } else {
                    AppError::Extraction(format!("failed to run {}: {}", self.program, e))
                }
            })?;

        parse_output(output)
    }
}

fn parse_output(output: Output) -> AppResult<Value> {
    if !output.status.success() {
        return Err(AppError::Extraction(last_error_line(&output.stderr)));
    }

    serde_json::from_slice(&output.stdout)
        .map_err(|e| AppError::Extraction(format!("yt-dlp returned invalid JSON: {}", e)))
}

/// yt-dlp puts the actual reason on the last stderr line
fn last_error_line(stderr: &[u8]) -> String {
    String::from_utf8_lossy(stderr)
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .next_back()
        .unwrap_or("yt-dlp exited with an error")
        .to_string()
}

#[async_trait::async_trait]
impl MediaExtractor for YtDlpExtractor {
    #[instrument(skip(self))]
    async fn search_videos(&self, query: &str, limit: i64) -> AppResult<Value> {
        let data = self.run(&self.config, &search_directive(query, limit)).await?;

        tracing::debug!(
            entries = data["entries"].as_array().map(Vec::len).unwrap_or(0),
            "Search extraction finished"
        );

        Ok(data)
    }

    #[instrument(skip(self))]
    async fn fetch_video_info(&self, video_id: &str) -> AppResult<Value> {
        let config = self.config.for_single_video();
        self.run(&config, video_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    fn exit_output(code: i32, stdout: &str, stderr: &str) -> Output {
        use std::os::unix::process::ExitStatusExt;

        Output {
            status: std::process::ExitStatus::from_raw(code << 8),
            stdout: stdout.as_bytes().to_vec(),
            stderr: stderr.as_bytes().to_vec(),
        }
    }

    #[test]
    fn test_default_config_flags() {
        let args = ExtractionConfig::default().to_args();
        assert_eq!(
            args,
            vec![
                "--dump-single-json",
                "--skip-download",
                "--quiet",
                "--no-warnings",
                "--no-check-certificates",
                "--no-cache-dir",
                "--flat-playlist",
            ]
        );
    }

    #[test]
    fn test_single_video_config_disables_flattening() {
        let shared = ExtractionConfig::default();
        let single = shared.for_single_video();

        assert!(!single.flat_playlist);
        assert!(single.to_args().contains(&"--no-flat-playlist"));
        // The shared value is untouched
        assert!(shared.flat_playlist);
    }

    #[test]
    fn test_search_directive() {
        assert_eq!(search_directive("rust lang", 12), "ytsearch12:rust lang");
        assert_eq!(search_directive("x", 0), "ytsearch0:x");
    }

    #[test]
    fn test_target_follows_separator() {
        let args = YtDlpExtractor::build_args(&ExtractionConfig::default(), "-abc123");
        let n = args.len();
        assert_eq!(args[n - 2], "--");
        assert_eq!(args[n - 1], "-abc123");
    }

    #[test]
    fn test_last_error_line() {
        let stderr = b"WARNING: something\nERROR: [youtube] xyz: Video unavailable\n\n";
        assert_eq!(
            last_error_line(stderr),
            "ERROR: [youtube] xyz: Video unavailable"
        );
        assert_eq!(last_error_line(b""), "yt-dlp exited with an error");
    }

    #[cfg(unix)]
    #[test]
    fn test_parse_output_success() {
        let value = parse_output(exit_output(0, r#"{"entries": []}"#, "")).unwrap();
        assert!(value["entries"].is_array());
    }

    #[cfg(unix)]
    #[test]
    fn test_parse_output_failure_status() {
        let result = parse_output(exit_output(1, "", "ERROR: network down"));
        match result {
            Err(AppError::Extraction(msg)) => assert_eq!(msg, "ERROR: network down"),
            other => panic!("expected extraction error, got {:?}", other),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_parse_output_invalid_json() {
        let result = parse_output(exit_output(0, "not json", ""));
        assert!(matches!(result, Err(AppError::Extraction(_))));
    }

    #[tokio::test]
    async fn test_missing_binary_is_extraction_error() {
        let extractor = YtDlpExtractor::new(
            "/nonexistent/tubescout/yt-dlp",
            ExtractionConfig::default(),
        );

        let result = extractor.fetch_video_info("dQw4w9WgXcQ").await;
        assert!(matches!(result, Err(AppError::Extraction(_))));
    }
}
