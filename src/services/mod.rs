pub mod assets;
pub mod extractor;
pub mod shaper;
pub mod suggestions;

pub use extractor::{ExtractionConfig, MediaExtractor, YtDlpExtractor};
pub use suggestions::{HttpSuggestionClient, SuggestionSource};
