pub mod video;
pub mod ytdlp;

pub use video::{
    FormatOption, HealthResponse, SearchResponse, SearchResultItem, SuggestionResponse,
    VideoDetail,
};
