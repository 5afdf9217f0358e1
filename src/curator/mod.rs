// Curation
//
// Turns raw feed posts into curated results: sanitized, classified,
// summarized. With no backend configured a local heuristic takes over.

mod heuristic;
mod prompt;
mod response;
mod service;
mod types;

pub use heuristic::{
    curate_locally, KNOWN_SKILL_KEYWORDS, PLACEHOLDER_SENTIMENT, SUMMARY_MAX_CHARS,
    SUMMARY_PREFIX, THREAD_ACTIVITY_NOTE, TRUNCATION_MARKER,
};
pub use prompt::{build_request, thread_text};
pub use response::{
    parse_classification, ClassificationFields, ParseError, DEFAULT_SENTIMENT, DEFAULT_SUMMARY,
};
pub use service::{processing_error, CurationMode, Curator, ERROR_SENTIMENT, ERROR_SUMMARY};
pub use types::{Category, CuratedPost, SafetyStatus};
