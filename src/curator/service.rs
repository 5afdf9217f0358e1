// Batch curation
//
// Runs every post through sanitize -> classify -> assemble. Backend calls may
// overlap (bounded fan-out) but results always come back in input order, and
// a failure on one post never touches another.

use futures::stream::{self, StreamExt};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

use super::heuristic::curate_locally;
use super::prompt::build_request;
use super::response::{parse_classification, ClassificationFields};
use super::types::{Category, CuratedPost, SafetyStatus};
use crate::config::constants::DEFAULT_CURATOR_CONCURRENCY;
use crate::feed::RawPost;
use crate::providers::ClassificationBackend;
use crate::sanitizer::sanitize;

pub const ERROR_SUMMARY: &str = "Error processing this thread.";
pub const ERROR_SENTIMENT: &str = "Unknown";

/// How a batch is curated.
#[derive(Clone)]
pub enum CurationMode {
    /// No backend configured: deterministic local heuristic.
    Local,
    Backend(Arc<dyn ClassificationBackend>),
}

pub struct Curator {
    mode: CurationMode,
    concurrency: usize,
}

impl Curator {
    /// `None` selects the local heuristic for every batch.
    pub fn new(backend: Option<Arc<dyn ClassificationBackend>>) -> Self {
        let mode = match backend {
            Some(backend) => CurationMode::Backend(backend),
            None => CurationMode::Local,
        };
        Self {
            mode,
            concurrency: DEFAULT_CURATOR_CONCURRENCY,
        }
    }

    pub fn local() -> Self {
        Self::new(None)
    }

    /// Set how many backend calls may be in flight (minimum 1).
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    pub fn mode(&self) -> &CurationMode {
        &self.mode
    }

    pub fn has_backend(&self) -> bool {
        matches!(self.mode, CurationMode::Backend(_))
    }

    /// Curate a batch. Same length and order as `posts`; never fails.
    pub async fn curate_posts(&self, posts: Vec<RawPost>) -> Vec<CuratedPost> {
        match &self.mode {
            CurationMode::Local => {
                warn!(count = posts.len(), "no classification backend configured; using local curation");
                posts.into_iter().map(curate_locally).collect()
            }
            CurationMode::Backend(backend) => {
                info!(
                    count = posts.len(),
                    backend = backend.name(),
                    model = backend.default_model(),
                    concurrency = self.concurrency,
                    "curating batch"
                );
                stream::iter(posts)
                    .map(|post| curate_with_backend(backend.as_ref(), post))
                    .buffered(self.concurrency)
                    .collect()
                    .await
            }
        }
    }
}

/// Curate one post through the backend, substituting the processing-error
/// result on any failure.
async fn curate_with_backend(backend: &dyn ClassificationBackend, post: RawPost) -> CuratedPost {
    let sanitized = sanitize(&post.content);
    let safety_status = SafetyStatus::from_modified(sanitized.was_modified);
    let mut original = post;
    original.content = sanitized.content;

    let request = build_request(&original);
    let outcome = match backend.classify(&request).await {
        Ok(reply) => parse_classification(&reply).map_err(anyhow::Error::from),
        Err(e) => Err(e),
    };

    match outcome {
        Ok(fields) => {
            debug!(post_id = %original.id, category = %fields.category, "post curated");
            from_fields(original, fields, safety_status)
        }
        Err(e) => {
            error!(post_id = %original.id, error = %format!("{e:#}"), "curation failed; using fallback result");
            processing_error(original)
        }
    }
}

fn from_fields(original: RawPost, fields: ClassificationFields, safety_status: SafetyStatus) -> CuratedPost {
    CuratedPost {
        original,
        summary: fields.summary,
        category: fields.category,
        sentiment: fields.sentiment,
        skills_identified: fields.skills,
        safety_status,
        thread_context: fields.thread_context,
    }
}

/// Result used when the backend call or its reply is unusable.
///
/// Always reported as `Safe`; `original.content` is still the sanitized text.
pub fn processing_error(original: RawPost) -> CuratedPost {
    CuratedPost {
        original,
        summary: ERROR_SUMMARY.to_string(),
        category: Category::Other,
        sentiment: ERROR_SENTIMENT.to_string(),
        skills_identified: Vec::new(),
        safety_status: SafetyStatus::Safe,
        thread_context: None,
    }
}
