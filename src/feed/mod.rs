// Feed source
//
// Retrieves candidate posts from the remote feed. Fetching never fails from
// the caller's point of view: any problem falls back to a built-in dataset.

mod channel;
mod fallback;
mod http;
mod types;

use async_trait::async_trait;

pub use channel::{is_allowed_channel, Channel};
pub use fallback::fallback_posts;
pub use http::HttpFeedSource;
pub use types::RawPost;

/// Anything that can hand the curator a batch of posts.
#[async_trait]
pub trait FeedSource: Send + Sync {
    /// Fetch the current batch. Never empty, never an error.
    async fn fetch_recent_posts(&self) -> Vec<RawPost>;
}

/// Feed that always serves the built-in dataset (offline mode, tests).
pub struct StaticFeedSource;

#[async_trait]
impl FeedSource for StaticFeedSource {
    async fn fetch_recent_posts(&self) -> Vec<RawPost> {
        fallback_posts()
    }
}
