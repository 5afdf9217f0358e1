// Sync pipeline
//
// One pass = fetch the feed, curate the batch. Passes are independent: no
// state carries over, and the board only ever shows one complete pass.

mod board;
mod service;

use std::sync::Arc;

use crate::curator::{CuratedPost, Curator};
use crate::feed::FeedSource;

pub use board::{Snapshot, SnapshotBoard, SyncFailure, SyncState, SYNC_FAILED_MESSAGE};
pub use service::SyncService;

/// Feed source plus curator.
pub struct Pipeline {
    feed: Arc<dyn FeedSource>,
    curator: Curator,
}

impl Pipeline {
    pub fn new(feed: Arc<dyn FeedSource>, curator: Curator) -> Self {
        Self { feed, curator }
    }

    pub fn curator(&self) -> &Curator {
        &self.curator
    }

    /// Run one full fetch -> curate pass.
    pub async fn run_pass(&self) -> Vec<CuratedPost> {
        let posts = self.feed.fetch_recent_posts().await;
        self.curator.curate_posts(posts).await
    }
}
