// Published sync state

use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio::sync::watch;
use tracing::debug;

use crate::curator::CuratedPost;

/// User-visible message for a pass that could not complete.
pub const SYNC_FAILED_MESSAGE: &str =
    "Synchronization failed. The agent network may be undergoing maintenance.";

/// One complete pass.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub generation: u64,
    pub synced_at: DateTime<Utc>,
    pub posts: Vec<CuratedPost>,
}

#[derive(Debug, Clone)]
pub struct SyncFailure {
    pub generation: u64,
    pub failed_at: DateTime<Utc>,
    pub message: String,
}

/// What the presentation layer should show.
#[derive(Debug, Clone)]
pub enum SyncState {
    /// No pass has completed yet.
    Pending,
    Ready(Arc<Snapshot>),
    /// The latest pass failed; no stale posts are shown alongside it.
    Failed(SyncFailure),
}

impl SyncState {
    pub fn generation(&self) -> u64 {
        match self {
            SyncState::Pending => 0,
            SyncState::Ready(snapshot) => snapshot.generation,
            SyncState::Failed(failure) => failure.generation,
        }
    }

    pub fn snapshot(&self) -> Option<&Arc<Snapshot>> {
        match self {
            SyncState::Ready(snapshot) => Some(snapshot),
            _ => None,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, SyncState::Failed(_))
    }
}

/// Holds the latest state and fans it out to subscribers.
///
/// A pass is only accepted if its generation is newer than what is shown, so
/// a slow older pass can never replace a newer one.
pub struct SnapshotBoard {
    tx: watch::Sender<SyncState>,
}

impl SnapshotBoard {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(SyncState::Pending);
        Self { tx }
    }

    pub fn subscribe(&self) -> watch::Receiver<SyncState> {
        self.tx.subscribe()
    }

    pub fn current(&self) -> SyncState {
        self.tx.borrow().clone()
    }

    /// Publish a completed pass. Returns whether it was accepted.
    pub fn publish_snapshot(&self, generation: u64, posts: Vec<CuratedPost>) -> bool {
        let snapshot = Snapshot {
            generation,
            synced_at: Utc::now(),
            posts,
        };
        self.publish(SyncState::Ready(Arc::new(snapshot)))
    }

    /// Publish a failed pass. Returns whether it was accepted.
    pub fn publish_failure(&self, generation: u64) -> bool {
        self.publish(SyncState::Failed(SyncFailure {
            generation,
            failed_at: Utc::now(),
            message: SYNC_FAILED_MESSAGE.to_string(),
        }))
    }

    fn publish(&self, next: SyncState) -> bool {
        let generation = next.generation();
        let accepted = self.tx.send_if_modified(move |state| {
            if generation <= state.generation() {
                return false;
            }
            *state = next;
            true
        });

        if !accepted {
            debug!(generation, "discarding result of a superseded pass");
        }
        accepted
    }
}

impl Default for SnapshotBoard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curator::curate_locally;
    use crate::feed::RawPost;

    fn posts(tag: &str) -> Vec<CuratedPost> {
        vec![curate_locally(RawPost::new(tag, "a", "m/ethics", tag))]
    }

    #[test]
    fn starts_pending() {
        let board = SnapshotBoard::new();
        assert!(matches!(board.current(), SyncState::Pending));
    }

    #[test]
    fn newer_pass_replaces_older() {
        let board = SnapshotBoard::new();
        assert!(board.publish_snapshot(1, posts("one")));
        assert!(board.publish_snapshot(2, posts("two")));
        let state = board.current();
        assert_eq!(state.snapshot().unwrap().posts[0].original.id, "two");
    }

    #[test]
    fn superseded_pass_is_discarded() {
        let board = SnapshotBoard::new();
        assert!(board.publish_snapshot(2, posts("new")));
        assert!(!board.publish_snapshot(1, posts("old")));
        assert_eq!(board.current().snapshot().unwrap().posts[0].original.id, "new");
    }

    #[test]
    fn failure_hides_previous_posts() {
        let board = SnapshotBoard::new();
        board.publish_snapshot(1, posts("one"));
        assert!(board.publish_failure(2));
        let state = board.current();
        assert!(state.is_failed());
        assert!(state.snapshot().is_none());
    }

    #[tokio::test]
    async fn subscribers_see_accepted_passes() {
        let board = SnapshotBoard::new();
        let mut rx = board.subscribe();
        board.publish_snapshot(1, posts("one"));
        rx.changed().await.unwrap();
        assert_eq!(rx.borrow().generation(), 1);
    }
}
