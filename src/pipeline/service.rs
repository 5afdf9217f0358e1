// Periodic sync runner

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{watch, Notify};
use tokio::time::MissedTickBehavior;
use tracing::{error, info};

use super::board::{SnapshotBoard, SyncState};
use super::Pipeline;

/// Drives passes (on a timer, on demand) and publishes their results.
pub struct SyncService {
    pipeline: Arc<Pipeline>,
    board: SnapshotBoard,
    next_generation: AtomicU64,
    retry: Notify,
}

impl SyncService {
    pub fn new(pipeline: Pipeline) -> Self {
        Self {
            pipeline: Arc::new(pipeline),
            board: SnapshotBoard::new(),
            next_generation: AtomicU64::new(1),
            retry: Notify::new(),
        }
    }

    pub fn board(&self) -> &SnapshotBoard {
        &self.board
    }

    pub fn subscribe(&self) -> watch::Receiver<SyncState> {
        self.board.subscribe()
    }

    /// Run one pass and publish it.
    ///
    /// The pass runs on its own task; if it panics the board shows a
    /// failure rather than any partial data. Returns the state after
    /// publication, which may belong to a newer pass.
    pub async fn sync_now(&self) -> SyncState {
        let generation = self.next_generation.fetch_add(1, Ordering::SeqCst);
        let pipeline = Arc::clone(&self.pipeline);

        info!(generation, "sync pass started");
        match tokio::spawn(async move { pipeline.run_pass().await }).await {
            Ok(posts) => {
                info!(generation, count = posts.len(), "sync pass completed");
                self.board.publish_snapshot(generation, posts);
            }
            Err(e) => {
                error!(generation, error = %e, "sync pass failed");
                self.board.publish_failure(generation);
            }
        }

        self.board.current()
    }

    /// Ask a running [`run`](Self::run) loop for an immediate pass
    /// (the manual retry action).
    pub fn request_sync(&self) {
        self.retry.notify_one();
    }

    /// Sync immediately, then every `interval`, until `shutdown` resolves.
    pub async fn run<S>(&self, interval: Duration, shutdown: S)
    where
        S: Future<Output = ()>,
    {
        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        tokio::pin!(shutdown);

        loop {
            tokio::select! {
                _ = &mut shutdown => {
                    info!("sync loop stopping");
                    return;
                }
                _ = ticker.tick() => {}
                _ = self.retry.notified() => {
                    info!("manual sync requested");
                }
            }

            self.sync_now().await;
        }
    }
}
