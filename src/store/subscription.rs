use std::sync::Arc;

use tokio::sync::watch;

use crate::errors::{AppError, AppResult};
use crate::models::EmotionLog;

/// Shared, immutable view of the ordered history.
pub type Records = Arc<Vec<EmotionLog>>;

#[derive(Debug, Clone)]
pub enum SnapshotState {
    Ready(Records),
    /// Reloading failed. Terminal for every subscription that sees it.
    Failed(Arc<str>),
}

/// Handle returned by `EmotionStore::observe_all`.
///
/// Intermediate snapshots may be skipped by a slow reader, the latest one
/// never is. Dropping the subscription releases its slot in the channel.
pub struct Subscription {
    rx: watch::Receiver<SnapshotState>,
    primed: bool,
    done: bool,
}

impl Subscription {
    pub(crate) fn new(rx: watch::Receiver<SnapshotState>) -> Self {
        Self {
            rx,
            primed: false,
            done: false,
        }
    }

    /// Next snapshot. `None` once the store is gone or after a failure was
    /// reported.
    pub async fn next(&mut self) -> Option<AppResult<Records>> {
        if self.done {
            return None;
        }

        if self.primed && self.rx.changed().await.is_err() {
            self.done = true;
            return None;
        }
        self.primed = true;

        let state = self.rx.borrow_and_update().clone();
        match state {
            SnapshotState::Ready(records) => Some(Ok(records)),
            SnapshotState::Failed(msg) => {
                self.done = true;
                Some(Err(AppError::SubscriptionFailed(msg.to_string())))
            }
        }
    }

    /// Latest state without waiting.
    pub fn current(&self) -> SnapshotState {
        self.rx.borrow().clone()
    }

    pub fn is_terminated(&self) -> bool {
        self.done
    }
}
