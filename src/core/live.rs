//! Shared, lazily started view of the store's live history.
//!
//! The first attached handle starts a pump task that subscribes to the
//! store. When the last handle goes away the pump keeps running for a grace
//! period, so a consumer that detaches and re-attaches quickly does not pay
//! for a new subscription.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::errors::{AppError, AppResult};
use crate::store::{EmotionStore, Records};

pub const DEFAULT_GRACE: Duration = Duration::from_millis(5000);

#[derive(Debug, Clone)]
pub enum LiveValue {
    /// No snapshot received yet.
    Loading,
    Ready(Records),
    Failed(Arc<str>),
}

#[derive(Default)]
struct LiveState {
    consumers: usize,
    pump: Option<JoinHandle<()>>,
    teardown: Option<JoinHandle<()>>,
    /// Bumped on every attach and detach. A teardown only acts if nothing
    /// happened since it was scheduled.
    generation: u64,
    starts: usize,
}

struct LiveInner {
    store: EmotionStore,
    grace: Duration,
    runtime: Handle,
    values: Arc<watch::Sender<LiveValue>>,
    state: Mutex<LiveState>,
}

#[derive(Clone)]
pub struct LiveLog {
    inner: Arc<LiveInner>,
}

impl LiveLog {
    /// Must be called from within a tokio runtime; the pump and teardown
    /// tasks are spawned on it.
    pub fn new(store: EmotionStore, grace: Duration) -> AppResult<Self> {
        let runtime = Handle::try_current().map_err(|e| AppError::Runtime(e.to_string()))?;
        let (values, _) = watch::channel(LiveValue::Loading);

        Ok(Self {
            inner: Arc::new(LiveInner {
                store,
                grace,
                runtime,
                values: Arc::new(values),
                state: Mutex::new(LiveState::default()),
            }),
        })
    }

    pub fn attach(&self) -> LiveLogHandle {
        let mut state = self.inner.state.lock();
        state.consumers += 1;
        state.generation += 1;

        if let Some(pending) = state.teardown.take() {
            pending.abort();
        }

        let running = state.pump.as_ref().is_some_and(|p| !p.is_finished());
        if !running {
            // never replay a snapshot from a previous run
            self.inner.values.send_replace(LiveValue::Loading);
            state.pump = Some(self.spawn_pump());
            state.starts += 1;
            log::info!("Live log started");
        }

        LiveLogHandle {
            live: self.clone(),
            rx: self.inner.values.subscribe(),
            primed: false,
            done: false,
        }
    }

    fn spawn_pump(&self) -> JoinHandle<()> {
        let store = self.inner.store.clone();
        let values = Arc::clone(&self.inner.values);

        self.inner.runtime.spawn(async move {
            let mut sub = match store.observe_all().await {
                Ok(sub) => sub,
                Err(e) => {
                    log::error!("Live log could not subscribe: {}", e);
                    values.send_replace(LiveValue::Failed(Arc::from(e.to_string())));
                    return;
                }
            };

            while let Some(next) = sub.next().await {
                match next {
                    Ok(records) => {
                        values.send_replace(LiveValue::Ready(records));
                    }
                    Err(e) => {
                        let reason = match e {
                            AppError::SubscriptionFailed(reason) => reason,
                            other => other.to_string(),
                        };
                        log::error!("Live log terminated: {}", reason);
                        values.send_replace(LiveValue::Failed(Arc::from(reason)));
                        return;
                    }
                }
            }
        })
    }

    fn detach(&self) {
        let mut state = self.inner.state.lock();
        state.consumers = state.consumers.saturating_sub(1);
        state.generation += 1;
        if state.consumers > 0 {
            return;
        }

        let live = self.clone();
        let grace = self.inner.grace;
        let generation = state.generation;
        if let Some(stale) = state.teardown.replace(self.inner.runtime.spawn(async move {
            tokio::time::sleep(grace).await;
            live.stop_if_idle(generation);
        })) {
            stale.abort();
        }
    }

    fn stop_if_idle(&self, generation: u64) {
        let mut state = self.inner.state.lock();
        if state.generation != generation || state.consumers > 0 {
            return;
        }
        if let Some(pump) = state.pump.take() {
            pump.abort();
            log::info!("Live log stopped after {:?} without consumers", self.inner.grace);
        }
        state.teardown = None;
    }

    /// Whether the pump task is currently subscribed to the store.
    pub fn is_active(&self) -> bool {
        self.inner
            .state
            .lock()
            .pump
            .as_ref()
            .is_some_and(|p| !p.is_finished())
    }

    pub fn consumer_count(&self) -> usize {
        self.inner.state.lock().consumers
    }

    /// How many times the pump has been (re)started.
    pub fn start_count(&self) -> usize {
        self.inner.state.lock().starts
    }

    pub fn latest(&self) -> LiveValue {
        self.inner.values.borrow().clone()
    }
}

/// One consumer of the live history. Dropping it detaches.
pub struct LiveLogHandle {
    live: LiveLog,
    rx: watch::Receiver<LiveValue>,
    primed: bool,
    done: bool,
}

impl LiveLogHandle {
    /// Next snapshot, skipping the initial loading state. `None` after a
    /// failure has been reported.
    pub async fn next(&mut self) -> Option<AppResult<Records>> {
        if self.done {
            return None;
        }

        loop {
            if self.primed && self.rx.changed().await.is_err() {
                self.done = true;
                return None;
            }
            self.primed = true;

            let value = self.rx.borrow_and_update().clone();
            match value {
                LiveValue::Loading => continue,
                LiveValue::Ready(records) => return Some(Ok(records)),
                LiveValue::Failed(msg) => {
                    self.done = true;
                    return Some(Err(AppError::SubscriptionFailed(msg.to_string())));
                }
            }
        }
    }

    pub fn latest(&self) -> LiveValue {
        self.rx.borrow().clone()
    }
}

impl Drop for LiveLogHandle {
    fn drop(&mut self) {
        self.live.detach();
    }
}
