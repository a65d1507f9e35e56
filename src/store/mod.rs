//! Emotion record store: the `emotion_logs` table behind an async handle,
//! plus a live channel that pushes the full ordered history after every
//! change.
//!
//! # Concurrency
//!
//! ```text
//! EmotionStore (Clone, cheap)
//! └── Arc<StoreInner>
//!     ├── Mutex<DbPool>                    one connection, one operation at a time
//!     └── Mutex<watch::Sender<SnapshotState>>  latest ordered history, conflating
//! ```
//!
//! Operations run on tokio's blocking pool. A submitted write finishes even
//! when the awaiting future is dropped, and the snapshot that follows it is
//! published before the lock is released, so subscribers see mutations in
//! the order they were applied.
//!
//! A failed reload is the last value of its channel: the sender is swapped
//! for a fresh one, so a later recovery only reaches new subscribers and
//! every existing subscription still ends with the error.

use std::sync::Arc;

use parking_lot::Mutex;
use rusqlite::Connection;
use tokio::sync::watch;

use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::models::EmotionLog;

pub mod subscription;

pub use subscription::{Records, SnapshotState, Subscription};

fn empty_channel() -> watch::Sender<SnapshotState> {
    watch::channel(SnapshotState::Ready(Arc::new(Vec::new()))).0
}

struct StoreInner {
    pool: Mutex<DbPool>,
    /// Locked after `pool` when both are needed.
    snapshots: Mutex<watch::Sender<SnapshotState>>,
}

impl StoreInner {
    /// Re-read the ordered history and hand it to subscribers. Skipped while
    /// nobody listens; `observe_all` loads a fresh copy on subscribe.
    fn publish(&self, conn: &Connection) {
        let mut snapshots = self.snapshots.lock();
        if snapshots.receiver_count() == 0 {
            return;
        }

        match queries::load_all(conn) {
            Ok(records) => Self::replace_if_changed(&snapshots, records),
            Err(e) => {
                log::error!("Failed to reload emotion logs for subscribers: {}", e);
                let failed = std::mem::replace(&mut *snapshots, empty_channel());
                failed.send_replace(SnapshotState::Failed(Arc::from(e.to_string())));
            }
        }
    }

    fn replace_if_changed(snapshots: &watch::Sender<SnapshotState>, records: Vec<EmotionLog>) {
        snapshots.send_if_modified(|current| {
            let unchanged = matches!(
                current,
                SnapshotState::Ready(existing) if existing.as_slice() == records.as_slice()
            );
            if unchanged {
                return false;
            }
            *current = SnapshotState::Ready(Arc::new(records));
            true
        });
    }
}

#[derive(Clone)]
pub struct EmotionStore {
    inner: Arc<StoreInner>,
}

impl EmotionStore {
    /// Open (or create) the database file at `path` and make sure the schema
    /// exists.
    pub fn open(path: &str) -> AppResult<Self> {
        Self::from_pool(DbPool::new(path)?)
    }

    /// Private in-memory database, gone when the last handle is dropped.
    pub fn open_in_memory() -> AppResult<Self> {
        Self::from_pool(DbPool::in_memory()?)
    }

    pub fn from_pool(pool: DbPool) -> AppResult<Self> {
        init_db(&pool.conn)?;

        Ok(Self {
            inner: Arc::new(StoreInner {
                pool: Mutex::new(pool),
                snapshots: Mutex::new(empty_channel()),
            }),
        })
    }

    async fn read<F, T>(&self, func: F) -> AppResult<T>
    where
        F: FnOnce(&Connection) -> AppResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let inner = Arc::clone(&self.inner);
        tokio::task::spawn_blocking(move || {
            let mut pool = inner.pool.lock();
            pool.with_conn(|conn| func(conn))
        })
        .await?
    }

    async fn write<F, T>(&self, func: F) -> AppResult<T>
    where
        F: FnOnce(&Connection) -> AppResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let inner = Arc::clone(&self.inner);
        tokio::task::spawn_blocking(move || {
            let mut pool = inner.pool.lock();
            pool.with_conn(|conn| {
                let out = func(conn)?;
                inner.publish(conn);
                Ok(out)
            })
        })
        .await?
    }

    /// Live ordered history. The subscription first yields the current state,
    /// then a new snapshot after every change, until it is dropped or the
    /// store fails to reload.
    pub async fn observe_all(&self) -> AppResult<Subscription> {
        let inner = Arc::clone(&self.inner);
        tokio::task::spawn_blocking(move || {
            let pool = inner.pool.lock();
            let records = queries::load_all(&pool.conn)?;
            let snapshots = inner.snapshots.lock();
            StoreInner::replace_if_changed(&snapshots, records);
            // still under the lock: no write can slip in between
            Ok(Subscription::new(snapshots.subscribe()))
        })
        .await?
    }

    /// One-off ordered read, same order as `observe_all`.
    pub async fn load_all(&self) -> AppResult<Vec<EmotionLog>> {
        self.read(queries::load_all).await
    }

    pub async fn count(&self) -> AppResult<usize> {
        self.read(queries::count).await
    }

    pub async fn get_by_id(&self, id: i64) -> AppResult<Option<EmotionLog>> {
        self.read(move |conn| queries::load_by_id(conn, id)).await
    }

    /// Insert the record, or fully replace the row that shares its id.
    /// Returns the id of the stored row.
    pub async fn upsert(&self, record: EmotionLog) -> AppResult<i64> {
        let id = self
            .write(move |conn| queries::insert_or_replace(conn, &record))
            .await?;
        log::debug!("Upserted emotion log {}", id);
        Ok(id)
    }

    /// Overwrite the row with the record's id. Unknown ids are ignored.
    /// Stamping `last_modified_at` is the caller's job.
    pub async fn update(&self, record: EmotionLog) -> AppResult<()> {
        let id = record.id;
        let n = self.write(move |conn| queries::update(conn, &record)).await?;
        if n == 0 {
            log::debug!("Update of emotion log {} ignored: no such row", id);
        }
        Ok(())
    }

    /// Remove the row with the record's id. Already gone is fine.
    pub async fn delete_one(&self, record: &EmotionLog) -> AppResult<()> {
        self.delete_by_id(record.id).await.map(|_| ())
    }

    /// Like `delete_one`, returns whether a row was actually removed.
    pub async fn delete_by_id(&self, id: i64) -> AppResult<bool> {
        let n = self
            .write(move |conn| queries::delete_by_id(conn, id))
            .await?;
        log::debug!("Deleted emotion log {} ({} row)", id, n);
        Ok(n > 0)
    }

    pub async fn delete_all(&self) -> AppResult<usize> {
        let n = self.write(queries::delete_all).await?;
        log::debug!("Cleared {} emotion logs", n);
        Ok(n)
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.snapshots.lock().receiver_count()
    }
}
