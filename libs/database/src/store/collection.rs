use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, instrument};

use super::RecordStore;
use crate::common::DatabaseResult;

/// Outcome of a mutation closure passed to [`Collection::update`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Change<R> {
    /// The list was modified and must be written back.
    Modified(R),
    /// Nothing changed; the write is skipped.
    Unchanged(R),
}

impl<R> Change<R> {
    pub fn into_inner(self) -> R {
        match self {
            Change::Modified(value) | Change::Unchanged(value) => value,
        }
    }

    pub fn is_modified(&self) -> bool {
        matches!(self, Change::Modified(_))
    }
}

/// A record store with serialised read-modify-write cycles.
///
/// Every [`update`](Self::update) holds a per-collection lock from load to
/// save, so two concurrent updates can never overwrite each other.
/// [`read`](Self::read) is lock-free.
pub struct Collection<T: Send + Sync + 'static> {
    store: Arc<dyn RecordStore<T>>,
    write_lock: Mutex<()>,
}

impl<T: Send + Sync + 'static> Collection<T> {
    pub fn new<S>(store: S) -> Self
    where
        S: RecordStore<T> + 'static,
    {
        Self {
            store: Arc::new(store),
            write_lock: Mutex::new(()),
        }
    }

    /// Load the full list of records.
    pub async fn read(&self) -> Vec<T> {
        self.store.load().await
    }

    /// Load, mutate and (when the closure reports a change) save the list.
    #[instrument(skip_all, fields(store = %self.store.location()))]
    pub async fn update<R, F>(&self, apply: F) -> DatabaseResult<R>
    where
        R: Send,
        F: FnOnce(&mut Vec<T>) -> Change<R> + Send,
    {
        let _guard = self.write_lock.lock().await;

        let mut records = self.store.load().await;
        let change = apply(&mut records);

        if change.is_modified() {
            self.store.save(&records).await?;
            debug!(records = records.len(), "Store updated");
        }

        Ok(change.into_inner())
    }

    pub fn location(&self) -> String {
        self.store.location()
    }
}
