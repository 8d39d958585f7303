use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;

use super::RecordStore;
use crate::common::DatabaseResult;

/// In-memory [`RecordStore`] for tests and local experiments.
///
/// Clones share the same records, so a test can keep a handle and inspect
/// what a repository wrote.
#[derive(Debug)]
pub struct MemoryStore<T> {
    records: Arc<Mutex<Vec<T>>>,
    saves: Arc<AtomicUsize>,
}

impl<T> MemoryStore<T> {
    pub fn new(records: Vec<T>) -> Self {
        Self {
            records: Arc::new(Mutex::new(records)),
            saves: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Number of times `save` has been called.
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

impl<T: Clone> MemoryStore<T> {
    /// Copy of the current records.
    pub fn snapshot(&self) -> Vec<T> {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl<T> Clone for MemoryStore<T> {
    fn clone(&self) -> Self {
        Self {
            records: Arc::clone(&self.records),
            saves: Arc::clone(&self.saves),
        }
    }
}

impl<T> Default for MemoryStore<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

#[async_trait]
impl<T> RecordStore<T> for MemoryStore<T>
where
    T: Clone + Send + Sync + 'static,
{
    async fn load(&self) -> Vec<T> {
        self.snapshot()
    }

    async fn save(&self, records: &[T]) -> DatabaseResult<()> {
        // Give other tasks a chance to run between load and save.
        tokio::task::yield_now().await;

        *self
            .records
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = records.to_vec();
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}
