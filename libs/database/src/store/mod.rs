//! Record store abstraction
//!
//! A store holds the complete state of one collection as an ordered list of
//! records. There is no partial access: readers get the whole list, writers
//! replace the whole list.

mod collection;
mod memory;

use async_trait::async_trait;

use crate::common::DatabaseResult;

pub use collection::{Change, Collection};
pub use memory::MemoryStore;

/// Backend that persists a whole list of records at once.
#[async_trait]
pub trait RecordStore<T: Send + Sync + 'static>: Send + Sync {
    /// Read every record, in stored order.
    ///
    /// Never fails: a missing or unreadable backend yields an empty list.
    async fn load(&self) -> Vec<T>;

    /// Replace the stored list with `records`.
    async fn save(&self, records: &[T]) -> DatabaseResult<()>;

    /// Human readable location, used in log events.
    fn location(&self) -> String;
}
