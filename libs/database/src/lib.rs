//! Record storage for the pantry services
//!
//! Each collection (users, barcodes, ...) is persisted as a whole list of
//! records. The [`store::RecordStore`] trait abstracts where that list lives;
//! [`store::Collection`] layers serialised read-modify-write cycles on top.
//!
//! # Features
//!
//! - `config` - `core_config::FromEnv` support for [`json_file::JsonStoreConfig`]
//!
//! # Example
//!
//! ```ignore
//! use database::json_file::JsonFileStore;
//! use database::store::{Change, Collection};
//!
//! let codes: Collection<CodeEntry> = Collection::new(JsonFileStore::new("codes.json"));
//!
//! codes
//!     .update(|entries| {
//!         entries.push(entry);
//!         Change::Modified(())
//!     })
//!     .await?;
//! ```

pub mod common;
pub mod json_file;
pub mod store;

pub use common::{DatabaseError, DatabaseResult};
pub use store::{Change, Collection, MemoryStore, RecordStore};
