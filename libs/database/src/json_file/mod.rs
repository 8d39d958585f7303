//! Flat-file JSON record stores
//!
//! Each store is a single file holding a pretty-printed JSON array. Every
//! save rewrites the whole file.

mod config;
mod health;
mod store;

pub use config::JsonStoreConfig;
pub use health::check_health;
pub use store::JsonFileStore;
