//! Inventory Domain
//!
//! Scan, remove and list the products a user owns. Display names come from
//! the code registry (`domain_codes`), inventories live on the user records
//! (`domain_users`).
//!
//! # Usage
//!
//! ```rust,no_run
//! use database::MemoryStore;
//! use domain_codes::{CodeEntry, CodeService, StoreCodeRepository};
//! use domain_inventory::{handlers, InventoryService};
//! use domain_users::{StoreUserRepository, User};
//!
//! let codes = CodeService::new(StoreCodeRepository::new(MemoryStore::<CodeEntry>::default()));
//! let users = StoreUserRepository::new(MemoryStore::<User>::default());
//!
//! let router = handlers::router(InventoryService::new(users, codes));
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod service;

// Re-export commonly used types
pub use error::{InventoryError, InventoryResult};
pub use models::{DeleteAllRequest, ProductRequest, ProductsResponse, ScanResponse, StatusResponse};
pub use service::InventoryService;
