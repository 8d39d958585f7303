//! Codes Domain
//!
//! Global barcode → display name registry shared by every user.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← POST /codes/add, GET /codes/{barcode}
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Upsert messages, unknown-barcode fallback
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + record store implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entries, request/response DTOs
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use database::MemoryStore;
//! use domain_codes::{handlers, CodeEntry, CodeService, StoreCodeRepository};
//!
//! let repository = StoreCodeRepository::new(MemoryStore::<CodeEntry>::default());
//! let service = CodeService::new(repository);
//!
//! let router = handlers::router(service);
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod service;
pub mod store;

// Re-export commonly used types
pub use error::{CodeError, CodeResult};
pub use models::{CodeEntry, CodeUpsert, MessageResponse, RegisterCode};
pub use repository::CodeRepository;
pub use service::CodeService;
pub use store::StoreCodeRepository;
