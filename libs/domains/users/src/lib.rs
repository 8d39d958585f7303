//! Users Domain
//!
//! User registry: accounts, password checks and each user's inventory.
//!
//! # Features
//!
//! - Registration with case-insensitive, trimmed email keys
//! - Password hashing with Argon2
//! - Login with a single generic failure
//! - Inventory mutation rules ([`models::InventoryChange`])
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← POST /register, POST /login
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Normalization, password hashing
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + record store implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← User records, inventory rules, DTOs
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use database::MemoryStore;
//! use domain_users::{handlers, StoreUserRepository, User, UserService};
//!
//! let repository = StoreUserRepository::new(MemoryStore::<User>::default());
//! let service = UserService::new(repository);
//!
//! let router = handlers::router(service);
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod password;
pub mod repository;
pub mod service;
pub mod store;

// Re-export commonly used types
pub use error::{UserError, UserResult};
pub use models::{
    AuthResponse, InventoryChange, InventoryUpdate, LoginRequest, ProductEntry, RegisterRequest,
    User, normalize_email,
};
pub use repository::UserRepository;
pub use service::UserService;
pub use store::StoreUserRepository;
