//! Application state management.
//!
//! Both repositories are cheap to clone and share their record collection,
//! so every router built from the same state sees the same write lock.

use database::json_file::JsonFileStore;
use domain_codes::StoreCodeRepository;
use domain_users::StoreUserRepository;

use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: Config,
    /// User registry backed by `users.json`
    pub users: StoreUserRepository,
    /// Code registry backed by `codes.json`
    pub codes: StoreCodeRepository,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let users = StoreUserRepository::new(JsonFileStore::new(config.store.users_path()));
        let codes = StoreCodeRepository::new(JsonFileStore::new(config.store.codes_path()));

        Self {
            config,
            users,
            codes,
        }
    }
}
