use async_trait::async_trait;

use crate::error::UserResult;
use crate::models::{InventoryChange, InventoryUpdate, User};

/// Repository trait for the user registry
///
/// Every `email` argument is expected in normalized form
/// (see [`normalize_email`](crate::models::normalize_email)).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by email
    async fn get_by_email(&self, email: &str) -> UserResult<Option<User>>;

    /// Insert a new user; fails with `DuplicateEmail` if the email is taken
    async fn create(&self, user: User) -> UserResult<User>;

    /// Apply an inventory change to one user, `None` if the user does not exist
    async fn apply_inventory(
        &self,
        email: &str,
        change: InventoryChange,
    ) -> UserResult<Option<InventoryUpdate>>;
}
