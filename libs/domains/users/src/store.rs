use async_trait::async_trait;
use database::{Change, Collection, RecordStore};
use std::sync::Arc;

use crate::error::{UserError, UserResult};
use crate::models::{InventoryChange, InventoryUpdate, User, normalize_email};
use crate::repository::UserRepository;

/// [`UserRepository`] over a whole-list record store.
///
/// Duplicate checks and inventory changes run inside one locked
/// read-modify-write cycle. Clones share the same collection.
#[derive(Clone)]
pub struct StoreUserRepository {
    users: Arc<Collection<User>>,
}

impl StoreUserRepository {
    pub fn new<S>(store: S) -> Self
    where
        S: RecordStore<User> + 'static,
    {
        Self {
            users: Arc::new(Collection::new(store)),
        }
    }
}

#[async_trait]
impl UserRepository for StoreUserRepository {
    async fn get_by_email(&self, email: &str) -> UserResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.into_iter().find(|u| u.has_email(email)))
    }

    async fn create(&self, user: User) -> UserResult<User> {
        let created = self
            .users
            .update(move |users| {
                let email = normalize_email(&user.email);
                if users.iter().any(|u| u.has_email(&email)) {
                    return Change::Unchanged(Err(UserError::DuplicateEmail(email)));
                }
                users.push(user.clone());
                Change::Modified(Ok(user))
            })
            .await??;

        tracing::info!(email = %created.email, "Created user");
        Ok(created)
    }

    async fn apply_inventory(
        &self,
        email: &str,
        change: InventoryChange,
    ) -> UserResult<Option<InventoryUpdate>> {
        let email = email.to_string();

        let update = self
            .users
            .update(move |users| {
                let Some(user) = users.iter_mut().find(|u| u.has_email(&email)) else {
                    return Change::Unchanged(None);
                };

                let changed = change.apply(&mut user.products);
                let update = InventoryUpdate {
                    changed,
                    products: user.products.clone(),
                };

                if changed {
                    Change::Modified(Some(update))
                } else {
                    Change::Unchanged(Some(update))
                }
            })
            .await?;

        Ok(update)
    }
}
