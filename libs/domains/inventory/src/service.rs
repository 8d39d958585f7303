use domain_codes::{CodeRepository, CodeService};
use domain_users::{InventoryChange, InventoryUpdate, UserRepository, normalize_email};
use std::sync::Arc;
use tracing::instrument;

use crate::error::{InventoryError, InventoryResult};
use crate::models::{DeleteAllRequest, ProductRequest, ProductsResponse, ScanResponse, StatusResponse};

/// Per-user inventory operations
///
/// Reads display names from the code registry and writes through the user
/// repository, one locked read-modify-write per call.
pub struct InventoryService<U: UserRepository, C: CodeRepository> {
    users: Arc<U>,
    codes: CodeService<C>,
}

impl<U: UserRepository, C: CodeRepository> Clone for InventoryService<U, C> {
    fn clone(&self) -> Self {
        Self {
            users: Arc::clone(&self.users),
            codes: self.codes.clone(),
        }
    }
}

impl<U: UserRepository, C: CodeRepository> InventoryService<U, C> {
    pub fn new(users: U, codes: CodeService<C>) -> Self {
        Self {
            users: Arc::new(users),
            codes,
        }
    }

    async fn apply(&self, email: &str, change: InventoryChange) -> InventoryResult<InventoryUpdate> {
        self.users
            .apply_inventory(email, change)
            .await?
            .ok_or_else(|| InventoryError::UserNotFound(email.to_string()))
    }

    /// Add `quantity` units of a barcode to the user's inventory
    #[instrument(skip(self, input), fields(barcode = %input.barcode, quantity = input.quantity))]
    pub async fn scan(&self, input: ProductRequest) -> InventoryResult<ScanResponse> {
        let email = normalize_email(&input.email);
        let name = self.codes.resolve_name(&input.barcode).await?;

        self.apply(
            &email,
            InventoryChange::Add {
                barcode: input.barcode,
                name: name.clone(),
                quantity: input.quantity,
            },
        )
        .await?;

        Ok(ScanResponse {
            status: "ok".to_string(),
            name,
        })
    }

    /// Take `quantity` units away, dropping the line at zero
    #[instrument(skip(self, input), fields(barcode = %input.barcode, quantity = input.quantity))]
    pub async fn remove(&self, input: ProductRequest) -> InventoryResult<StatusResponse> {
        let email = normalize_email(&input.email);

        let update = self
            .apply(
                &email,
                InventoryChange::Remove {
                    barcode: input.barcode,
                    quantity: input.quantity,
                },
            )
            .await?;

        // Unchanged and empty afterwards means it was empty before
        if !update.changed && update.products.is_empty() {
            return Ok(StatusResponse::ok("No products present"));
        }

        Ok(StatusResponse::ok("Product removed"))
    }

    /// Drop the barcode from the user's inventory regardless of quantity
    #[instrument(skip(self, input), fields(barcode = %input.barcode))]
    pub async fn delete_all(&self, input: DeleteAllRequest) -> InventoryResult<StatusResponse> {
        let email = normalize_email(&input.email);

        self.apply(
            &email,
            InventoryChange::DeleteAll {
                barcode: input.barcode,
            },
        )
        .await?;

        Ok(StatusResponse::ok("All units deleted"))
    }

    /// The user's inventory in stored order
    #[instrument(skip(self))]
    pub async fn get_products(&self, email: &str) -> InventoryResult<ProductsResponse> {
        let email = normalize_email(email);

        let user = self
            .users
            .get_by_email(&email)
            .await?
            .ok_or(InventoryError::UserNotFound(email))?;

        Ok(ProductsResponse {
            products: user.products,
        })
    }
}
