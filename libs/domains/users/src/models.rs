use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Canonical form of an email address: trimmed and lowercased.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// User record as persisted in the user registry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Normalized email, unique across the registry
    pub email: String,
    /// PHC password hash (never exposed in API responses)
    #[serde(alias = "password")]
    pub password_hash: String,
    /// Inventory, in insertion order
    #[serde(default)]
    pub products: Vec<ProductEntry>,
}

impl User {
    pub fn new(email: &str, password_hash: String) -> Self {
        Self {
            email: normalize_email(email),
            password_hash,
            products: Vec::new(),
        }
    }

    /// Whether this record belongs to an already normalized email.
    ///
    /// The stored value is normalized too, so records written with mixed
    /// case still match.
    pub fn has_email(&self, normalized: &str) -> bool {
        normalize_email(&self.email) == normalized
    }
}

/// One product line in a user's inventory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ProductEntry {
    #[schema(example = "4006040")]
    pub barcode: String,
    /// Display name captured when the barcode was first scanned
    #[schema(example = "Milk")]
    pub name: String,
    #[schema(example = 2)]
    pub quantity: i64,
}

/// Mutation of a single user's inventory
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InventoryChange {
    /// Increase quantity, creating the line with `name` if it is new
    Add {
        barcode: String,
        name: String,
        quantity: i64,
    },
    /// Decrease quantity, dropping the line once it reaches zero
    Remove { barcode: String, quantity: i64 },
    /// Drop every line for the barcode
    DeleteAll { barcode: String },
}

impl InventoryChange {
    /// Apply the change in place. Returns whether `products` was modified.
    pub fn apply(self, products: &mut Vec<ProductEntry>) -> bool {
        match self {
            InventoryChange::Add {
                barcode,
                name,
                quantity,
            } => {
                match products.iter().position(|p| p.barcode == barcode) {
                    // Existing lines keep the name they were created with.
                    // Quantities cap at i64::MAX instead of wrapping negative.
                    Some(index) => {
                        let line = &mut products[index];
                        line.quantity = line.quantity.saturating_add(quantity);
                    }
                    None => products.push(ProductEntry {
                        barcode,
                        name,
                        quantity,
                    }),
                }
                true
            }
            InventoryChange::Remove { barcode, quantity } => {
                let Some(index) = products.iter().position(|p| p.barcode == barcode) else {
                    return false;
                };

                let remaining = products[index].quantity.saturating_sub(quantity);
                if remaining <= 0 {
                    products.remove(index);
                } else {
                    products[index].quantity = remaining;
                }
                true
            }
            InventoryChange::DeleteAll { barcode } => {
                let before = products.len();
                products.retain(|p| p.barcode != barcode);
                products.len() != before
            }
        }
    }
}

/// Result of applying an [`InventoryChange`] to a stored user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryUpdate {
    /// Whether the inventory was modified (and written back)
    pub changed: bool,
    /// Inventory after the change
    pub products: Vec<ProductEntry>,
}

/// Registration request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
    #[validate(length(min = 1, message = "Email must not be empty"))]
    #[schema(example = "a@x.com")]
    pub email: String,
    #[validate(length(min = 1, message = "Password must not be empty"))]
    #[schema(example = "pw1")]
    pub password: String,
}

/// Login request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Email must not be empty"))]
    #[schema(example = "a@x.com")]
    pub email: String,
    #[validate(length(min = 1, message = "Password must not be empty"))]
    #[schema(example = "pw1")]
    pub password: String,
}

/// Response for successful registration and login
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AuthResponse {
    #[schema(example = "ok")]
    pub status: String,
    #[schema(example = "a@x.com")]
    pub email: String,
}

impl AuthResponse {
    pub fn ok(email: impl Into<String>) -> Self {
        Self {
            status: "ok".to_string(),
            email: email.into(),
        }
    }
}
