use domain_users::ProductEntry;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

fn default_quantity() -> i64 {
    1
}

/// Body of `/scan` and `/products/remove`
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct ProductRequest {
    #[validate(length(min = 1, message = "Email must not be empty"))]
    #[schema(example = "a@x.com")]
    pub email: String,
    #[validate(length(min = 1, message = "Barcode must not be empty"))]
    #[schema(example = "4006040")]
    pub barcode: String,
    /// Units to add or remove
    #[serde(default = "default_quantity")]
    #[validate(range(min = 1, message = "Quantity must be at least 1"))]
    #[schema(default = 1, minimum = 1, example = 1)]
    pub quantity: i64,
}

/// Body of `/products/delete_all`
///
/// Older clients also send `quantity`; it is accepted and ignored.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct DeleteAllRequest {
    #[validate(length(min = 1, message = "Email must not be empty"))]
    #[schema(example = "a@x.com")]
    pub email: String,
    #[validate(length(min = 1, message = "Barcode must not be empty"))]
    #[schema(example = "4006040")]
    pub barcode: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ScanResponse {
    #[schema(example = "ok")]
    pub status: String,
    /// Name the barcode currently resolves to
    #[schema(example = "Milk")]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    #[schema(example = "ok")]
    pub status: String,
    #[schema(example = "Product removed")]
    pub message: String,
}

impl StatusResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            status: "ok".to_string(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ProductsResponse {
    pub products: Vec<ProductEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantity_defaults_to_one() {
        let request: ProductRequest =
            serde_json::from_str(r#"{"email": "a@x.com", "barcode": "1"}"#).unwrap();

        assert_eq!(request.quantity, 1);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_non_positive_quantity_is_invalid() {
        for quantity in [0, -3] {
            let request = ProductRequest {
                email: "a@x.com".to_string(),
                barcode: "1".to_string(),
                quantity,
            };
            assert!(request.validate().is_err(), "quantity {} should be rejected", quantity);
        }
    }

    #[test]
    fn test_delete_all_tolerates_quantity() {
        let request: DeleteAllRequest =
            serde_json::from_str(r#"{"email": "a@x.com", "barcode": "1", "quantity": 4}"#)
                .unwrap();

        assert_eq!(request.barcode, "1");
    }
}
