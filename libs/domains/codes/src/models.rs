use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// One entry of the global code registry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CodeEntry {
    /// Scanned barcode, unique within the registry
    #[schema(example = "4006040")]
    pub barcode: String,
    /// Display name shown to every user scanning this barcode
    #[schema(example = "Milk")]
    pub name: String,
}

impl CodeEntry {
    pub fn new(barcode: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            barcode: barcode.into(),
            name: name.into(),
        }
    }

    /// Placeholder returned for barcodes nobody has registered yet.
    pub fn unknown(barcode: impl Into<String>) -> Self {
        let barcode = barcode.into();
        let name = format!("Unknown ({})", barcode);
        Self { barcode, name }
    }
}

/// Request body for registering or renaming a barcode
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct RegisterCode {
    #[validate(length(min = 1, message = "Barcode must not be empty"))]
    #[schema(example = "4006040", min_length = 1)]
    pub barcode: String,
    #[schema(example = "Milk")]
    pub name: String,
}

impl From<RegisterCode> for CodeEntry {
    fn from(input: RegisterCode) -> Self {
        Self {
            barcode: input.barcode,
            name: input.name,
        }
    }
}

/// What an upsert did to the registry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeUpsert {
    Registered,
    Updated,
}

impl CodeUpsert {
    pub fn message(&self) -> &'static str {
        match self {
            CodeUpsert::Registered => "Product registered",
            CodeUpsert::Updated => "Product updated",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "Product registered")]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_entry_embeds_barcode() {
        let entry = CodeEntry::unknown("123");
        assert_eq!(entry.barcode, "123");
        assert_eq!(entry.name, "Unknown (123)");
    }

    #[test]
    fn test_register_code_rejects_empty_barcode() {
        let input = RegisterCode {
            barcode: String::new(),
            name: "Milk".to_string(),
        };
        assert!(input.validate().is_err());
    }
}
