use async_trait::async_trait;

use crate::error::CodeResult;
use crate::models::{CodeEntry, CodeUpsert};

/// Repository trait for the global code registry
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CodeRepository: Send + Sync {
    /// Exact-match lookup by barcode
    async fn get_by_barcode(&self, barcode: &str) -> CodeResult<Option<CodeEntry>>;

    /// Rename an existing barcode in place, or append a new one
    async fn upsert(&self, entry: CodeEntry) -> CodeResult<CodeUpsert>;
}
