use std::sync::Arc;
use tracing::instrument;

use crate::error::CodeResult;
use crate::models::{CodeEntry, CodeUpsert, RegisterCode};
use crate::repository::CodeRepository;

/// Service layer for the global code registry
pub struct CodeService<R: CodeRepository> {
    repository: Arc<R>,
}

impl<R: CodeRepository> Clone for CodeService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: CodeRepository> CodeService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Register a barcode, or rename it when it is already known
    #[instrument(skip(self, input), fields(barcode = %input.barcode))]
    pub async fn add_global_code(&self, input: RegisterCode) -> CodeResult<CodeUpsert> {
        let outcome = self.repository.upsert(input.into()).await?;
        tracing::info!(?outcome, "Code registry updated");
        Ok(outcome)
    }

    /// Look up a barcode, falling back to an `Unknown (<barcode>)` placeholder
    #[instrument(skip(self))]
    pub async fn get_code_info(&self, barcode: &str) -> CodeResult<CodeEntry> {
        let entry = self
            .repository
            .get_by_barcode(barcode)
            .await?
            .unwrap_or_else(|| CodeEntry::unknown(barcode));
        Ok(entry)
    }

    /// Display name a scan of `barcode` should use
    pub async fn resolve_name(&self, barcode: &str) -> CodeResult<String> {
        Ok(self.get_code_info(barcode).await?.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CodeError;
    use crate::repository::MockCodeRepository;
    use database::DatabaseError;

    #[tokio::test]
    async fn test_add_global_code_reports_outcome() {
        let mut mock_repo = MockCodeRepository::new();

        mock_repo
            .expect_upsert()
            .withf(|entry| entry.barcode == "123" && entry.name == "Milk")
            .times(1)
            .returning(|_| Ok(CodeUpsert::Updated));

        let service = CodeService::new(mock_repo);
        let outcome = service
            .add_global_code(RegisterCode {
                barcode: "123".to_string(),
                name: "Milk".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(outcome, CodeUpsert::Updated);
        assert_eq!(outcome.message(), "Product updated");
    }

    #[tokio::test]
    async fn test_get_code_info_returns_stored_entry() {
        let mut mock_repo = MockCodeRepository::new();

        mock_repo
            .expect_get_by_barcode()
            .withf(|barcode| barcode == "123")
            .returning(|_| Ok(Some(CodeEntry::new("123", "Milk"))));

        let service = CodeService::new(mock_repo);
        let entry = service.get_code_info("123").await.unwrap();

        assert_eq!(entry, CodeEntry::new("123", "Milk"));
    }

    #[tokio::test]
    async fn test_unknown_barcode_is_not_an_error() {
        let mut mock_repo = MockCodeRepository::new();

        mock_repo.expect_get_by_barcode().returning(|_| Ok(None));

        let service = CodeService::new(mock_repo);

        assert_eq!(service.resolve_name("999").await.unwrap(), "Unknown (999)");
    }

    #[tokio::test]
    async fn test_storage_failure_propagates() {
        let mut mock_repo = MockCodeRepository::new();

        mock_repo
            .expect_upsert()
            .returning(|_| Err(CodeError::Storage(DatabaseError::Generic("disk full".into()))));

        let service = CodeService::new(mock_repo);
        let result = service
            .add_global_code(RegisterCode {
                barcode: "1".to_string(),
                name: "x".to_string(),
            })
            .await;

        assert!(matches!(result, Err(CodeError::Storage(_))));
    }
}
