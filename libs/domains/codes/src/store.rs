use async_trait::async_trait;
use database::{Change, Collection, RecordStore};
use std::sync::Arc;

use crate::error::CodeResult;
use crate::models::{CodeEntry, CodeUpsert};
use crate::repository::CodeRepository;

/// [`CodeRepository`] over a whole-list record store.
///
/// Clones share the same collection and write lock.
#[derive(Clone)]
pub struct StoreCodeRepository {
    codes: Arc<Collection<CodeEntry>>,
}

impl StoreCodeRepository {
    pub fn new<S>(store: S) -> Self
    where
        S: RecordStore<CodeEntry> + 'static,
    {
        Self {
            codes: Arc::new(Collection::new(store)),
        }
    }
}

#[async_trait]
impl CodeRepository for StoreCodeRepository {
    async fn get_by_barcode(&self, barcode: &str) -> CodeResult<Option<CodeEntry>> {
        let codes = self.codes.read().await;
        Ok(codes.into_iter().find(|c| c.barcode == barcode))
    }

    async fn upsert(&self, entry: CodeEntry) -> CodeResult<CodeUpsert> {
        let outcome = self
            .codes
            .update(move |codes| match codes.iter().position(|c| c.barcode == entry.barcode) {
                Some(index) => {
                    codes[index].name = entry.name;
                    Change::Modified(CodeUpsert::Updated)
                }
                None => {
                    codes.push(entry);
                    Change::Modified(CodeUpsert::Registered)
                }
            })
            .await?;

        Ok(outcome)
    }
}
