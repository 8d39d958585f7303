use std::ffi::OsString;
use std::io::ErrorKind;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::io::AsyncWriteExt;
use tracing::{debug, warn};

use crate::common::{DatabaseError, DatabaseResult};
use crate::store::RecordStore;

const EMPTY_LIST: &str = "[]";

/// [`RecordStore`] backed by one JSON file.
///
/// - A missing file is created holding `[]`. Creation never replaces a file
///   that appeared in the meantime, so it cannot clobber a concurrent save.
/// - A file that cannot be read or is not a JSON list of `T` loads as an
///   empty list. The data loss is reported with a `warn!` event; callers
///   never see an error.
/// - Saves are pretty-printed (two-space indent, non-ASCII kept as is) and
///   written to a sibling temp file that is then renamed over the target.
#[derive(Debug)]
pub struct JsonFileStore<T> {
    path: PathBuf,
    _records: PhantomData<fn() -> T>,
}

impl<T> JsonFileStore<T> {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _records: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(OsString::from)
            .unwrap_or_else(|| OsString::from("store"));
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    async fn ensure_parent(&self) -> DatabaseResult<()> {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| DatabaseError::io(parent, e)),
            _ => Ok(()),
        }
    }

    async fn initialize(&self) -> DatabaseResult<()> {
        self.ensure_parent().await?;

        let opened = tokio::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&self.path)
            .await;

        let mut file = match opened {
            Ok(file) => file,
            // Someone else created or saved it first
            Err(e) if e.kind() == ErrorKind::AlreadyExists => return Ok(()),
            Err(e) => return Err(DatabaseError::io(&self.path, e)),
        };

        file.write_all(EMPTY_LIST.as_bytes())
            .await
            .map_err(|e| DatabaseError::io(&self.path, e))?;
        file.flush()
            .await
            .map_err(|e| DatabaseError::io(&self.path, e))
    }
}

#[async_trait]
impl<T> RecordStore<T> for JsonFileStore<T>
where
    T: Serialize + DeserializeOwned + Send + Sync + 'static,
{
    async fn load(&self) -> Vec<T> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "Store file missing, creating it");
                if let Err(e) = self.initialize().await {
                    warn!(path = %self.path.display(), error = %e, "Failed to create store file");
                }
                return Vec::new();
            }
            Err(e) => {
                warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Store file unreadable, treating it as empty"
                );
                return Vec::new();
            }
        };

        // Freshly created by a concurrent load, `[]` not written yet
        if raw.is_empty() {
            return Vec::new();
        }

        match serde_json::from_str::<Vec<T>>(&raw) {
            Ok(records) => records,
            Err(e) => {
                warn!(
                    path = %self.path.display(),
                    error = %e,
                    bytes = raw.len(),
                    "Store file is not a valid record list, treating it as empty"
                );
                Vec::new()
            }
        }
    }

    async fn save(&self, records: &[T]) -> DatabaseResult<()> {
        let body = serde_json::to_vec_pretty(records)?;
        let temp = self.temp_path();

        self.ensure_parent().await?;
        tokio::fs::write(&temp, &body)
            .await
            .map_err(|e| DatabaseError::io(&temp, e))?;
        tokio::fs::rename(&temp, &self.path)
            .await
            .map_err(|e| DatabaseError::io(&self.path, e))?;

        debug!(path = %self.path.display(), records = records.len(), "Store saved");
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{Change, Collection};
    use serde::Deserialize;
    use std::sync::Arc;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Entry {
        barcode: String,
        name: String,
    }

    fn entry(barcode: &str, name: &str) -> Entry {
        Entry {
            barcode: barcode.to_string(),
            name: name.to_string(),
        }
    }

    #[tokio::test]
    async fn test_missing_file_is_created_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("codes.json");
        let store = JsonFileStore::<Entry>::new(&path);

        assert!(store.load().await.is_empty());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[]");
    }

    #[tokio::test]
    async fn test_missing_parent_directory_is_created() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("codes.json");
        let store = JsonFileStore::<Entry>::new(&path);

        assert!(store.load().await.is_empty());
        assert!(path.exists());
    }

    #[tokio::test]
    async fn test_corrupt_file_loads_empty_and_is_left_alone() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("codes.json");
        std::fs::write(&path, "[{\"barcode\": \"1\", \"na").unwrap();
        let store = JsonFileStore::<Entry>::new(&path);

        assert!(store.load().await.is_empty());
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "[{\"barcode\": \"1\", \"na"
        );
    }

    #[tokio::test]
    async fn test_non_list_json_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("codes.json");
        std::fs::write(&path, r#"{"barcode": "1", "name": "Milk"}"#).unwrap();

        assert!(JsonFileStore::<Entry>::new(&path).load().await.is_empty());
    }

    #[tokio::test]
    async fn test_save_then_load_preserves_records_and_order() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("codes.json"));
        let records = vec![entry("3", "Cheese"), entry("1", "Milk"), entry("2", "Bread")];

        store.save(&records).await.unwrap();

        assert_eq!(store.load().await, records);
    }

    #[tokio::test]
    async fn test_save_is_pretty_printed_with_literal_unicode() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("codes.json");
        let store = JsonFileStore::new(&path);

        store.save(&[entry("4006040", "Käse")]).await.unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            raw,
            "[\n  {\n    \"barcode\": \"4006040\",\n    \"name\": \"Käse\"\n  }\n]"
        );
        assert!(!dir.path().join("codes.json.tmp").exists());
    }

    #[tokio::test]
    async fn test_save_overwrites_previous_contents() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("codes.json"));

        store
            .save(&[entry("1", "Milk"), entry("2", "Bread")])
            .await
            .unwrap();
        store.save(&[entry("2", "Bread")]).await.unwrap();

        assert_eq!(store.load().await, vec![entry("2", "Bread")]);
    }

    #[tokio::test]
    async fn test_lazy_creation_keeps_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("codes.json");
        let store = JsonFileStore::<Entry>::new(&path);

        std::fs::write(&path, "[{\"barcode\": \"1\", \"name\": \"Milk\"}]").unwrap();
        store.initialize().await.unwrap();

        assert_eq!(store.load().await, vec![entry("1", "Milk")]);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_first_reads_never_clobber_a_concurrent_first_save() {
        for round in 0..100 {
            let dir = tempfile::tempdir().unwrap();
            let collection = Arc::new(Collection::new(JsonFileStore::<Entry>::new(
                dir.path().join("codes.json"),
            )));

            let readers: Vec<_> = (0..8)
                .map(|_| {
                    let collection = Arc::clone(&collection);
                    tokio::spawn(async move { collection.read().await })
                })
                .collect();

            let writer = {
                let collection = Arc::clone(&collection);
                tokio::spawn(async move {
                    collection
                        .update(|entries| {
                            entries.push(entry("7", "Milk"));
                            Change::Modified(())
                        })
                        .await
                })
            };

            writer.await.unwrap().unwrap();
            for reader in readers {
                reader.await.unwrap();
            }

            assert_eq!(
                collection.read().await,
                vec![entry("7", "Milk")],
                "save lost in round {round}"
            );
        }
    }
}
