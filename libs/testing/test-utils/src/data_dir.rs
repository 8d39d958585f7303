use database::json_file::JsonStoreConfig;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Temporary data directory for JSON file stores
///
/// The directory and everything in it is removed when the value is dropped.
///
/// # Example
///
/// ```rust,no_run
/// use test_utils::TestDataDir;
///
/// let dir = TestDataDir::new();
/// dir.write_users("[]");
/// assert!(dir.users_path().exists());
/// ```
pub struct TestDataDir {
    dir: TempDir,
    config: JsonStoreConfig,
}

impl TestDataDir {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temporary data directory");
        let config = JsonStoreConfig::new(dir.path());
        Self { dir, config }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Store configuration pointing into this directory
    pub fn config(&self) -> JsonStoreConfig {
        self.config.clone()
    }

    pub fn users_path(&self) -> PathBuf {
        self.config.users_path()
    }

    pub fn codes_path(&self) -> PathBuf {
        self.config.codes_path()
    }

    pub fn read_users(&self) -> String {
        read(&self.users_path())
    }

    pub fn read_codes(&self) -> String {
        read(&self.codes_path())
    }

    /// Seed the user registry with raw file contents (may be invalid JSON)
    pub fn write_users(&self, contents: &str) {
        write(&self.users_path(), contents);
    }

    /// Seed the code registry with raw file contents (may be invalid JSON)
    pub fn write_codes(&self, contents: &str) {
        write(&self.codes_path(), contents);
    }

    /// Parse the user registry file as generic JSON
    pub fn users_json(&self) -> serde_json::Value {
        serde_json::from_str(&self.read_users()).expect("users file is not valid JSON")
    }
}

impl Default for TestDataDir {
    fn default() -> Self {
        Self::new()
    }
}

fn read(path: &Path) -> String {
    std::fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e))
}

fn write(path: &Path, contents: &str) {
    std::fs::write(path, contents)
        .unwrap_or_else(|e| panic!("Failed to write {}: {}", path.display(), e))
}
