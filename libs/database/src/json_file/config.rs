use std::path::PathBuf;

#[cfg(feature = "config")]
use core_config::{env_or_default, ConfigError, FromEnv};

/// Locations of the JSON store files
///
/// # Example
///
/// ```ignore
/// use database::json_file::JsonStoreConfig;
///
/// let config = JsonStoreConfig::new("/var/lib/pantry");
/// assert!(config.users_path().ends_with("users.json"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JsonStoreConfig {
    /// Directory the store files live in
    pub data_dir: PathBuf,
    /// File name (or absolute path) of the user registry
    pub users_file: PathBuf,
    /// File name (or absolute path) of the code registry
    pub codes_file: PathBuf,
}

impl JsonStoreConfig {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            ..Self::default()
        }
    }

    /// Full path of the user registry file.
    pub fn users_path(&self) -> PathBuf {
        self.data_dir.join(&self.users_file)
    }

    /// Full path of the code registry file.
    pub fn codes_path(&self) -> PathBuf {
        self.data_dir.join(&self.codes_file)
    }
}

impl Default for JsonStoreConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            users_file: PathBuf::from("users.json"),
            codes_file: PathBuf::from("codes.json"),
        }
    }
}

/// Load JsonStoreConfig from environment variables
///
/// - `DATA_DIR` (default `.`)
/// - `USERS_FILE` (default `users.json`)
/// - `CODES_FILE` (default `codes.json`)
///
/// An absolute `USERS_FILE`/`CODES_FILE` ignores `DATA_DIR`.
#[cfg(feature = "config")]
impl FromEnv for JsonStoreConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            data_dir: env_or_default("DATA_DIR", ".").into(),
            users_file: env_or_default("USERS_FILE", "users.json").into(),
            codes_file: env_or_default("CODES_FILE", "codes.json").into(),
        })
    }
}
