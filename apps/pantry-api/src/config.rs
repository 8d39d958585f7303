use core_config::{AppInfo, FromEnv, app_info, server::ServerConfig};
use database::json_file::JsonStoreConfig;

// Re-export Environment for use in other modules
pub use core_config::Environment;

/// Application-specific configuration
/// Composes shared config components from the `core_config` and `database` libraries
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub server: ServerConfig,
    pub store: JsonStoreConfig,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?; // HOST=0.0.0.0, PORT=8080 unless set
        let store = JsonStoreConfig::from_env()?; // DATA_DIR, USERS_FILE, CODES_FILE

        Ok(Self {
            app: app_info!(),
            server,
            store,
            environment,
        })
    }
}
