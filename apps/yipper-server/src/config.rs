//! Application configuration loaded from environment variables.

use std::env;

use yipper_infra::database::{DatabaseConfig, StoreLocation};

const DEFAULT_STORE_PATH: &str = "yipper.db";
const DEFAULT_SEED_FILE: &str = "original-state.csv";

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database: DatabaseConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let store_path = env::var("YIPPER_DB_PATH").unwrap_or_else(|_| DEFAULT_STORE_PATH.to_string());

        // An empty YIPPER_SEED_FILE disables seeding.
        let seed_file = match env::var("YIPPER_SEED_FILE") {
            Ok(path) if path.is_empty() => None,
            Ok(path) => Some(path.into()),
            Err(_) => Some(DEFAULT_SEED_FILE.into()),
        };

        let database = DatabaseConfig {
            location: StoreLocation::from_setting(&store_path),
            seed_file,
            max_connections: env::var("DB_MAX_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(1),
            log_statements: env::var("DB_LOG_STATEMENTS")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(false),
        };

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            database,
        }
    }
}
