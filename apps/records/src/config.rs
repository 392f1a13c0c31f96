use anyhow::{Context, Result};

const DEFAULT_PORT: u16 = 50051;
const DEFAULT_DATABASE_PATH: &str = "./storage/storage.db";

/// Record service configuration.
/// Every variable is optional; the defaults are the service's fixed contract.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub database_path: String,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: match std::env::var("RECORDS_PORT") {
                Ok(port) => port
                    .parse::<u16>()
                    .context("RECORDS_PORT must be a valid port number")?,
                Err(_) => DEFAULT_PORT,
            },
            database_path: std::env::var("DATABASE_PATH")
                .unwrap_or_else(|_| DEFAULT_DATABASE_PATH.to_string()),
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            database_path: DEFAULT_DATABASE_PATH.to_string(),
            rust_log: "info".to_string(),
        }
    }
}
