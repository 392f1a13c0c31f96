use anyhow::{Context, Result};

/// Gateway configuration loaded from environment variables.
/// Nothing is required; unset variables fall back to the fixed defaults.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub records_addr: String,
    pub static_dir: String,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            records_addr: env_or("RECORDS_ADDR", "http://localhost:50051"),
            static_dir: env_or("STATIC_DIR", "./static/"),
            rust_log: env_or("RUST_LOG", "info"),
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
