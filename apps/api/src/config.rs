use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{anyhow, Context, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    File,
    Redis,
    Memory,
}

impl FromStr for StorageBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "file" => Ok(StorageBackend::File),
            "redis" => Ok(StorageBackend::Redis),
            "memory" => Ok(StorageBackend::Memory),
            other => Err(anyhow!(
                "Unknown storage backend '{other}' (expected file, redis or memory)"
            )),
        }
    }
}

#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    pub data_dir: PathBuf,
    pub redis_url: Option<String>,
    /// The single key the resume document lives under.
    pub key: String,
}

/// Application configuration loaded from environment variables.
/// Every variable has a default; only `REDIS_URL` becomes required with the redis backend.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub storage: StorageConfig,
    pub fonts_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: env_or("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
            storage: StorageConfig {
                backend: env_or("STORAGE_BACKEND", "file").parse()?,
                data_dir: PathBuf::from(env_or("DATA_DIR", "./data")),
                redis_url: std::env::var("REDIS_URL").ok(),
                key: env_or("STORAGE_KEY", "resume"),
            },
            fonts_dir: PathBuf::from(env_or("FONTS_DIR", "./fonts")),
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_parsing_is_case_insensitive() {
        assert_eq!(
            "Redis".parse::<StorageBackend>().unwrap(),
            StorageBackend::Redis
        );
        assert_eq!(
            " memory ".parse::<StorageBackend>().unwrap(),
            StorageBackend::Memory
        );
    }

    #[test]
    fn test_unknown_backend_fails() {
        assert!("sqlite".parse::<StorageBackend>().is_err());
    }
}
