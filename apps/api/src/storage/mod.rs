//! Key-value persistence for the resume document.
//!
//! The editor only ever needs `get`/`set` on a single key, so every backend is a
//! plain synchronous string store. Failures are reported to the caller, which
//! decides whether to swallow them (the editor always does).

pub mod file;
pub mod memory;
pub mod redis_store;

use anyhow::{Context, Result};
use thiserror::Error;
use tracing::info;

use crate::config::{StorageBackend, StorageConfig};

pub use file::FileStore;
pub use memory::MemoryStore;
pub use redis_store::RedisStore;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to replace stored file: {0}")]
    Persist(#[from] tempfile::PersistError),

    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),
}

/// Opaque string store keyed by name.
pub trait KeyValueStore: Send {
    fn get(&mut self, key: &str) -> Result<Option<String>, StorageError>;

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Short backend name for logs.
    fn backend(&self) -> &'static str;
}

/// Opens the backend selected by configuration.
pub fn open_store(config: &StorageConfig) -> Result<Box<dyn KeyValueStore>> {
    let store: Box<dyn KeyValueStore> = match config.backend {
        StorageBackend::Memory => Box::new(MemoryStore::default()),
        StorageBackend::File => Box::new(
            FileStore::open(&config.data_dir).with_context(|| {
                format!(
                    "Failed to open data directory '{}'",
                    config.data_dir.display()
                )
            })?,
        ),
        StorageBackend::Redis => {
            let url = config
                .redis_url
                .as_deref()
                .context("REDIS_URL must be set when STORAGE_BACKEND=redis")?;
            Box::new(RedisStore::open(url)?)
        }
    };
    info!("Storage backend initialized: {}", store.backend());
    Ok(store)
}
