//! Storage layer: key-value port, backends, and configuration.
//!
//! Persistence goes through the [`KvStore`] port so the history log can be
//! backed by the real file store or an in-memory fake. A key is a single
//! process-wide mutable slot: read-modify-write with no locking, last
//! writer wins.

mod config;
mod file;
mod memory;

pub use config::{Config, DefaultsConfig, UiConfig, UnitsConfig};
pub use file::FileStore;
pub use memory::MemoryStore;

use std::path::PathBuf;

use crate::error::StorageError;

/// Returns `~/.config/jolt[-dev]/` based on JOLT_ENV.
///
/// Set JOLT_ENV=dev to use the development data directory.
///
/// # Errors
/// Returns an error if the directory cannot be created.
pub fn data_dir() -> Result<PathBuf, StorageError> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("JOLT_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("jolt-dev")
    } else {
        base_dir.join("jolt")
    };

    std::fs::create_dir_all(&dir).map_err(|e| StorageError::DataDir(e.to_string()))?;
    Ok(dir)
}

/// Durable key-value slot.
pub trait KvStore {
    /// Read a key. `Ok(None)` when the key is absent.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write a key, replacing any previous value in a single write.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove a key. A no-op when the key is absent.
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}
