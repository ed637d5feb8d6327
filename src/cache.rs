//! Local cache persistence.
//!
//! The cache is a pretty-printed `{"weapons": [...]}` JSON file holding the
//! last successful remote fetch. Writes go to a temp file next to the cache
//! and are renamed into place, so a crash mid-write never leaves a
//! half-written cache behind.

use crate::error::ConfigError;
use crate::parse;
use crate::weapon::{WeaponRecord, WeaponSet};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Read and parse the cache file.
///
/// Uses the same relaxed rules as a remote JSON payload, including the
/// per-record validity filter.
pub async fn read(path: &Path) -> Result<Vec<WeaponRecord>, ConfigError> {
    let raw = match tokio::fs::read_to_string(path).await {
        Ok(raw) => raw,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(ConfigError::FileNotFound(path.to_path_buf()))
        }
        Err(e) => return Err(e.into()),
    };
    parse::parse_json(&raw)
}

/// Persist the collection at `path`, overwriting any prior cache.
pub async fn write(path: &Path, weapons: &[WeaponRecord]) -> Result<(), ConfigError> {
    let set = WeaponSet {
        weapons: weapons.to_vec(),
    };
    let json = serde_json::to_string_pretty(&set)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await?;
        }
    }

    let temp = temp_path(path);
    tokio::fs::write(&temp, json).await?;
    tokio::fs::rename(&temp, path).await?;
    Ok(())
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
}
