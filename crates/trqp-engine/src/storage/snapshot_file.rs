//! Snapshot persistence — versioned JSON registry files.
//!
//! File format:
//! ```json
//! { "version": 1, "registry": { ... RegistrySnapshot ... } }
//! ```
//!
//! The version field guards against silently reading a future format.
//! The engine itself never touches the filesystem; this module serves the
//! CLI and any boundary layer that materializes snapshots from files.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{RegistryError, Result};
use crate::registry::RegistrySnapshot;

const SNAPSHOT_FILE_VERSION: u32 = 1;

/// Wrapper written to disk for a registry snapshot.
#[derive(Debug, Serialize, Deserialize)]
struct SnapshotFile {
    /// Format version number.
    version: u32,
    /// The stored registry records.
    registry: RegistrySnapshot,
}

/// Write a snapshot to `path` as pretty-printed JSON.
///
/// # Errors
///
/// Returns `RegistryError::SerializationError` if serialization fails, or
/// `RegistryError::Io` for filesystem errors.
pub fn save_snapshot(path: impl AsRef<Path>, snapshot: &RegistrySnapshot) -> Result<()> {
    let file = SnapshotFile {
        version: SNAPSHOT_FILE_VERSION,
        registry: snapshot.clone(),
    };
    let json = serde_json::to_string_pretty(&file)
        .map_err(|e| RegistryError::SerializationError(e.to_string()))?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Read a snapshot from `path`.
///
/// # Errors
///
/// Returns `RegistryError::UnsupportedVersion` when the file carries an
/// unknown format version, `RegistryError::SerializationError` for
/// malformed JSON, or `RegistryError::Io` for filesystem errors.
pub fn load_snapshot(path: impl AsRef<Path>) -> Result<RegistrySnapshot> {
    let data = std::fs::read_to_string(path)?;
    let file: SnapshotFile = serde_json::from_str(&data)
        .map_err(|e| RegistryError::SerializationError(e.to_string()))?;
    if file.version != SNAPSHOT_FILE_VERSION {
        return Err(RegistryError::UnsupportedVersion(file.version));
    }
    Ok(file.registry)
}
