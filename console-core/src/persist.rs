//! Snapshot persistence
//!
//! Optional collaborator. The engine never calls it on its own: shells
//! save after a mutation returns and load once at startup, so writes are
//! fire-and-forget from the core's standpoint and intermediate states are
//! never observable through the registry.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::snapshot::RegistrySnapshot;

/// Persistence errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Snapshot persistence port
pub trait SnapshotStore: Send + Sync {
    fn save(&self, snapshot: &RegistrySnapshot) -> Result<(), StoreError>;
    /// `Ok(None)` when no snapshot has ever been saved
    fn load(&self) -> Result<Option<RegistrySnapshot>, StoreError>;
}

/// JSON file store.
///
/// Writes to a temp file in the same directory and renames over the
/// target, so a reader never observes a partially written snapshot.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotStore for JsonFileStore {
    fn save(&self, snapshot: &RegistrySnapshot) -> Result<(), StoreError> {
        let json = serde_json::to_vec_pretty(snapshot)?;
        let tmp = self.path.with_extension("tmp");
        {
            let mut file = fs::File::create(&tmp)?;
            file.write_all(&json)?;
            file.sync_all()?;
        }
        fs::rename(&tmp, &self.path)?;
        tracing::debug!(path = %self.path.display(), bytes = json.len(), "snapshot saved");
        Ok(())
    }

    fn load(&self) -> Result<Option<RegistrySnapshot>, StoreError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let snapshot = serde_json::from_slice(&bytes)?;
        tracing::debug!(path = %self.path.display(), "snapshot loaded");
        Ok(Some(snapshot))
    }
}
