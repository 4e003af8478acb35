//! File-based Exploration Storage Adapter
//!
//! Stores the exploration document as pretty-printed JSON at
//! `<directory>/<key>.json`.

use async_trait::async_trait;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::domain::exploration::{ExplorationState, SCHEMA_VERSION};
use crate::ports::{ExplorationStorage, StorageError};

/// Reads only the version so newer documents are rejected before the full parse.
#[derive(Deserialize)]
struct VersionProbe {
    #[serde(default = "current_version")]
    version: u32,
}

fn current_version() -> u32 {
    SCHEMA_VERSION
}

/// File-based storage for the exploration document
#[derive(Debug, Clone)]
pub struct FileExplorationStorage {
    directory: PathBuf,
    key: String,
}

impl FileExplorationStorage {
    /// Create a new file storage
    ///
    /// # Example
    /// ```ignore
    /// let storage = FileExplorationStorage::new("./data", "beyondstreams-exploration");
    /// ```
    pub fn new<P: AsRef<Path>>(directory: P, key: impl Into<String>) -> Self {
        Self {
            directory: directory.as_ref().to_path_buf(),
            key: key.into(),
        }
    }

    /// Path of the document for this storage key
    pub fn file_path(&self) -> PathBuf {
        self.directory.join(format!("{}.json", self.key))
    }

    fn parse(json: &str) -> Result<ExplorationState, StorageError> {
        let probe: VersionProbe = serde_json::from_str(json)
            .map_err(|e| StorageError::Deserialization(e.to_string()))?;
        if probe.version > SCHEMA_VERSION {
            return Err(StorageError::UnsupportedVersion {
                found: probe.version,
                supported: SCHEMA_VERSION,
            });
        }

        let mut state: ExplorationState = serde_json::from_str(json)
            .map_err(|e| StorageError::Deserialization(e.to_string()))?;
        if probe.version < SCHEMA_VERSION {
            tracing::debug!(
                found = probe.version,
                current = SCHEMA_VERSION,
                "Upgrading exploration document schema"
            );
            state.upgrade_schema();
        }
        Ok(state)
    }
}

#[async_trait]
impl ExplorationStorage for FileExplorationStorage {
    async fn save(&self, state: &ExplorationState) -> Result<(), StorageError> {
        fs::create_dir_all(&self.directory)
            .await
            .map_err(|e| StorageError::Io(e.to_string()))?;

        let json = serde_json::to_string_pretty(state)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;

        fs::write(self.file_path(), json)
            .await
            .map_err(|e| StorageError::Io(e.to_string()))?;

        tracing::debug!(path = %self.file_path().display(), "Saved exploration state");
        Ok(())
    }

    async fn load(&self) -> Result<Option<ExplorationState>, StorageError> {
        let json = match fs::read_to_string(self.file_path()).await {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(StorageError::Io(e.to_string())),
        };

        Self::parse(&json).map(Some)
    }

    async fn clear(&self) -> Result<(), StorageError> {
        match fs::remove_file(self.file_path()).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::Io(e.to_string())),
        }
    }
}
