use std::fs;
use std::path::{Path, PathBuf};

use crate::core::Record;
use crate::error::{FragSearchError, Result};
use crate::store::{sample_records, RecordSource};

/// Store file used when no path is given
pub const DEFAULT_DB_FILE: &str = "frags.json";

/// JSON file record store
///
/// The file holds a single array of records:
/// ```json
/// [
///   {
///     "id": "t1",
///     "key": "engine/start",
///     "frag": "Ignition sequence start",
///     "tags": ["engine", "start"]
///   }
/// ]
/// ```
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

    /// Seed the sample dataset if the file does not exist yet.
    ///
    /// Returns `true` when the file was created.
    pub fn ensure(&self) -> Result<bool> {
        if self.path.exists() {
            return Ok(false);
        }

        let json = serde_json::to_string_pretty(&sample_records())?;
        fs::write(&self.path, json).map_err(|source| self.storage_error(source))?;

        tracing::info!("Created sample DB at {}", self.path.display());
        Ok(true)
    }

    fn storage_error(&self, source: std::io::Error) -> FragSearchError {
        FragSearchError::Storage {
            path: self.path.clone(),
            source,
        }
    }
}

impl Default for JsonFileStore {
    fn default() -> Self {
        Self::new(DEFAULT_DB_FILE)
    }
}

impl RecordSource for JsonFileStore {
    fn load(&self) -> Result<Vec<Record>> {
        self.ensure()?;

        let text = fs::read_to_string(&self.path).map_err(|source| self.storage_error(source))?;

        let records: Vec<Record> =
            serde_json::from_str(&text).map_err(|source| FragSearchError::MalformedStore {
                path: self.path.clone(),
                source,
            })?;

        tracing::debug!("Loaded {} records from {}", records.len(), self.path.display());
        Ok(records)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
