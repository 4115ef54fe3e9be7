//! JSON file implementation of the `PreferenceStore` trait.
//!
//! All preferences live in one JSON object of string values. Writes go to a
//! sibling temporary file that is then renamed over the existing one, so a crash
//! mid-write never leaves a truncated file behind. An unreadable file is
//! replaced on the next write.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::{Map, Value};
use tokio::sync::Mutex;
use tracing::{debug, warn};

use talktoswami_core::error::DomainError;
use talktoswami_core::store::PreferenceStore;

/// File-backed preference store.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    /// Creates a store backed by `path`. The file is created on first write.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Returns the backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_all(&self) -> Result<Map<String, Value>, DomainError> {
        let raw = match tokio::fs::read(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Map::new()),
            Err(e) => {
                return Err(DomainError::Storage(format!(
                    "failed to read {}: {e}",
                    self.path.display()
                )));
            }
        };
        serde_json::from_slice(&raw).map_err(|e| {
            DomainError::Storage(format!("{} is not a JSON object: {e}", self.path.display()))
        })
    }

    async fn write_all(&self, values: &Map<String, Value>) -> Result<(), DomainError> {
        let encoded = serde_json::to_vec_pretty(values)
            .map_err(|e| DomainError::Storage(format!("failed to encode preferences: {e}")))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                DomainError::Storage(format!("failed to create {}: {e}", parent.display()))
            })?;
        }

        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        tokio::fs::write(&tmp, encoded).await.map_err(|e| {
            DomainError::Storage(format!("failed to write {}: {e}", tmp.display()))
        })?;
        tokio::fs::rename(&tmp, &self.path).await.map_err(|e| {
            DomainError::Storage(format!(
                "failed to replace {}: {e}",
                self.path.display()
            ))
        })
    }
}

#[async_trait]
impl PreferenceStore for JsonFileStore {
    async fn get(&self, key: &str) -> Result<Option<String>, DomainError> {
        let values = self.read_all().await?;
        match values.get(key) {
            None => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.clone())),
            // Scalars written by other tools are accepted in their text form.
            Some(other) => Ok(Some(other.to_string())),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), DomainError> {
        let _guard = self.write_lock.lock().await;
        let mut values = match self.read_all().await {
            Ok(values) => values,
            Err(e) => {
                warn!(error = %e, "discarding unreadable preference file");
                Map::new()
            }
        };
        values.insert(key.to_owned(), Value::String(value.to_owned()));
        self.write_all(&values).await?;
        debug!(path = %self.path.display(), key, "preference file updated");
        Ok(())
    }
}
