//! Local bookkeeping of tracked resources.
//!
//! One JSON document holding at most one record per resource type. The
//! serial is bumped on every save and the file is replaced atomically.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::fs;

use crate::resource::ResourceRecord;

pub const STATE_VERSION: u32 = 1;
pub const DEFAULT_STATE_FILE: &str = "iotlog.tfstate.json";

#[derive(Debug, Error)]
pub enum StateError {
    #[error("state file I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("state file {} is corrupt: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("state file version {found} is not supported (expected {})", STATE_VERSION)]
    UnsupportedVersion { found: u32 },

    #[error("failed to serialize state: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateFile {
    pub version: u32,
    pub serial: u64,
    #[serde(default)]
    pub resources: BTreeMap<String, ResourceRecord>,
}

impl Default for StateFile {
    fn default() -> Self {
        Self {
            version: STATE_VERSION,
            serial: 0,
            resources: BTreeMap::new(),
        }
    }
}

impl StateFile {
    /// Loads the state file, or an empty state when it does not exist yet.
    pub async fn load(path: &Path) -> Result<Self, StateError> {
        let raw = match fs::read(path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no state file, starting empty");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(StateError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let state: StateFile = serde_json::from_slice(&raw).map_err(|source| StateError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        if state.version != STATE_VERSION {
            return Err(StateError::UnsupportedVersion {
                found: state.version,
            });
        }

        Ok(state)
    }

    /// Writes the state with the next serial. The in-memory serial only
    /// advances once the file has been replaced.
    pub async fn save(&mut self, path: &Path) -> Result<(), StateError> {
        let next = Self {
            serial: self.serial + 1,
            ..self.clone()
        };
        let body = serde_json::to_vec_pretty(&next)?;

        let tmp = path.with_extension("json.tmp");
        let io_err = |source| StateError::Io {
            path: path.to_path_buf(),
            source,
        };
        fs::write(&tmp, body).await.map_err(io_err)?;
        if let Err(source) = fs::rename(&tmp, path).await {
            if let Err(e) = fs::remove_file(&tmp).await {
                tracing::warn!(
                    path = %tmp.display(),
                    error = %e,
                    "failed to remove temporary state file"
                );
            }
            return Err(io_err(source));
        }

        self.serial = next.serial;
        tracing::debug!(path = %path.display(), serial = self.serial, "state saved");
        Ok(())
    }

    pub fn get(&self, resource_type: &str) -> Option<&ResourceRecord> {
        self.resources.get(resource_type)
    }

    pub fn set(&mut self, resource_type: &str, record: ResourceRecord) {
        self.resources.insert(resource_type.to_string(), record);
    }

    pub fn remove(&mut self, resource_type: &str) -> Option<ResourceRecord> {
        self.resources.remove(resource_type)
    }
}
