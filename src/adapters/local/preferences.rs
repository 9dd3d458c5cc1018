//! Preferences stored as a flat JSON object on disk.
//!
//! The file is re-read whenever its modification time changes, so edits made
//! while the daemon runs apply to the next event.

use crate::ports::preferences::PreferenceStore;
use serde_json::{Map, Value};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::RwLock;
use std::time::SystemTime;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum PreferencesError {
    #[error("failed to read preferences {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed preferences {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("preferences {0:?} must hold a JSON object")]
    NotAnObject(PathBuf),
}

#[derive(Debug, Default)]
struct Snapshot {
    modified: Option<SystemTime>,
    values: Map<String, Value>,
}

#[derive(Debug)]
pub struct JsonPreferences {
    path: PathBuf,
    snapshot: RwLock<Snapshot>,
}

impl JsonPreferences {
    /// Load preferences from `path`. A missing file means every key is unset.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, PreferencesError> {
        let path = path.into();
        let snapshot = read_snapshot(&path, modified_at(&path))?;
        debug!(path = ?path, keys = snapshot.values.len(), "Preferences loaded");
        Ok(Self {
            path,
            snapshot: RwLock::new(snapshot),
        })
    }

    fn refresh(&self) {
        let modified = modified_at(&self.path);
        let stale = self
            .snapshot
            .read()
            .map(|snapshot| snapshot.modified != modified)
            .unwrap_or(true);
        if !stale {
            return;
        }

        match read_snapshot(&self.path, modified) {
            Ok(fresh) => {
                debug!(path = ?self.path, "Preferences reloaded");
                let mut snapshot = self
                    .snapshot
                    .write()
                    .unwrap_or_else(|poisoned| poisoned.into_inner());
                *snapshot = fresh;
            }
            // Keep serving the last good values while the file is being rewritten.
            Err(e) => warn!(error = %e, "Keeping previous preferences"),
        }
    }

    fn value(&self, key: &str) -> Option<Value> {
        self.refresh();
        let snapshot = self
            .snapshot
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        snapshot.values.get(key).cloned()
    }
}

impl PreferenceStore for JsonPreferences {
    fn get_bool(&self, key: &str) -> Option<bool> {
        self.value(key).and_then(|value| value.as_bool())
    }

    fn get_string(&self, key: &str) -> Option<String> {
        match self.value(key) {
            Some(Value::String(s)) => Some(s),
            _ => None,
        }
    }
}

fn modified_at(path: &Path) -> Option<SystemTime> {
    std::fs::metadata(path).and_then(|m| m.modified()).ok()
}

/// `modified` must be stamped before the read, so a write landing mid-read
/// leaves a newer mtime on disk and triggers another reload.
fn read_snapshot(
    path: &Path,
    modified: Option<SystemTime>,
) -> Result<Snapshot, PreferencesError> {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Snapshot::default()),
        Err(source) => {
            return Err(PreferencesError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let value: Value =
        serde_json::from_str(&contents).map_err(|source| PreferencesError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    match value {
        Value::Object(values) => Ok(Snapshot { modified, values }),
        _ => Err(PreferencesError::NotAnObject(path.to_path_buf())),
    }
}
