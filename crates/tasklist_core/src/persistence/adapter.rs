//! Load/save adapter between the task store and key-value storage.
//!
//! # Invariants
//! - `load` never fails; every error path yields an empty sequence.
//! - `save` writes the full sequence to the current key only.

use super::legacy::migrate_legacy;
use super::LoadError;
use crate::model::task::Task;
use crate::storage::KeyValueStorage;
use log::{info, warn};

/// Storage key holding the current `{id, title, done, due}` format.
pub const CURRENT_STORAGE_KEY: &str = "todoapp:v2:todos";
/// Storage key holding the legacy `{id, title, done}` format.
pub const LEGACY_STORAGE_KEY: &str = "todoapp:v1:todos";

/// Storage keys used by the adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistenceConfig {
    pub current_key: String,
    pub legacy_key: String,
}

impl Default for PersistenceConfig {
    fn default() -> Self {
        Self {
            current_key: CURRENT_STORAGE_KEY.to_string(),
            legacy_key: LEGACY_STORAGE_KEY.to_string(),
        }
    }
}

/// Which stored payload seeded the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadSource {
    /// Current-format key was present and valid.
    Current,
    /// Current key absent; legacy entries were migrated.
    Legacy,
    /// Neither key was present.
    Empty,
    /// The payload that was read could not be parsed.
    Malformed,
}

impl LoadSource {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Current => "current",
            Self::Legacy => "legacy",
            Self::Empty => "empty",
            Self::Malformed => "malformed",
        }
    }
}

/// Result of a startup load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadOutcome {
    pub tasks: Vec<Task>,
    pub source: LoadSource,
}

impl LoadOutcome {
    fn empty(source: LoadSource) -> Self {
        Self {
            tasks: Vec::new(),
            source,
        }
    }
}

/// Parses a current-format payload.
pub fn parse_current(raw: &str) -> Result<Vec<Task>, LoadError> {
    Ok(serde_json::from_str(raw)?)
}

/// Serializes the full sequence in the current format.
pub fn serialize_tasks(tasks: &[Task]) -> Result<String, serde_json::Error> {
    serde_json::to_string(tasks)
}

/// Persistence adapter over an injected storage capability.
pub struct PersistenceAdapter<S: KeyValueStorage> {
    storage: S,
    config: PersistenceConfig,
}

impl<S: KeyValueStorage> PersistenceAdapter<S> {
    pub fn new(storage: S, config: PersistenceConfig) -> Self {
        Self { storage, config }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn config(&self) -> &PersistenceConfig {
        &self.config
    }

    /// Reads the initial task sequence.
    ///
    /// Order: current key, then (only when the current key is absent or
    /// blank) the legacy key, then empty. The legacy key is never modified here.
    pub fn load(&self) -> LoadOutcome {
        let outcome = match self.read(&self.config.current_key) {
            Some(raw) => match parse_current(&raw) {
                Ok(tasks) => LoadOutcome {
                    tasks,
                    source: LoadSource::Current,
                },
                Err(err) => {
                    warn!(
                        "event=tasks_load module=persistence status=error format=current error_code=malformed error={err}"
                    );
                    LoadOutcome::empty(LoadSource::Malformed)
                }
            },
            None => self.load_legacy(),
        };

        info!(
            "event=tasks_load module=persistence status=ok source={} count={}",
            outcome.source.as_str(),
            outcome.tasks.len()
        );
        outcome
    }

    /// Writes the full sequence to the current key.
    ///
    /// Best-effort: returns `false` on serialization or storage failure and
    /// never retries.
    pub fn save(&self, tasks: &[Task]) -> bool {
        let payload = match serialize_tasks(tasks) {
            Ok(payload) => payload,
            Err(err) => {
                warn!(
                    "event=tasks_save module=persistence status=error error_code=serialize_failed error={err}"
                );
                return false;
            }
        };

        match self.storage.set(&self.config.current_key, &payload) {
            Ok(()) => {
                info!(
                    "event=tasks_save module=persistence status=ok count={} bytes={}",
                    tasks.len(),
                    payload.len()
                );
                true
            }
            Err(err) => {
                warn!(
                    "event=tasks_save module=persistence status=error error_code=write_failed error={err}"
                );
                false
            }
        }
    }

    fn load_legacy(&self) -> LoadOutcome {
        let Some(raw) = self.read(&self.config.legacy_key) else {
            return LoadOutcome::empty(LoadSource::Empty);
        };

        match migrate_legacy(&raw) {
            Ok(tasks) => {
                info!(
                    "event=tasks_migrate module=persistence status=ok from=legacy count={}",
                    tasks.len()
                );
                LoadOutcome {
                    tasks,
                    source: LoadSource::Legacy,
                }
            }
            Err(err) => {
                warn!(
                    "event=tasks_load module=persistence status=error format=legacy error_code=malformed error={err}"
                );
                LoadOutcome::empty(LoadSource::Malformed)
            }
        }
    }

    fn read(&self, key: &str) -> Option<String> {
        match self.storage.get(key) {
            // A blank value counts as "never written".
            Ok(value) => value.filter(|raw| !raw.trim().is_empty()),
            Err(err) => {
                warn!(
                    "event=storage_read module=persistence status=error key={key} error={err}"
                );
                None
            }
        }
    }
}
