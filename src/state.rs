//! The on-disk JSON record accumulated across runs.
//!
//! The file is read whole at the start of a cycle and written whole when
//! anything changed. An absent or unparseable file is treated as an empty
//! record rather than an error, so a corrupted file heals itself on the next
//! successful update. Any other read failure aborts the run instead: prior
//! keys may still be on disk, and overwriting from an empty record would
//! drop them. No locking; the workload is a low-frequency scheduled job and
//! the last writer wins.

use crate::{
    error::UpdateError,
    stats::DerivedStats,
};
use serde_json::{
    Map,
    Value,
};
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PersistedState {
    fields: Map<String, Value>,
}

impl PersistedState {
    /// Read the state file, defaulting to empty on absence or corruption.
    ///
    /// Only those two cases are tolerated. A file that exists but cannot be
    /// read (permissions, a directory in the way) is an error: treating it
    /// as empty would let the next write discard whatever is stored there.
    pub fn load(path: &Path) -> Result<Self, UpdateError> {
        let fields = match std::fs::read_to_string(path) {
            Ok(raw) => match serde_json::from_str::<Value>(&raw) {
                Ok(Value::Object(map)) => map,
                Ok(_) | Err(_) => {
                    debug!("ignoring unparseable state file {}", path.display());
                    Map::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Map::new(),
            Err(source) => {
                return Err(UpdateError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        Ok(Self { fields })
    }

    /// Merge the derived stats in, returning whether anything differed.
    ///
    /// Keys already present but not named by `update` are preserved. When no
    /// named key differs the state is left untouched, so the caller can skip
    /// the write entirely.
    pub fn apply(&mut self, update: &DerivedStats) -> bool {
        let changed = update.iter().any(|(key, value)| self.fields.get(key) != Some(value));
        if changed {
            for (key, value) in update {
                self.fields.insert(key.clone(), value.clone());
            }
        }
        changed
    }

    /// Write the full record back, pretty-printed.
    pub fn save(&self, path: &Path) -> Result<(), UpdateError> {
        let io_err = |source| UpdateError::Io {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(io_err)?;
            }
        }

        let json = serde_json::to_string_pretty(&self.fields).expect("a JSON map always serializes");
        std::fs::write(path, json).map_err(io_err)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use temp_dir::TempDir;

    fn derived(value: Value) -> DerivedStats {
        value.as_object().unwrap().clone()
    }

    #[test]
    fn merge_preserves_untouched_keys() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("stats.json");
        std::fs::write(&path, r#"{"a": 1, "b": 2}"#).unwrap();

        let mut state = PersistedState::load(&path).unwrap();
        assert!(state.apply(&derived(json!({ "b": 3, "c": 4 }))));
        state.save(&path).unwrap();

        let on_disk: Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(on_disk, json!({ "a": 1, "b": 3, "c": 4 }));
    }

    #[test]
    fn unchanged_stats_do_not_mutate_state() {
        let mut state = PersistedState::default();
        assert!(state.apply(&derived(json!({ "song": "a - b" }))));
        assert!(!state.apply(&derived(json!({ "song": "a - b" }))));
        assert_eq!(state.get("song"), Some(&json!("a - b")));
    }

    #[test]
    fn second_run_is_a_noop_and_leaves_the_file_byte_identical() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("stats.json");
        let update = derived(json!({ "movies_watched": 200, "song": "x - y" }));

        let mut state = PersistedState::load(&path).unwrap();
        assert!(state.apply(&update));
        state.save(&path).unwrap();
        let first = std::fs::read(&path).unwrap();

        let mut state = PersistedState::load(&path).unwrap();
        assert!(!state.apply(&update));
        assert_eq!(std::fs::read(&path).unwrap(), first);
    }

    #[test]
    fn corrupt_state_file_is_treated_as_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("stats.json");
        std::fs::write(&path, "not json {{{").unwrap();

        let mut state = PersistedState::load(&path).unwrap();
        assert_eq!(state, PersistedState::default());
        assert!(state.apply(&derived(json!({ "a": 1 }))));
        state.save(&path).unwrap();

        let on_disk: Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(on_disk, json!({ "a": 1 }));
    }

    #[test]
    fn non_object_state_file_is_treated_as_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("stats.json");
        std::fs::write(&path, "[1, 2, 3]").unwrap();
        assert_eq!(PersistedState::load(&path).unwrap(), PersistedState::default());
    }

    #[test]
    fn unreadable_state_file_aborts_the_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("stats.json");
        // Exists but cannot be read as a file. Defaulting to empty here
        // would let a later save discard previously persisted keys.
        std::fs::create_dir(&path).unwrap();

        let err = PersistedState::load(&path).unwrap_err();
        assert!(matches!(err, UpdateError::Io { .. }));
    }

    #[test]
    fn save_creates_missing_parent_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("assets").join("stats.json");

        let mut state = PersistedState::default();
        state.apply(&derived(json!({ "a": 1 })));
        state.save(&path).unwrap();
        assert!(path.is_file());
    }
}
