//! Assignment collection persistence.
//!
//! The whole collection round-trips through one JSON document holding the
//! serialized array, mirroring the single storage key the app owns. Loading
//! never fails: a missing or malformed file degrades to an empty
//! collection so a corrupt store can't take the session down.

use std::path::{Path, PathBuf};

use crate::assignment::Assignment;
use crate::error::StorageError;
use crate::storage::data_dir;

const STORE_FILE: &str = "assignments.json";

/// File-backed store for the assignment collection.
pub struct AssignmentStore {
    path: PathBuf,
}

impl AssignmentStore {
    /// Open the store at the default data directory.
    pub fn open() -> Result<Self, StorageError> {
        Ok(Self {
            path: data_dir()?.join(STORE_FILE),
        })
    }

    /// Open a store at an explicit path.
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// Load the persisted collection.
    ///
    /// Missing files and malformed content both yield an empty collection.
    pub fn load(&self) -> Vec<Assignment> {
        let Ok(content) = std::fs::read_to_string(&self.path) else {
            return Vec::new();
        };
        serde_json::from_str(&content).unwrap_or_default()
    }

    /// Persist the collection, replacing the previous contents.
    pub fn save(&self, assignments: &[Assignment]) -> Result<(), StorageError> {
        let content = serde_json::to_string_pretty(assignments)?;
        std::fs::write(&self.path, content).map_err(|source| StorageError::WriteFailed {
            path: self.path.clone(),
            source,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assignment::{build_assignment, AssignmentInput};
    use chrono::{Duration, Utc};

    fn sample_assignment() -> Assignment {
        build_assignment(
            AssignmentInput {
                title: "Problem set".to_string(),
                course: Some("Math 3".to_string()),
                due_date: Some(Utc::now() + Duration::hours(12)),
                ..Default::default()
            },
            Utc::now(),
        )
        .unwrap()
    }

    #[test]
    fn missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = AssignmentStore::with_path(dir.path().join("assignments.json"));
        assert!(store.load().is_empty());
    }

    #[test]
    fn malformed_content_degrades_to_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("assignments.json");
        std::fs::write(&path, "{not json").unwrap();
        let store = AssignmentStore::with_path(path);
        assert!(store.load().is_empty());
    }

    #[test]
    fn wrong_shape_degrades_to_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("assignments.json");
        std::fs::write(&path, r#"{"assignments": 3}"#).unwrap();
        let store = AssignmentStore::with_path(path);
        assert!(store.load().is_empty());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = AssignmentStore::with_path(dir.path().join("assignments.json"));

        let assignment = sample_assignment();
        store.save(std::slice::from_ref(&assignment)).unwrap();

        let loaded = store.load();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0], assignment);
    }

    #[test]
    fn absent_optionals_stay_absent_across_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = AssignmentStore::with_path(dir.path().join("assignments.json"));

        let mut assignment = sample_assignment();
        assignment.course = None;
        assignment.notes = None;
        assignment.estimated_hours = None;
        store.save(std::slice::from_ref(&assignment)).unwrap();

        let raw = std::fs::read_to_string(store.path()).unwrap();
        assert!(!raw.contains("course"));
        assert!(!raw.contains("null"));

        let loaded = store.load();
        assert_eq!(loaded[0].course, None);
        assert_eq!(loaded[0].notes, None);
        assert_eq!(loaded[0].estimated_hours, None);
    }

    #[test]
    fn save_overwrites_previous_contents() {
        let dir = tempfile::tempdir().unwrap();
        let store = AssignmentStore::with_path(dir.path().join("assignments.json"));

        store.save(&[sample_assignment(), sample_assignment()]).unwrap();
        store.save(&[]).unwrap();
        assert!(store.load().is_empty());
    }
}
