//! Progress persistence
//!
//! `ProgressStore` keeps the JSON progress record under a single storage
//! key. Reads fail soft: anything missing, unreadable or malformed counts
//! as "no progress yet". Write failures are logged and otherwise ignored.

use crate::consts::PROGRESS_KEY;
use crate::platform::Storage;
use crate::progress::{self, ProgressRecord};
use crate::puzzle::{StageId, View};

pub struct ProgressStore<S: Storage> {
    storage: S,
}

impl<S: Storage> ProgressStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Load the stored record, or an empty one
    pub fn get_progress(&self) -> ProgressRecord {
        let json = match self.storage.get_item(PROGRESS_KEY) {
            Ok(Some(json)) => json,
            Ok(None) => return ProgressRecord::new(),
            Err(e) => {
                log::warn!("Could not read progress, starting fresh: {}", e);
                return ProgressRecord::new();
            }
        };

        match ProgressRecord::from_json(&json) {
            Ok(record) => record,
            Err(e) => {
                log::warn!("Discarding malformed progress record: {}", e);
                ProgressRecord::new()
            }
        }
    }

    /// Mark a stage solved with `flag`, add the master flag once all three
    /// are solved, persist, and return the updated record.
    pub fn set_stage_solved(&mut self, id: StageId, flag: &str) -> ProgressRecord {
        let mut record = self.get_progress();
        record.mark_solved(id, flag);
        self.save(&record);
        log::info!(
            "Stage {} solved ({}/3)",
            id.as_str(),
            record.solved_count()
        );
        record
    }

    pub fn is_unlocked(&self, view: View) -> bool {
        progress::is_unlocked(&self.get_progress(), view)
    }

    /// Remove the stored record entirely
    pub fn reset_progress(&mut self) {
        match self.storage.remove_item(PROGRESS_KEY) {
            Ok(()) => log::info!("Progress cleared"),
            Err(e) => log::warn!("Could not clear progress: {}", e),
        }
    }

    /// `None` until every stage is solved
    pub fn get_master_flag(&self) -> Option<&'static str> {
        progress::master_flag(&self.get_progress())
    }

    fn save(&mut self, record: &ProgressRecord) {
        match record.to_json() {
            Ok(json) => {
                if let Err(e) = self.storage.set_item(PROGRESS_KEY, &json) {
                    log::warn!("Could not save progress: {}", e);
                }
            }
            Err(e) => log::warn!("Could not encode progress: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::MASTER_FLAG;
    use crate::platform::{MemoryStorage, StorageError};
    use crate::puzzle::reveal;

    fn store() -> ProgressStore<MemoryStorage> {
        ProgressStore::new(MemoryStorage::new())
    }

    /// Backend whose every call fails
    struct Broken;

    impl Storage for Broken {
        fn get_item(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Unavailable)
        }
        fn set_item(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable)
        }
        fn remove_item(&mut self, _key: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable)
        }
    }

    #[test]
    fn test_empty_by_default() {
        let store = store();
        assert_eq!(store.get_progress(), ProgressRecord::new());
        assert!(store.is_unlocked(View::Stage(StageId::S1)));
        assert!(!store.is_unlocked(View::Stage(StageId::S2)));
        assert_eq!(store.get_master_flag(), None);
    }

    #[test]
    fn test_set_stage_solved_persists() {
        let mut store = store();
        let record = store.set_stage_solved(StageId::S1, "Dark_Flag{S1C43s4rCr4ck3d}");
        assert!(record.is_solved(StageId::S1));

        let loaded = store.get_progress();
        assert_eq!(
            loaded.flag(View::Stage(StageId::S1)),
            Some("Dark_Flag{S1C43s4rCr4ck3d}")
        );
        assert_eq!(loaded.solved.get("s1"), Some(&true));
        assert!(store.is_unlocked(View::Stage(StageId::S2)));
        assert!(!store.is_unlocked(View::Stage(StageId::S3)));

        let raw = store.storage().get_item(PROGRESS_KEY).unwrap().unwrap();
        assert_eq!(
            raw,
            r#"{"solved":{"s1":true},"flags":{"s1":"Dark_Flag{S1C43s4rCr4ck3d}"}}"#
        );
    }

    #[test]
    fn test_master_flag_after_all_stages() {
        let mut store = store();
        for id in StageId::ALL {
            assert_eq!(store.get_master_flag(), None);
            assert!(!store.is_unlocked(View::Master));
            store.set_stage_solved(id, reveal(id));
        }
        assert_eq!(store.get_master_flag(), Some("Dark_Flag{M4st3r_P0wn3r}"));
        assert!(store.is_unlocked(View::Master));
        assert_eq!(store.get_progress().flag(View::Master), Some(MASTER_FLAG));
    }

    #[test]
    fn test_reset_progress() {
        let mut store = store();
        store.set_stage_solved(StageId::S1, reveal(StageId::S1));
        store.reset_progress();
        assert_eq!(store.get_progress(), ProgressRecord::new());
        assert!(!store.is_unlocked(View::Stage(StageId::S2)));
        assert!(store.storage().is_empty());
    }

    #[test]
    fn test_malformed_record_fails_soft() {
        for raw in ["", "{", "[1,2]", "null", r#"{"solved":[]}"#] {
            let mut storage = MemoryStorage::new();
            storage.set_item(PROGRESS_KEY, raw).unwrap();
            let store = ProgressStore::new(storage);
            assert_eq!(store.get_progress(), ProgressRecord::new(), "input {raw:?}");
        }
    }

    #[test]
    fn test_malformed_record_overwritten_on_solve() {
        let mut storage = MemoryStorage::new();
        storage.set_item(PROGRESS_KEY, "garbage").unwrap();
        let mut store = ProgressStore::new(storage);
        store.set_stage_solved(StageId::S1, reveal(StageId::S1));
        assert!(store.get_progress().is_solved(StageId::S1));
    }

    #[test]
    fn test_broken_storage_never_panics() {
        let mut store = ProgressStore::new(Broken);
        assert_eq!(store.get_progress(), ProgressRecord::new());
        let record = store.set_stage_solved(StageId::S1, reveal(StageId::S1));
        assert!(record.is_solved(StageId::S1));
        store.reset_progress();
        assert_eq!(store.get_master_flag(), None);
    }
}
