//! Persisted progress record
//!
//! Layout on disk / in LocalStorage:
//! `{"solved":{"s1":true},"flags":{"s1":"Dark_Flag{...}","master":"..."}}`
//!
//! Maps are keyed by plain strings so unknown keys survive a load/save cycle.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::consts::MASTER_FLAG;
use crate::puzzle::{StageId, View};

/// Solved stages and the flags revealed for them
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressRecord {
    #[serde(default)]
    pub solved: BTreeMap<String, bool>,
    #[serde(default)]
    pub flags: BTreeMap<String, String>,
}

impl ProgressRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode a stored record
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// A `false` entry counts as unsolved
    pub fn is_solved(&self, id: StageId) -> bool {
        self.solved.get(id.as_str()).copied().unwrap_or(false)
    }

    pub fn all_solved(&self) -> bool {
        StageId::ALL.iter().all(|&id| self.is_solved(id))
    }

    pub fn solved_count(&self) -> usize {
        StageId::ALL.iter().filter(|&&id| self.is_solved(id)).count()
    }

    /// Flag revealed for a stage or the master view
    pub fn flag(&self, view: View) -> Option<&str> {
        self.flags.get(view.as_str()).map(String::as_str)
    }

    /// Mark a stage solved with its flag, adding the master flag once all
    /// three stages are solved.
    pub fn mark_solved(&mut self, id: StageId, flag: &str) {
        self.solved.insert(id.as_str().to_string(), true);
        self.flags.insert(id.as_str().to_string(), flag.to_string());
        if self.all_solved() {
            self.flags
                .insert(View::Master.as_str().to_string(), MASTER_FLAG.to_string());
        }
    }

    pub fn is_empty(&self) -> bool {
        self.solved.is_empty() && self.flags.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_record_layout() {
        let record = ProgressRecord::new();
        assert_eq!(record.to_json().unwrap(), r#"{"solved":{},"flags":{}}"#);
    }

    #[test]
    fn test_mark_solved_layout() {
        let mut record = ProgressRecord::new();
        record.mark_solved(StageId::S1, "Dark_Flag{S1C43s4rCr4ck3d}");
        assert_eq!(
            record.to_json().unwrap(),
            r#"{"solved":{"s1":true},"flags":{"s1":"Dark_Flag{S1C43s4rCr4ck3d}"}}"#
        );
    }

    #[test]
    fn test_master_flag_added_when_complete() {
        let mut record = ProgressRecord::new();
        record.mark_solved(StageId::S1, "a");
        record.mark_solved(StageId::S2, "b");
        assert_eq!(record.flag(View::Master), None);
        record.mark_solved(StageId::S3, "c");
        assert_eq!(record.flag(View::Master), Some(MASTER_FLAG));
    }

    #[test]
    fn test_missing_maps_default() {
        let record = ProgressRecord::from_json(r#"{"solved":{"s1":true}}"#).unwrap();
        assert!(record.is_solved(StageId::S1));
        assert!(record.flags.is_empty());
    }

    #[test]
    fn test_false_entries_and_unknown_keys() {
        let json = r#"{"solved":{"s1":false,"s2":true,"bonus":true},"flags":{"bonus":"x"}}"#;
        let record = ProgressRecord::from_json(json).unwrap();
        assert!(!record.is_solved(StageId::S1));
        assert!(record.is_solved(StageId::S2));
        assert_eq!(record.solved_count(), 1);

        let back = ProgressRecord::from_json(&record.to_json().unwrap()).unwrap();
        assert_eq!(back.flags.get("bonus").map(String::as_str), Some("x"));
    }

    #[test]
    fn test_malformed_json_rejected() {
        assert!(ProgressRecord::from_json("not json").is_err());
        assert!(ProgressRecord::from_json("null").is_err());
        assert!(ProgressRecord::from_json(r#"{"solved":"yes"}"#).is_err());
    }
}
