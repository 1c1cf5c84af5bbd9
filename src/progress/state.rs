//! Unlock state machine
//!
//! Each stage is Locked, Unlocked or Solved. The only transition is
//! `record_solved`; every state is derived from the record on demand.

use super::record::ProgressRecord;
use crate::consts::MASTER_FLAG;
use crate::puzzle::{self, StageId, View};

/// Derived state of one stage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageState {
    /// Previous stage not solved yet
    Locked,
    /// Accepts answers
    Unlocked,
    /// Flag revealed
    Solved,
}

/// Stage 1 is always open, stage N+1 needs stage N, master needs all three
pub fn is_unlocked(record: &ProgressRecord, view: View) -> bool {
    match view {
        View::Stage(id) => id.previous().is_none_or(|prev| record.is_solved(prev)),
        View::Master => record.all_solved(),
    }
}

pub fn stage_state(record: &ProgressRecord, id: StageId) -> StageState {
    if record.is_solved(id) {
        StageState::Solved
    } else if is_unlocked(record, View::Stage(id)) {
        StageState::Unlocked
    } else {
        StageState::Locked
    }
}

/// Apply a solve event, returning the new record. Idempotent.
pub fn record_solved(record: &ProgressRecord, id: StageId) -> ProgressRecord {
    let mut next = record.clone();
    next.mark_solved(id, puzzle::reveal(id));
    next
}

/// The master flag, only once every stage is solved
pub fn master_flag(record: &ProgressRecord) -> Option<&'static str> {
    record.all_solved().then_some(MASTER_FLAG)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solved(ids: &[StageId]) -> ProgressRecord {
        ids.iter()
            .fold(ProgressRecord::new(), |rec, &id| record_solved(&rec, id))
    }

    #[test]
    fn test_fresh_record() {
        let record = ProgressRecord::new();
        assert_eq!(stage_state(&record, StageId::S1), StageState::Unlocked);
        assert_eq!(stage_state(&record, StageId::S2), StageState::Locked);
        assert_eq!(stage_state(&record, StageId::S3), StageState::Locked);
        assert!(!is_unlocked(&record, View::Master));
        assert_eq!(master_flag(&record), None);
    }

    #[test]
    fn test_unlock_rules_for_every_subset() {
        for mask in 0u8..8 {
            let ids: Vec<StageId> = StageId::ALL
                .iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .map(|(_, &id)| id)
                .collect();
            let record = solved(&ids);
            let s = |id| record.is_solved(id);

            assert!(is_unlocked(&record, View::Stage(StageId::S1)));
            assert_eq!(is_unlocked(&record, View::Stage(StageId::S2)), s(StageId::S1));
            assert_eq!(is_unlocked(&record, View::Stage(StageId::S3)), s(StageId::S2));
            assert_eq!(
                is_unlocked(&record, View::Master),
                s(StageId::S1) && s(StageId::S2) && s(StageId::S3)
            );
        }
    }

    #[test]
    fn test_sequence_transitions() {
        let record = solved(&[StageId::S1]);
        assert_eq!(stage_state(&record, StageId::S1), StageState::Solved);
        assert_eq!(stage_state(&record, StageId::S2), StageState::Unlocked);
        assert_eq!(stage_state(&record, StageId::S3), StageState::Locked);

        let record = record_solved(&record, StageId::S2);
        assert_eq!(stage_state(&record, StageId::S3), StageState::Unlocked);

        let record = record_solved(&record, StageId::S3);
        assert_eq!(master_flag(&record), Some("Dark_Flag{M4st3r_P0wn3r}"));
        assert_eq!(record.flag(View::Master), Some("Dark_Flag{M4st3r_P0wn3r}"));
    }

    #[test]
    fn test_record_solved_is_pure_and_idempotent() {
        let before = ProgressRecord::new();
        let once = record_solved(&before, StageId::S1);
        let twice = record_solved(&once, StageId::S1);
        assert!(before.is_empty());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_flags_follow_solved() {
        let record = solved(&[StageId::S1, StageId::S2]);
        for id in StageId::ALL {
            assert_eq!(record.flag(View::Stage(id)).is_some(), record.is_solved(id));
        }
        assert_eq!(record.flag(View::Master).is_some(), record.all_solved());
    }
}
