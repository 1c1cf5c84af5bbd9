//! Game shell
//!
//! Owns the progress store and the active view. Front ends call into this
//! and render whatever it reports; nothing here knows about the DOM or the
//! terminal.

use crate::persistence::ProgressStore;
use crate::platform::Storage;
use crate::progress::{self, ProgressRecord, StageState};
use crate::puzzle::{self, StageId, View};

/// Result of submitting an answer on the active view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The master view takes no answers
    NotAStage,
    /// Previous stage unsolved; the answer was not checked
    Locked(StageId),
    Incorrect(StageId),
    Solved {
        stage: StageId,
        flag: &'static str,
        /// View opened by this solve, if it was the first one
        unlocked_next: Option<View>,
    },
}

/// One navigation button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavEntry {
    pub view: View,
    pub label: &'static str,
    pub unlocked: bool,
    pub solved: bool,
    pub active: bool,
}

pub struct Game<S: Storage> {
    store: ProgressStore<S>,
    progress: ProgressRecord,
    active: View,
}

impl<S: Storage> Game<S> {
    /// Load progress and resume at the first open stage
    pub fn new(store: ProgressStore<S>) -> Self {
        let progress = store.get_progress();
        let active = resume_view(&progress);
        log::info!(
            "Loaded progress: {}/3 solved, resuming at {}",
            progress.solved_count(),
            active.as_str()
        );
        Self {
            store,
            progress,
            active,
        }
    }

    pub fn store(&self) -> &ProgressStore<S> {
        &self.store
    }

    pub fn progress(&self) -> &ProgressRecord {
        &self.progress
    }

    pub fn active(&self) -> View {
        self.active
    }

    /// Any view can be selected; locked stages just render a lock message
    pub fn select(&mut self, view: View) {
        self.active = view;
    }

    pub fn is_unlocked(&self, view: View) -> bool {
        progress::is_unlocked(&self.progress, view)
    }

    pub fn stage_state(&self, id: StageId) -> StageState {
        progress::stage_state(&self.progress, id)
    }

    /// Check an answer for the active stage. The unlock gate runs first, so
    /// a correct answer to a locked stage is still refused.
    pub fn submit(&mut self, answer: &str) -> SubmitOutcome {
        let Some(id) = self.active.stage() else {
            return SubmitOutcome::NotAStage;
        };
        if !self.is_unlocked(View::Stage(id)) {
            log::info!("Rejected answer for locked stage {}", id.as_str());
            return SubmitOutcome::Locked(id);
        }
        if !puzzle::verify(id, answer) {
            return SubmitOutcome::Incorrect(id);
        }

        let was_solved = self.progress.is_solved(id);
        let flag = puzzle::reveal(id);
        if !was_solved {
            self.progress = self.store.set_stage_solved(id, flag);
        }
        let next = id.next();
        let unlocked_next = (!was_solved && self.is_unlocked(next)).then_some(next);
        SubmitOutcome::Solved {
            stage: id,
            flag,
            unlocked_next,
        }
    }

    /// Clear all progress and go back to stage 1
    pub fn reset(&mut self) {
        self.store.reset_progress();
        self.progress = self.store.get_progress();
        self.active = View::Stage(StageId::S1);
    }

    /// Share of stages solved, rounded to a whole percent
    pub fn completion_percent(&self) -> u8 {
        let solved = self.progress.solved_count() as f64;
        (solved / StageId::ALL.len() as f64 * 100.0).round() as u8
    }

    pub fn nav(&self) -> Vec<NavEntry> {
        View::ALL
            .iter()
            .map(|&view| NavEntry {
                view,
                label: view.label(),
                unlocked: self.is_unlocked(view),
                solved: view.stage().is_some_and(|id| self.progress.is_solved(id)),
                active: view == self.active,
            })
            .collect()
    }

    /// Revealed flags for s1, s2, s3 and master, in that order
    pub fn discovered_flags(&self) -> Vec<(View, Option<String>)> {
        View::ALL
            .iter()
            .map(|&view| (view, self.progress.flag(view).map(str::to_string)))
            .collect()
    }

    pub fn master_flag(&self) -> Option<&'static str> {
        progress::master_flag(&self.progress)
    }
}

/// First unlocked, unsolved stage; the master view once all are solved
fn resume_view(record: &ProgressRecord) -> View {
    StageId::ALL
        .iter()
        .find(|&&id| progress::stage_state(record, id) == StageState::Unlocked)
        .map(|&id| View::Stage(id))
        .unwrap_or(if record.all_solved() {
            View::Master
        } else {
            View::Stage(StageId::S1)
        })
}
