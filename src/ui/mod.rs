//! Render-neutral view model
//!
//! Both front ends build these from a `Game` and draw them their own way.

pub mod theme;

use crate::game::{Game, SubmitOutcome};
use crate::platform::Storage;
use crate::progress::StageState;
use crate::puzzle::{self, StageId, View};

pub const LOCKED_STAGE_TEXT: &str = "This stage is locked. Clear previous stages to continue.";
pub const LOCKED_MASTER_TEXT: &str = "Clear all three stages to reveal the master flag.";
pub const SOLVED_STAGE_TEXT: &str = "Solved. Flag unlocked above in toast.";
pub const INPUT_PLACEHOLDER: &str = "Type your decoded phrase here...";
/// Shown in place of an undiscovered flag
pub const NO_FLAG: &str = "—";

/// A transient notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub title: String,
    pub description: String,
}

impl Toast {
    fn new(title: &str, description: impl Into<String>) -> Self {
        Self {
            title: title.to_string(),
            description: description.into(),
        }
    }

    pub fn for_outcome(outcome: &SubmitOutcome) -> Option<Self> {
        match outcome {
            SubmitOutcome::NotAStage => None,
            SubmitOutcome::Locked(_) => Some(Self::new("Locked", LOCKED_STAGE_TEXT)),
            SubmitOutcome::Incorrect(_) => Some(Self::new(
                "Incorrect",
                "Try again or inspect the source for subtle hints.",
            )),
            SubmitOutcome::Solved { flag, .. } => {
                Some(Self::new("Stage cleared", format!("Flag revealed: {flag}")))
            }
        }
    }

    pub fn reset() -> Self {
        Self::new("Progress reset", "All local progress cleared.")
    }
}

/// Everything a stage view shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageCard {
    pub id: StageId,
    pub title: &'static str,
    pub difficulty: &'static str,
    pub color: &'static str,
    pub prompt: &'static str,
    /// Terminal-style block with the payload
    pub payload_block: String,
    pub state: StageState,
    pub hint: Option<&'static str>,
}

impl StageCard {
    pub fn new<S: Storage>(game: &Game<S>, id: StageId, show_hints: bool) -> Self {
        let stage = puzzle::stage(id);
        Self {
            id,
            title: stage.title,
            difficulty: stage.difficulty.as_str(),
            color: stage.color,
            prompt: stage.prompt,
            payload_block: format!("$ cat payload.txt\n{}", stage.payload),
            state: game.stage_state(id),
            hint: show_hints.then(|| puzzle::hint(id)),
        }
    }

    /// Locked stages show a message instead of the answer input
    pub fn accepts_input(&self) -> bool {
        self.state != StageState::Locked
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MasterPanel {
    pub flag: Option<&'static str>,
}

impl MasterPanel {
    pub fn new<S: Storage>(game: &Game<S>) -> Self {
        Self {
            flag: game
                .is_unlocked(View::Master)
                .then(|| game.master_flag())
                .flatten(),
        }
    }
}

/// One tile in the discovered-flags panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagTile {
    pub view: View,
    pub label: String,
    pub value: String,
}

pub fn flag_tiles<S: Storage>(game: &Game<S>) -> Vec<FlagTile> {
    game.discovered_flags()
        .into_iter()
        .map(|(view, flag)| FlagTile {
            view,
            label: format!("{} FLAG", view.as_str().to_uppercase()),
            value: flag.unwrap_or_else(|| NO_FLAG.to_string()),
        })
        .collect()
}

pub fn progress_label<S: Storage>(game: &Game<S>) -> String {
    format!("{}% Complete", game.completion_percent())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::ProgressStore;
    use crate::platform::MemoryStorage;

    fn game() -> Game<MemoryStorage> {
        Game::new(ProgressStore::new(MemoryStorage::new()))
    }

    #[test]
    fn test_stage_card() {
        let game = game();
        let card = StageCard::new(&game, StageId::S1, false);
        assert_eq!(card.title, "Stage 1 · Caesar Cipher");
        assert_eq!(card.difficulty, "Easy");
        assert_eq!(card.payload_block, "$ cat payload.txt\nQHRQ PDWULA");
        assert!(card.accepts_input());
        assert_eq!(card.hint, None);

        let locked = StageCard::new(&game, StageId::S2, true);
        assert!(!locked.accepts_input());
        assert_eq!(locked.hint, Some("XOR keyChar='K' (0x4b)"));
    }

    #[test]
    fn test_flag_tiles_and_master_panel() {
        let mut game = game();
        let tiles = flag_tiles(&game);
        assert_eq!(tiles[0].label, "S1 FLAG");
        assert_eq!(tiles[3].label, "MASTER FLAG");
        assert!(tiles.iter().all(|t| t.value == NO_FLAG));
        assert_eq!(MasterPanel::new(&game).flag, None);

        for id in StageId::ALL {
            game.select(View::Stage(id));
            game.submit(puzzle::plaintext(id));
        }
        let tiles = flag_tiles(&game);
        assert_eq!(tiles[1].value, "Dark_Flag{S2_X0R_wn3d}");
        assert_eq!(
            MasterPanel::new(&game).flag,
            Some("Dark_Flag{M4st3r_P0wn3r}")
        );
        assert_eq!(progress_label(&game), "100% Complete");
    }

    #[test]
    fn test_toasts() {
        let solved = SubmitOutcome::Solved {
            stage: StageId::S1,
            flag: "F",
            unlocked_next: None,
        };
        assert_eq!(
            Toast::for_outcome(&solved).unwrap().description,
            "Flag revealed: F"
        );
        assert_eq!(
            Toast::for_outcome(&SubmitOutcome::Incorrect(StageId::S1))
                .unwrap()
                .title,
            "Incorrect"
        );
        assert_eq!(Toast::for_outcome(&SubmitOutcome::NotAStage), None);
        assert_eq!(Toast::reset().title, "Progress reset");
    }
}
