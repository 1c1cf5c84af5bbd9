//! DarkCTF - A three-stage cryptography capture-the-flag puzzle
//!
//! Core modules:
//! - `cipher`: Classical cipher transforms (Caesar, single-byte XOR, Vigenère)
//! - `puzzle`: Static stage catalog, answer verification and flag reveal
//! - `progress`: Progress record and the Locked/Unlocked/Solved state machine
//! - `platform`: Storage backends (LocalStorage on web, files on native, memory)
//! - `persistence`: Progress store over an injected storage backend
//! - `settings`: Persisted player settings
//! - `health`: Optional backend greeting check (web only)
//! - `game`: Framework-independent game shell (navigation, submit, reset)
//! - `ui`: Render-neutral view model and theme shared by the front ends
//! - `cli`: Terminal front end (native only)

pub mod cipher;
#[cfg(not(target_arch = "wasm32"))]
pub mod cli;
pub mod game;
pub mod health;
pub mod persistence;
pub mod platform;
pub mod progress;
pub mod puzzle;
pub mod settings;
pub mod ui;

pub use game::{Game, SubmitOutcome};
pub use persistence::ProgressStore;
pub use progress::{ProgressRecord, StageState};
pub use puzzle::{Stage, StageId, StageKind, View};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Storage key holding the JSON progress record
    pub const PROGRESS_KEY: &str = "darkctf_progress_v1";
    /// Storage key holding the JSON settings
    pub const SETTINGS_KEY: &str = "darkctf_settings_v1";

    /// Flags awarded per stage
    pub const FLAG_S1: &str = "Dark_Flag{S1C43s4rCr4ck3d}";
    pub const FLAG_S2: &str = "Dark_Flag{S2_X0R_wn3d}";
    pub const FLAG_S3: &str = "Dark_Flag{S3_V1g3n3r3_OK}";
    /// Awarded only once every stage is solved
    pub const MASTER_FLAG: &str = "Dark_Flag{M4st3r_P0wn3r}";

    /// Stage 1: Caesar
    pub const S1_SHIFT: i32 = 3;
    pub const S1_PLAINTEXT: &str = "NEON MATRIX";

    /// Stage 2: XOR with a single key character (0x4b)
    pub const S2_KEY: char = 'K';
    pub const S2_PLAINTEXT: &str = "CYBER NOVA";

    /// Stage 3: Vigenère
    pub const S3_KEYWORD: &str = "MATRIX";
    pub const S3_PLAINTEXT: &str = "DARK HACKER";
}
