//! Stage identifiers and stage data
//!
//! Stages are plain data. Their behaviour (verify, reveal) comes from the
//! dispatch functions in `catalog`.

use serde::{Deserialize, Serialize};

use crate::cipher::{self, CipherError};

/// One of the three puzzle stages
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StageId {
    S1,
    S2,
    S3,
}

impl StageId {
    /// All stages in unlock order
    pub const ALL: [StageId; 3] = [StageId::S1, StageId::S2, StageId::S3];

    pub fn as_str(&self) -> &'static str {
        match self {
            StageId::S1 => "s1",
            StageId::S2 => "s2",
            StageId::S3 => "s3",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "s1" | "1" => Some(StageId::S1),
            "s2" | "2" => Some(StageId::S2),
            "s3" | "3" => Some(StageId::S3),
            _ => None,
        }
    }

    /// Stage that must be solved before this one unlocks
    pub fn previous(&self) -> Option<StageId> {
        match self {
            StageId::S1 => None,
            StageId::S2 => Some(StageId::S1),
            StageId::S3 => Some(StageId::S2),
        }
    }

    /// View unlocked by solving this stage (the master view after stage 3)
    pub fn next(&self) -> View {
        match self {
            StageId::S1 => View::Stage(StageId::S2),
            StageId::S2 => View::Stage(StageId::S3),
            StageId::S3 => View::Master,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StageId::S1 => "Stage 1",
            StageId::S2 => "Stage 2",
            StageId::S3 => "Stage 3",
        }
    }
}

/// A navigable view: one of the stages or the master flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    Stage(StageId),
    Master,
}

impl View {
    /// Navigation order
    pub const ALL: [View; 4] = [
        View::Stage(StageId::S1),
        View::Stage(StageId::S2),
        View::Stage(StageId::S3),
        View::Master,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            View::Stage(id) => id.as_str(),
            View::Master => "master",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        if s.trim().eq_ignore_ascii_case("master") {
            return Some(View::Master);
        }
        StageId::parse(s).map(View::Stage)
    }

    pub fn label(&self) -> &'static str {
        match self {
            View::Stage(id) => id.label(),
            View::Master => "Master Flag",
        }
    }

    pub fn stage(&self) -> Option<StageId> {
        match self {
            View::Stage(id) => Some(*id),
            View::Master => None,
        }
    }
}

impl From<StageId> for View {
    fn from(id: StageId) -> Self {
        View::Stage(id)
    }
}

/// Difficulty badge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

/// Cipher used by a stage, with its key material
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StageKind {
    Caesar { shift: i32 },
    Xor { key: char },
    Vigenere { keyword: &'static str },
}

impl StageKind {
    pub fn encode(&self, plaintext: &str) -> Result<String, CipherError> {
        match self {
            StageKind::Caesar { shift } => Ok(cipher::caesar_encode(plaintext, *shift)),
            StageKind::Xor { key } => Ok(cipher::xor_encode_hex(plaintext, *key)),
            StageKind::Vigenere { keyword } => cipher::vigenere_encode(plaintext, keyword),
        }
    }

    pub fn decode(&self, payload: &str) -> Result<String, CipherError> {
        match self {
            StageKind::Caesar { shift } => Ok(cipher::caesar_decode(payload, *shift)),
            StageKind::Xor { key } => cipher::xor_decode_hex(payload, *key),
            StageKind::Vigenere { keyword } => cipher::vigenere_decode(payload, keyword),
        }
    }
}

/// An immutable puzzle stage
#[derive(Debug, Clone)]
pub struct Stage {
    pub id: StageId,
    pub title: &'static str,
    pub difficulty: Difficulty,
    /// Accent color (CSS hex)
    pub color: &'static str,
    pub prompt: &'static str,
    pub kind: StageKind,
    /// Expected answer
    pub plaintext: &'static str,
    /// Ciphertext shown to the player, computed once from `kind` and `plaintext`
    pub payload: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_id_serde_names() {
        assert_eq!(serde_json::to_string(&StageId::S2).unwrap(), "\"s2\"");
        let id: StageId = serde_json::from_str("\"s3\"").unwrap();
        assert_eq!(id, StageId::S3);
    }

    #[test]
    fn test_view_parse() {
        assert_eq!(View::parse("S1"), Some(View::Stage(StageId::S1)));
        assert_eq!(View::parse(" 3 "), Some(View::Stage(StageId::S3)));
        assert_eq!(View::parse("Master"), Some(View::Master));
        assert_eq!(View::parse("s4"), None);
    }

    #[test]
    fn test_unlock_chain() {
        assert_eq!(StageId::S1.previous(), None);
        assert_eq!(StageId::S3.previous(), Some(StageId::S2));
        assert_eq!(StageId::S1.next(), View::Stage(StageId::S2));
        assert_eq!(StageId::S3.next(), View::Master);
    }

    #[test]
    fn test_kind_decode_inverts_encode() {
        let kinds = [
            StageKind::Caesar { shift: 3 },
            StageKind::Xor { key: 'K' },
            StageKind::Vigenere { keyword: "MATRIX" },
        ];
        for kind in kinds {
            let cipher = kind.encode("NEONMATRIX").unwrap();
            assert_eq!(kind.decode(&cipher).unwrap(), "NEONMATRIX");
        }
    }
}
