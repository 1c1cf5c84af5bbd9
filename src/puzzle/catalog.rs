//! The fixed three-stage catalog and its verify/reveal dispatch

use std::sync::LazyLock;

use super::stage::{Difficulty, Stage, StageId, StageKind};
use crate::consts::*;

static CATALOG: LazyLock<[Stage; 3]> = LazyLock::new(|| {
    [
        build(
            StageId::S1,
            "Stage 1 · Caesar Cipher",
            Difficulty::Easy,
            "#00FF41",
            "Decrypt the text below (classic Caesar). Submit the original phrase to claim the flag.",
            StageKind::Caesar { shift: S1_SHIFT },
        ),
        build(
            StageId::S2,
            "Stage 2 · XOR Hex",
            Difficulty::Medium,
            "#F78166",
            "Given a hex string produced by XOR with a single-byte key, recover the original phrase.",
            StageKind::Xor { key: S2_KEY },
        ),
        build(
            StageId::S3,
            "Stage 3 · Vigenère",
            Difficulty::Hard,
            "#FF0040",
            "Vigenère cipher with an unknown keyword. Decode and submit the original phrase.",
            StageKind::Vigenere {
                keyword: S3_KEYWORD,
            },
        ),
    ]
});

fn build(
    id: StageId,
    title: &'static str,
    difficulty: Difficulty,
    color: &'static str,
    prompt: &'static str,
    kind: StageKind,
) -> Stage {
    let plaintext = plaintext(id);
    let payload = kind.encode(plaintext).unwrap_or_else(|e| {
        log::error!("Failed to build payload for {}: {}", id.as_str(), e);
        String::new()
    });
    Stage {
        id,
        title,
        difficulty,
        color,
        prompt,
        kind,
        plaintext,
        payload,
    }
}

/// All stages in unlock order
pub fn catalog() -> &'static [Stage; 3] {
    &CATALOG
}

/// Look up a stage
pub fn stage(id: StageId) -> &'static Stage {
    match id {
        StageId::S1 => &CATALOG[0],
        StageId::S2 => &CATALOG[1],
        StageId::S3 => &CATALOG[2],
    }
}

/// Expected answer for a stage
pub fn plaintext(id: StageId) -> &'static str {
    match id {
        StageId::S1 => S1_PLAINTEXT,
        StageId::S2 => S2_PLAINTEXT,
        StageId::S3 => S3_PLAINTEXT,
    }
}

/// Check a raw answer. Comparison ignores case and surrounding whitespace
/// only; inner spacing and punctuation must match.
pub fn verify(id: StageId, answer: &str) -> bool {
    answer.trim().to_uppercase() == plaintext(id).to_uppercase()
}

/// Flag awarded for solving a stage
pub fn reveal(id: StageId) -> &'static str {
    match id {
        StageId::S1 => FLAG_S1,
        StageId::S2 => FLAG_S2,
        StageId::S3 => FLAG_S3,
    }
}

/// Breadcrumb pointing at the key material
pub fn hint(id: StageId) -> &'static str {
    match id {
        StageId::S1 => "Caesar shiftKey=3",
        StageId::S2 => "XOR keyChar='K' (0x4b)",
        StageId::S3 => "Vigenere keyWord=\"MATRIX\"",
    }
}
