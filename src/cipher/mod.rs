//! Classical cipher transforms
//!
//! All transforms are pure functions over `&str`. Only ASCII letters are
//! shifted by Caesar and Vigenère; XOR works on character codes below 256.

pub mod caesar;
pub mod vigenere;
pub mod xor;

pub use caesar::{caesar_decode, caesar_encode};
pub use vigenere::{vigenere_decode, vigenere_encode};
pub use xor::{xor_decode_hex, xor_encode_hex};

/// Errors from decoding or keying a cipher
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CipherError {
    #[error("invalid hex byte {chunk:?} at offset {offset}")]
    InvalidHex { chunk: String, offset: usize },

    #[error("keyword must contain at least one letter and only letters: {0:?}")]
    InvalidKeyword(String),
}
