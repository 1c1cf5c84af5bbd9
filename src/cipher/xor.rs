//! Single-byte XOR rendered as lowercase hex

use std::fmt::Write;

use super::CipherError;

/// XOR each character code with `key` and hex-encode the bytes, no separator.
///
/// Only the low byte of each code is kept, so the output is always two hex
/// digits per input character.
pub fn xor_encode_hex(plaintext: &str, key: char) -> String {
    let k = key as u32;
    let mut out = String::with_capacity(plaintext.len() * 2);
    for ch in plaintext.chars() {
        let byte = ((ch as u32 ^ k) & 0xff) as u8;
        let _ = write!(out, "{byte:02x}");
    }
    out
}

/// Split `hex` into two-digit bytes, XOR each with `key`, and rebuild the text.
///
/// A trailing single digit is parsed on its own. Each byte maps back to the
/// character with that code (U+0000..=U+00FF).
pub fn xor_decode_hex(hex: &str, key: char) -> Result<String, CipherError> {
    let k = (key as u32 & 0xff) as u8;
    let digits: Vec<char> = hex.chars().collect();
    let mut out = String::with_capacity(digits.len() / 2);
    for (i, pair) in digits.chunks(2).enumerate() {
        let chunk: String = pair.iter().collect();
        let byte = u8::from_str_radix(&chunk, 16).map_err(|_| CipherError::InvalidHex {
            chunk: chunk.clone(),
            offset: i * 2,
        })?;
        out.push((byte ^ k) as char);
    }
    Ok(out)
}
