//! Vigenère polyalphabetic cipher over A-Z

use super::CipherError;

/// Upper-case the keyword and turn it into shift amounts
fn key_shifts(keyword: &str) -> Result<Vec<u8>, CipherError> {
    let upper = keyword.to_ascii_uppercase();
    if upper.is_empty() || !upper.bytes().all(|b| b.is_ascii_uppercase()) {
        return Err(CipherError::InvalidKeyword(keyword.to_string()));
    }
    Ok(upper.bytes().map(|b| b - b'A').collect())
}

/// Upper-case and keep only A-Z
fn letters(text: &str) -> impl Iterator<Item = u8> + '_ {
    text.bytes()
        .map(|b| b.to_ascii_uppercase())
        .filter(u8::is_ascii_uppercase)
        .map(|b| b - b'A')
}

/// Encode `plaintext`. Everything but letters is dropped, so the
/// ciphertext carries no spaces or punctuation.
pub fn vigenere_encode(plaintext: &str, keyword: &str) -> Result<String, CipherError> {
    let shifts = key_shifts(keyword)?;
    Ok(letters(plaintext)
        .enumerate()
        .map(|(i, p)| ((p + shifts[i % shifts.len()]) % 26 + b'A') as char)
        .collect())
}

/// Decode `ciphertext`, the modular inverse of [`vigenere_encode`]
pub fn vigenere_decode(ciphertext: &str, keyword: &str) -> Result<String, CipherError> {
    let shifts = key_shifts(keyword)?;
    Ok(letters(ciphertext)
        .enumerate()
        .map(|(i, c)| ((c + 26 - shifts[i % shifts.len()]) % 26 + b'A') as char)
        .collect())
}
