//! Caesar shift cipher

/// Shift a single ASCII letter forward by `shift` (already reduced to 0..26)
#[inline]
fn rotate(ch: char, shift: u8) -> char {
    let base = match ch {
        'a'..='z' => b'a',
        'A'..='Z' => b'A',
        _ => return ch,
    };
    let idx = ch as u8 - base;
    ((idx + shift) % 26 + base) as char
}

/// Decode by shifting each letter backward by `shift`, preserving case.
///
/// Non-letters pass through unchanged. Negative shifts move forward.
pub fn caesar_decode(text: &str, shift: i32) -> String {
    // Reduce before negating; `-i32::MIN` overflows
    let forward = ((26 - shift.rem_euclid(26)) % 26) as u8;
    text.chars().map(|ch| rotate(ch, forward)).collect()
}

/// Encode by shifting each letter forward by `shift`
pub fn caesar_encode(text: &str, shift: i32) -> String {
    let forward = shift.rem_euclid(26) as u8;
    text.chars().map(|ch| rotate(ch, forward)).collect()
}
