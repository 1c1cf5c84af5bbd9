//! Matrix green / cyber red palette

pub const MATRIX_GREEN: &str = "#00FF41";
pub const CYBER_RED: &str = "#FF0040";
pub const ACCENT_ORANGE: &str = "#F78166";
pub const BACKGROUND: &str = "#0D1117";
pub const PANEL: &str = "#161B22";
pub const BORDER: &str = "#1F2833";
pub const TEXT: &str = "#C9D1D9";

/// Convert `#RRGGBB` to an ANSI 24-bit foreground escape
pub fn ansi_fg(hex: &str) -> String {
    match parse_hex(hex) {
        Some((r, g, b)) => format!("\x1b[38;2;{r};{g};{b}m"),
        None => String::new(),
    }
}

pub const ANSI_RESET: &str = "\x1b[0m";

fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}
