//! ANSI formatting utilities used by the terminal renderer.

use unicode_width::UnicodeWidthStr;

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

pub fn dim(s: &str) -> String {
    format!("\x1b[2m{}\x1b[0m", s)
}

pub fn strike(s: &str) -> String {
    format!("\x1b[9m{}\x1b[0m", s)
}

/// White-on-blue badge used for lesson status labels.
pub fn badge(s: &str) -> String {
    format!("\x1b[44;97m {} \x1b[0m", s)
}

/// Red badge variant for canceled lessons.
pub fn badge_canceled(s: &str) -> String {
    format!("\x1b[41;97m {} \x1b[0m", s)
}

/// Pad to `width` display columns (unicode-aware, unlike format! padding).
pub fn pad_right(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    if w >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - w))
    }
}

/// Vertical color bar from a "#RRGGBB" hex color (24-bit ANSI).
/// Falls back to an uncolored bar when the color is missing or malformed.
pub fn color_bar(hex: &str) -> String {
    match parse_hex_color(hex) {
        Some((r, g, b)) => format!("\x1b[38;2;{};{};{}m▍\x1b[0m", r, g, b),
        None => "▍".to_string(),
    }
}

fn parse_hex_color(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.strip_prefix('#')?;
    // byte-length check alone is not enough: a multibyte char would make
    // the slices below panic on a char boundary
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(hex.get(0..2)?, 16).ok()?;
    let g = u8::from_str_radix(hex.get(2..4)?, 16).ok()?;
    let b = u8::from_str_radix(hex.get(4..6)?, 16).ok()?;
    Some((r, g, b))
}
