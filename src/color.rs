//! Hex color helpers for the color field's swatch.
//!
//! A color field shows the same underlying string twice: as a swatch and as a
//! raw text input. Native swatches only accept `#rrggbb`, so the swatch view is
//! the normalized form of the raw string. The raw view is never rewritten.

#[cfg(test)]
#[path = "color_test.rs"]
mod color_test;

fn channel(hex: &str) -> Option<u8> {
    match u8::from_str_radix(hex, 16) {
        Ok(v) => Some(v),
        Err(_) => None,
    }
}

/// Parse `#RGB` or `#RRGGBB` values into RGB channels.
#[must_use]
pub fn parse_hex_rgb(raw: &str) -> Option<(u8, u8, u8)> {
    let hex = raw.trim().strip_prefix('#')?;
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    match hex.len() {
        3 => Some((
            channel(&hex[0..1].repeat(2))?,
            channel(&hex[1..2].repeat(2))?,
            channel(&hex[2..3].repeat(2))?,
        )),
        6 => Some((channel(&hex[0..2])?, channel(&hex[2..4])?, channel(&hex[4..6])?)),
        _ => None,
    }
}

/// Whether `raw` is a hex color the swatch can display.
#[must_use]
pub fn is_hex_color(raw: &str) -> bool {
    parse_hex_rgb(raw).is_some()
}

/// Normalize a color to canonical lowercase `#rrggbb`, or `fallback` when
/// `value` is not a hex color (`transparent`, `blue`, ...).
#[must_use]
pub fn normalize_hex_color(value: &str, fallback: &str) -> String {
    match parse_hex_rgb(value).or_else(|| parse_hex_rgb(fallback)) {
        Some((r, g, b)) => format!("#{r:02x}{g:02x}{b:02x}"),
        None => "#000000".to_owned(),
    }
}
