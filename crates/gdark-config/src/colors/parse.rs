//! Internal encoding helpers. Not part of the public API.

use gdark_common::Color;
use regex::Regex;
use std::sync::LazyLock;

/// Exactly six hex digits, no prefix.
pub(crate) static RGB_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9a-fA-F]{6}$").unwrap());

/// `Font.BOLD | Font.ITALIC`.
pub(super) const FONT_STYLE_MASK: i32 = 0b11;

pub(super) fn parse_rgb(s: &str) -> Option<Color> {
    if !RGB_RE.is_match(s) {
        return None;
    }
    Color::from_hex(s)
}

/// Percent opacity to an alpha byte, `round(255 * pct / 100)`.
pub(super) fn alpha_byte(alpha_percent: i32) -> u8 {
    let clamped = alpha_percent.clamp(0, 100);
    (255.0 * f64::from(clamped) / 100.0).round() as u8
}
