//! Encoding of colours, fonts and key strokes into Ghidra option values.
//!
//! Ghidra stores a colour as the signed 32-bit ARGB integer returned by
//! `java.awt.Color.getRGB()`. Input colours are `RRGGBB` hex plus an
//! opacity percentage.

mod parse;

#[cfg(test)]
mod tests;

use gdark_common::{PatchError, WrappedOption};

use parse::{alpha_byte, parse_rgb, FONT_STYLE_MASK};

/// Encode `RRGGBB` at `alpha_percent` opacity as a wrapped colour.
///
/// The percentage is clamped to `[0, 100]` before conversion.
pub fn encode_color(hex_color: &str, alpha_percent: i32) -> Result<WrappedOption, PatchError> {
    let color = parse_rgb(hex_color)
        .ok_or_else(|| PatchError::Encoding(format!("invalid RRGGBB color: {hex_color:?}")))?;
    let packed = color.with_alpha(alpha_byte(alpha_percent)).to_packed();
    Ok(WrappedOption::color(packed))
}

/// Encode a font. `style` takes the `java.awt.Font` flags (bold = 1,
/// italic = 2).
pub fn encode_font(size: i32, style: i32, family: &str) -> Result<WrappedOption, PatchError> {
    if size <= 0 {
        return Err(PatchError::Encoding(format!(
            "font size must be positive, got {size}"
        )));
    }
    if style & !FONT_STYLE_MASK != 0 {
        return Err(PatchError::Encoding(format!("unknown font style flags {style:#x}")));
    }
    if family.trim().is_empty() {
        return Err(PatchError::Encoding("font family must not be empty".into()));
    }
    Ok(WrappedOption::font(size, style, family))
}

/// Encode a key stroke from a `KeyEvent` key code and modifier mask.
pub fn encode_keystroke(key_code: i32, modifiers: i32) -> Result<WrappedOption, PatchError> {
    if key_code < 0 || modifiers < 0 {
        return Err(PatchError::Encoding(format!(
            "invalid key stroke {key_code}/{modifiers}"
        )));
    }
    Ok(WrappedOption::key_stroke(key_code, modifiers))
}
