//! Settings validation.
//!
//! Collects every problem into a single `ConfigError` so the user can fix
//! them all in one pass.

use crate::schema::DarkConfig;
use gdark_common::ConfigError;
use regex::Regex;
use std::sync::LazyLock;

static HEX6_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9a-fA-F]{6}$").unwrap());
static SHA256_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9a-fA-F]{64}$").unwrap());

/// Push an error if `value` is outside `[min, max]`.
fn validate_range(errors: &mut Vec<String>, name: &str, value: u32, min: u32, max: u32) {
    if value < min || value > max {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

/// Run all validations on the settings, collecting all errors.
pub fn validate(config: &DarkConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    for (key, value) in config.palette.entries() {
        if !HEX6_RE.is_match(value) {
            errors.push(format!("palette.{key} = {value:?} is not RRGGBB"));
        }
    }

    validate_range(&mut errors, "font.size", config.font.size, 1, 200);
    if config.font.family.trim().is_empty() {
        errors.push("font.family must not be empty".into());
    }

    if !config.tools.files.contains(&config.tools.primary) {
        errors.push(format!(
            "tools.primary = {:?} is not listed in tools.files",
            config.tools.primary
        ));
    }

    if let Some(digest) = config.flatlaf.pinned_sha256() {
        if !SHA256_RE.is_match(digest) {
            errors.push("flatlaf.sha256 must be 64 hex digits".into());
        }
    }
    if config.flatlaf.version.trim().is_empty() {
        errors.push("flatlaf.version must not be empty".into());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
