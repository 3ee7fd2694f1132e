use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use gdark_common::PlatformError;
use regex::Regex;

static NUMBER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]+").unwrap());

/// Numeric components of a version string, e.g. `10.0-BETA` -> `[10, 0]`.
pub fn version_numbers(version: &str) -> Vec<u64> {
    NUMBER_RE
        .find_iter(version)
        .filter_map(|m| m.as_str().parse().ok())
        .collect()
}

/// Returns true if `a` > `b`, missing components counting as zero.
pub fn is_newer(a: &[u64], b: &[u64]) -> bool {
    for i in 0..a.len().max(b.len()) {
        let a_part = a.get(i).copied().unwrap_or(0);
        let b_part = b.get(i).copied().unwrap_or(0);
        if a_part != b_part {
            return a_part > b_part;
        }
    }
    false
}

/// Home directory of `user`, or of the current user when `None`.
///
/// Other users are assumed to live next to the current user, e.g.
/// `/home/alice` -> `/home/bob`.
pub fn home_for(user: Option<&str>) -> Result<PathBuf, PlatformError> {
    let home = dirs::home_dir()
        .ok_or_else(|| PlatformError::PathError("could not determine home directory".into()))?;
    match user {
        None => Ok(home),
        Some(user) => sibling_home(&home, user),
    }
}

fn sibling_home(home: &Path, user: &str) -> Result<PathBuf, PlatformError> {
    if user.is_empty() || user.contains(|c: char| c == '/' || c == '\\') || user == ".." {
        return Err(PlatformError::PathError(format!("invalid user name '{user}'")));
    }
    let parent = home.parent().ok_or_else(|| {
        PlatformError::PathError(format!("{} has no parent directory", home.display()))
    })?;
    Ok(parent.join(user))
}
