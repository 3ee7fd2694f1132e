//! Line-oriented edits for `key=value` style files.
//!
//! Line terminators (`\n` or `\r\n`) and a missing final newline are
//! preserved. Every rewrite goes through [`write_atomic`].

use std::path::Path;

use gdark_common::PatchError;

use super::write_atomic;

fn read(path: &Path) -> Result<String, PatchError> {
    std::fs::read_to_string(path).map_err(|e| PatchError::io(path, e))
}

fn split_terminator(line: &str) -> (&str, &str) {
    if let Some(body) = line.strip_suffix("\r\n") {
        (body, "\r\n")
    } else if let Some(body) = line.strip_suffix('\n') {
        (body, "\n")
    } else {
        (line, "")
    }
}

/// Rewrite `path` line by line. `edit` returns `None` to keep a line,
/// `Some(None)` to drop it, or `Some(Some(text))` to replace its body.
/// Returns how many lines were edited.
fn rewrite<F>(path: &Path, mut edit: F) -> Result<usize, PatchError>
where
    F: FnMut(&str) -> Option<Option<String>>,
{
    let content = read(path)?;
    let mut out = String::with_capacity(content.len());
    let mut edited = 0;

    for line in content.split_inclusive('\n') {
        let (body, terminator) = split_terminator(line);
        match edit(body) {
            None => out.push_str(line),
            Some(None) => edited += 1,
            Some(Some(replacement)) => {
                edited += 1;
                out.push_str(&replacement);
                out.push_str(terminator);
            }
        }
    }

    if edited > 0 {
        write_atomic(path, out.as_bytes())?;
    }
    Ok(edited)
}

/// Replace every line matching `predicate` with `transform(line)`.
///
/// Lines are passed without their terminator. Returns the number of
/// lines replaced; the file is left untouched when none match.
pub fn patch_line_file<P, T>(path: &Path, mut predicate: P, mut transform: T) -> Result<usize, PatchError>
where
    P: FnMut(&str) -> bool,
    T: FnMut(&str) -> String,
{
    rewrite(path, |line| predicate(line).then(|| Some(transform(line))))
}

/// Drop every line matching `predicate`, terminator included.
pub fn remove_lines<P>(path: &Path, mut predicate: P) -> Result<usize, PatchError>
where
    P: FnMut(&str) -> bool,
{
    rewrite(path, |line| predicate(line).then_some(None))
}

/// Append `line` unless some line already contains `marker`.
///
/// A newline is inserted first when the file does not end in one.
/// Returns `true` if the line was appended.
pub fn append_line_if_absent(path: &Path, marker: &str, line: &str) -> Result<bool, PatchError> {
    let content = read(path)?;
    if content.lines().any(|l| l.contains(marker)) {
        return Ok(false);
    }

    let newline = if content.contains("\r\n") { "\r\n" } else { "\n" };
    let mut out = content;
    if !out.is_empty() && !out.ends_with('\n') {
        out.push_str(newline);
    }
    out.push_str(line);
    out.push_str(newline);
    write_atomic(path, out.as_bytes())?;
    Ok(true)
}
