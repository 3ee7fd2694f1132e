//! Backup-before-write and restore-from-backup for single files.
//!
//! A file `F` is backed up to `F.bak`. An existing `F.bak` is never
//! overwritten, so the content from before the first install stays
//! recoverable however many installs follow.

mod lines;


pub use lines::{append_line_if_absent, patch_line_file, remove_lines};

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use gdark_common::PatchError;
use tracing::{debug, warn};

/// What [`backup`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackupOutcome {
    Created,
    /// A backup from an earlier run was already present and left alone.
    Kept,
}

/// What [`restore`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestoreOutcome {
    Restored,
    /// The file exists but has no backup; it was left untouched.
    NoBackup,
    /// Neither the file nor a backup exists.
    Nothing,
}

/// `path` with `suffix` appended to its full file name.
fn with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut name: OsString = path.file_name().map(OsString::from).unwrap_or_default();
    name.push(suffix);
    path.with_file_name(name)
}

/// `F` -> `F.bak`.
pub fn backup_path(path: &Path) -> PathBuf {
    with_suffix(path, ".bak")
}

/// Write `contents` to `path` through a sibling `.tmp` file and a rename,
/// so readers never see a partially written file.
pub fn write_atomic(path: &Path, contents: &[u8]) -> Result<(), PatchError> {
    let tmp_path = with_suffix(path, ".tmp");
    std::fs::write(&tmp_path, contents).map_err(|e| PatchError::io(&tmp_path, e))?;

    if let Ok(meta) = std::fs::metadata(path) {
        if let Err(e) = std::fs::set_permissions(&tmp_path, meta.permissions()) {
            debug!(path = %tmp_path.display(), "could not copy permissions: {e}");
        }
    }

    if let Err(e) = std::fs::rename(&tmp_path, path) {
        // Rename failed; fall back to a direct write (Windows compat)
        warn!("atomic rename failed ({e}), falling back to direct write");
        let _ = std::fs::remove_file(&tmp_path);
        std::fs::write(path, contents).map_err(|e| PatchError::io(path, e))?;
    }
    Ok(())
}

/// Copy `path` to `path.bak` unless a backup already exists.
pub fn backup(path: &Path) -> Result<BackupOutcome, PatchError> {
    if !path.exists() {
        return Err(PatchError::NotFound(path.to_path_buf()));
    }

    let bak = backup_path(path);
    if bak.exists() {
        debug!(backup = %bak.display(), "backup already present, keeping it");
        return Ok(BackupOutcome::Kept);
    }

    let tmp = with_suffix(&bak, ".tmp");
    std::fs::copy(path, &tmp).map_err(|e| PatchError::io(path, e))?;
    std::fs::rename(&tmp, &bak).map_err(|e| PatchError::io(&bak, e))?;
    debug!(backup = %bak.display(), "backed up {}", path.display());
    Ok(BackupOutcome::Created)
}

/// Back `path` up, then let `mutator` rewrite it in place.
///
/// `mutator` only runs once the backup exists. A failing `mutator`
/// leaves the backup on disk for manual recovery.
pub fn backup_then_mutate<F>(path: &Path, mutator: F) -> Result<BackupOutcome, PatchError>
where
    F: FnOnce(&Path) -> Result<(), PatchError>,
{
    let outcome = backup(path)?;
    if let Err(e) = mutator(path) {
        warn!(
            "failed to rewrite {}; original kept at {}",
            path.display(),
            backup_path(path).display()
        );
        return Err(e);
    }
    Ok(outcome)
}

/// Move `path.bak` back onto `path`.
///
/// Without a backup the file is never touched.
pub fn restore(path: &Path) -> Result<RestoreOutcome, PatchError> {
    let bak = backup_path(path);
    if !bak.exists() {
        return Ok(if path.exists() {
            RestoreOutcome::NoBackup
        } else {
            RestoreOutcome::Nothing
        });
    }

    match std::fs::remove_file(path) {
        Ok(()) => {}
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            warn!("{} not found, restoring backup anyway", path.display());
        }
        Err(e) => return Err(PatchError::io(path, e)),
    }
    std::fs::rename(&bak, path).map_err(|e| PatchError::io(&bak, e))?;
    debug!("restored {}", path.display());
    Ok(RestoreOutcome::Restored)
}
