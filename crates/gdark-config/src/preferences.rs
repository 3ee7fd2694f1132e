//! Install and remove the dark preferences in a Ghidra config directory.
//!
//! Policy: a missing tool config is reported as a warning and skipped; a
//! missing `preferences` file, or any parse/path error in a tool config,
//! aborts the whole operation.

use std::path::{Path, PathBuf};

use gdark_common::{PatchError, Report, Warning};
use tracing::{debug, error, info, warn};

use crate::backup::{
    append_line_if_absent, backup_then_mutate, patch_line_file, restore, BackupOutcome,
    RestoreOutcome,
};
use crate::catalog::Catalog;
use crate::schema::ToolsConfig;
use crate::tcd::patch_document;

/// Ghidra's `key=value` user settings file inside the config directory.
pub const PREFERENCES_FILE: &str = "preferences";

pub const LOOK_AND_FEEL_KEY: &str = "LastLookAndFeel";

/// Look-and-feel that defers to `swing.systemlaf`, i.e. FlatLaf.
pub const SYSTEM_LOOK_AND_FEEL: &str = "System";

pub fn preferences_path(config_path: &Path) -> PathBuf {
    config_path.join(PREFERENCES_FILE)
}

pub fn tool_path(config_path: &Path, file: &str) -> PathBuf {
    config_path.join("tools").join(file)
}

/// True when Ghidra has never initialised `config_path`.
pub fn is_first_run(config_path: &Path) -> bool {
    !preferences_path(config_path).exists()
}

fn is_look_and_feel_line(line: &str) -> bool {
    line.split_once('=')
        .is_some_and(|(key, _)| key.trim() == LOOK_AND_FEEL_KEY)
}

/// Point `LastLookAndFeel` at `value`, appending the key when absent.
pub fn set_look_and_feel(path: &Path, value: &str) -> Result<(), PatchError> {
    let replaced = patch_line_file(path, is_look_and_feel_line, |line| {
        let key = line.split_once('=').map_or(line, |(key, _)| key);
        format!("{key}={value}")
    })?;
    if replaced == 0 {
        append_line_if_absent(
            path,
            &format!("{LOOK_AND_FEEL_KEY}="),
            &format!("{LOOK_AND_FEEL_KEY}={value}"),
        )?;
    }
    debug!(path = %path.display(), value, "set look and feel");
    Ok(())
}

fn note_backup(report: &mut Report, path: &Path, outcome: BackupOutcome) {
    if outcome == BackupOutcome::Kept {
        report.push(Warning::BackupKept(crate::backup::backup_path(path)));
    }
}

/// Back up and patch `preferences` and every configured tool config.
pub fn install_dark_preferences(
    config_path: &Path,
    catalog: &Catalog,
    tools: &ToolsConfig,
) -> Result<Report, PatchError> {
    let mut report = Report::new();

    let preferences = preferences_path(config_path);
    if !preferences.exists() {
        error!("Please open Ghidra at least once to fully install dark mode.");
        return Err(PatchError::NotFound(preferences));
    }

    debug!("checking for look and feel configuration");
    let outcome = backup_then_mutate(&preferences, |p| {
        set_look_and_feel(p, SYSTEM_LOOK_AND_FEEL)
    })?;
    note_backup(&mut report, &preferences, outcome);

    debug!("injecting preferences in tool configs");
    for file in &tools.files {
        let path = tool_path(config_path, file);
        if !path.exists() {
            let primary = tools.is_primary(file);
            if primary {
                warn!("Please open Ghidra at least once to fully install dark mode.");
            }
            report.push(Warning::MissingToolConfig { path, primary });
            continue;
        }

        debug!("backing {} up", path.display());
        let outcome = backup_then_mutate(&path, |p| patch_document(p, catalog))?;
        note_backup(&mut report, &path, outcome);
    }

    info!(
        "dark preferences installed ({} warnings)",
        report.len()
    );
    Ok(report)
}

fn restore_into(report: &mut Report, path: PathBuf) -> Result<(), PatchError> {
    match restore(&path)? {
        RestoreOutcome::Restored => debug!("restored {}", path.display()),
        RestoreOutcome::NoBackup => {
            warn!("no backup of {} found, cannot restore", path.display());
            report.push(Warning::NoBackup(path));
        }
        RestoreOutcome::Nothing => {}
    }
    Ok(())
}

/// Restore every tool config and `preferences` from its backup.
pub fn remove_dark_preferences(config_path: &Path, tools: &ToolsConfig) -> Result<Report, PatchError> {
    let mut report = Report::new();
    for file in &tools.files {
        restore_into(&mut report, tool_path(config_path, file))?;
    }
    restore_into(&mut report, preferences_path(config_path))?;

    info!("dark preferences removed ({} warnings)", report.len());
    Ok(report)
}
