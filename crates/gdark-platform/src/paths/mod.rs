//! Locating a Ghidra install, its version, and the user's config directory.

mod resolve;

pub use resolve::{home_for, is_newer, version_numbers};

use std::path::{Path, PathBuf};

use gdark_common::PlatformError;
use tracing::debug;

/// Launcher script whose location identifies the install directory.
pub const GHIDRA_RUN: &str = "ghidraRun";

/// Last version whose config directory used the `.ghidra-<v>` layout.
const LEGACY_LAYOUT_UNTIL: [u64; 3] = [9, 0, 4];

/// Resolve `ghidraRun` on `PATH` and return the directory that holds it.
pub fn install_path() -> Result<PathBuf, PlatformError> {
    let run = which::which(GHIDRA_RUN).map_err(|e| {
        PlatformError::PathError(format!(
            "could not find Ghidra installation ({GHIDRA_RUN}: {e}), specify with --path"
        ))
    })?;
    let run = run
        .canonicalize()
        .map_err(|e| PlatformError::PathError(format!("{}: {e}", run.display())))?;
    let install = run
        .parent()
        .map(Path::to_path_buf)
        .ok_or_else(|| PlatformError::PathError(format!("{} has no parent", run.display())))?;
    debug!("using Ghidra install path {}", install.display());
    Ok(install)
}

/// `<install>/Ghidra/application.properties`.
pub fn application_properties(install: &Path) -> PathBuf {
    install.join("Ghidra").join("application.properties")
}

/// Read `application.version` from the install's properties file.
pub fn version(install: &Path) -> Result<String, PlatformError> {
    let path = application_properties(install);
    let content = std::fs::read_to_string(&path)
        .map_err(|e| PlatformError::PathError(format!("failed to read {}: {e}", path.display())))?;
    let version = content
        .lines()
        .find(|line| line.contains("application.version="))
        .and_then(|line| line.rsplit('=').next())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| {
            PlatformError::PathError(format!("no application.version in {}", path.display()))
        })?;
    debug!("found Ghidra v{version}");
    Ok(version.to_string())
}

/// Ghidra's per-user settings directory for `version`.
///
/// `user` selects another account's home instead of the current one.
pub fn config_path(version: &str, user: Option<&str>) -> Result<PathBuf, PlatformError> {
    let home = home_for(user)?;
    debug!("using home {}", home.display());

    let xdg_base = match user {
        None => dirs::config_dir(),
        Some(_) => Some(home.join(".config")),
    };
    let path = config_path_in(&home, xdg_base.as_deref(), version);
    debug!("using Ghidra config path {}", path.display());
    Ok(path)
}

/// [`config_path`] against explicit home and XDG config directories.
pub fn config_path_in(home: &Path, xdg_base: Option<&Path>, version: &str) -> PathBuf {
    if let Some(base) = xdg_base {
        let xdg = base.join("ghidra").join(format!("ghidra_{version}_PUBLIC"));
        if xdg.is_dir() {
            return xdg;
        }
    }

    let dot_ghidra = home.join(".ghidra");
    if is_newer(&version_numbers(version), &LEGACY_LAYOUT_UNTIL) {
        let public = dot_ghidra.join(format!(".ghidra_{version}_PUBLIC"));
        if public.exists() {
            return public;
        }
        // source builds and some distro packages
        dot_ghidra.join(format!(".ghidra_{version}_DEV"))
    } else {
        dot_ghidra.join(format!(".ghidra-{version}"))
    }
}
