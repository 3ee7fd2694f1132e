//! FlatLaf jar placement and the `launch.properties` switch that makes it
//! Swing's system look-and-feel.

mod checksum;
mod fetch;

#[cfg(test)]
mod tests;

pub use checksum::{parse_sidecar, sha256_hex, verify};
pub use fetch::{ArtifactSource, HttpSource};

use std::path::{Path, PathBuf};

use gdark_common::{PatchError, PlatformError, Report, Warning};
use gdark_config::backup::{
    append_line_if_absent, backup_path, backup_then_mutate, remove_lines, restore, write_atomic,
    BackupOutcome, RestoreOutcome,
};
use gdark_config::schema::FlatLafConfig;
use tracing::{debug, info, warn};

/// Lines in `launch.properties` mentioning this are ours.
pub const FLATLAF_MARKER: &str = "flatlaf";

/// `<install>/Ghidra/patch/flatlaf-<version>.jar`.
pub fn jar_path(install: &Path, config: &FlatLafConfig) -> PathBuf {
    install.join("Ghidra").join("patch").join(config.jar_name())
}

/// `<install>/support/launch.properties`.
pub fn launch_properties_path(install: &Path) -> PathBuf {
    install.join("support").join("launch.properties")
}

/// JVM argument line selecting `laf_class` as the system look-and-feel.
pub fn vmargs_line(config: &FlatLafConfig) -> String {
    format!("VMARGS=-Dswing.systemlaf={}", config.laf_class)
}

fn is_vmargs_line(line: &str) -> bool {
    line.trim_start().starts_with("VMARGS=-Dswing.systemlaf=")
        && line.to_ascii_lowercase().contains(FLATLAF_MARKER)
}

/// Expected digest for the jar: pinned in settings or read from the mirror.
fn expected_digest(config: &FlatLafConfig, source: &dyn ArtifactSource) -> Result<String, PlatformError> {
    if let Some(pinned) = config.pinned_sha256() {
        return Ok(pinned.to_ascii_lowercase());
    }
    let url = format!("{}.sha256", config.jar_url());
    let body = source.fetch(&url)?;
    parse_sidecar(&String::from_utf8_lossy(&body))
        .ok_or_else(|| PlatformError::Network(format!("malformed checksum at {url}")))
}

/// Download, verify, and place the jar unless it is already present.
///
/// Nothing is written when the digest does not match.
pub fn install_jar(
    install: &Path,
    config: &FlatLafConfig,
    source: &dyn ArtifactSource,
) -> gdark_common::Result<PathBuf> {
    let jar = jar_path(install, config);
    if jar.exists() {
        debug!("FlatLaf already downloaded: {}", jar.display());
        return Ok(jar);
    }

    debug!("downloading FlatLaf {}", config.version);
    let bytes = source.fetch(&config.jar_url())?;
    let expected = expected_digest(config, source)?;
    verify(&jar, &bytes, &expected)?;

    if let Some(dir) = jar.parent() {
        std::fs::create_dir_all(dir).map_err(|e| PatchError::io(dir, e))?;
    }
    write_atomic(&jar, &bytes)?;
    info!("installed {}", jar.display());
    Ok(jar)
}

/// Install the jar and select it in `launch.properties`.
pub fn install(
    install_dir: &Path,
    config: &FlatLafConfig,
    source: &dyn ArtifactSource,
) -> gdark_common::Result<Report> {
    let mut report = Report::new();
    install_jar(install_dir, config, source)?;

    let launch = launch_properties_path(install_dir);
    let line = vmargs_line(config);
    let outcome = backup_then_mutate(&launch, |p| {
        if append_line_if_absent(p, FLATLAF_MARKER, &line)? {
            debug!("setting FlatLaf as system L&f");
        }
        Ok(())
    })?;
    if outcome == BackupOutcome::Kept {
        report.push(Warning::BackupKept(backup_path(&launch)));
    }
    Ok(report)
}

/// Delete the jar and undo the `launch.properties` change.
///
/// A `launch.properties.bak` is restored when present; otherwise only the
/// FlatLaf `VMARGS` line is dropped.
pub fn remove(install: &Path, config: &FlatLafConfig) -> Result<Report, PatchError> {
    let mut report = Report::new();

    let jar = jar_path(install, config);
    match std::fs::remove_file(&jar) {
        Ok(()) => debug!("removed {}", jar.display()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            warn!("could not remove {}", jar.display());
            report.push(Warning::MissingArtifact(jar));
        }
        Err(e) => return Err(PatchError::io(&jar, e)),
    }

    let launch = launch_properties_path(install);
    match restore(&launch)? {
        RestoreOutcome::Restored => debug!("restored {}", launch.display()),
        RestoreOutcome::NoBackup => {
            let removed = remove_lines(&launch, is_vmargs_line)?;
            debug!(removed, "dropped FlatLaf lines from {}", launch.display());
        }
        RestoreOutcome::Nothing => warn!("{} not found", launch.display()),
    }
    Ok(report)
}
