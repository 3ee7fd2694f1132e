//! Install and remove orchestration.

use std::path::{Path, PathBuf};

use gdark_common::{DarkError, PatchError, PlatformError, Report, Severity, Warning};
use gdark_config::preferences::{is_first_run, preferences_path};
use gdark_config::{install_dark_preferences, remove_dark_preferences, Catalog, DarkConfig};
use gdark_platform::{flatlaf, paths, ArtifactSource};
use tracing::{debug, error, info, warn, Level};

/// What to do, and where.
#[derive(Debug, Clone, Default)]
pub struct Options {
    pub install_path: Option<PathBuf>,
    pub user: Option<String>,
    pub remove: bool,
}

/// Resolved install and user config directories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub install: PathBuf,
    pub config: PathBuf,
}

/// Refuse to touch anything while Ghidra may rewrite the same files.
pub fn ensure_not_running<F>(check: F) -> Result<(), DarkError>
where
    F: FnOnce() -> Result<bool, PlatformError>,
{
    if check()? {
        error!("Please close any running Ghidra instances.");
        return Err(DarkError::GhidraRunning);
    }
    Ok(())
}

pub fn resolve_target(options: &Options) -> Result<Target, DarkError> {
    let install = match &options.install_path {
        Some(path) => path.clone(),
        None => paths::install_path()?,
    };
    let version = paths::version(&install)?;
    let config = paths::config_path(&version, options.user.as_deref())?;
    Ok(Target { install, config })
}

/// Full run against the local machine.
pub fn run(
    options: &Options,
    config: &DarkConfig,
    source: &dyn ArtifactSource,
) -> Result<Report, DarkError> {
    ensure_not_running(gdark_platform::is_running)?;
    let target = resolve_target(options)?;

    if options.remove {
        remove_at(&target, config)
    } else {
        install_at(&target, config, source)
    }
}

/// Install FlatLaf and the dark preferences into `target`.
///
/// Fails before any download when Ghidra has never been opened for this
/// config directory.
pub fn install_at(
    target: &Target,
    config: &DarkConfig,
    source: &dyn ArtifactSource,
) -> Result<Report, DarkError> {
    check_first_run(&target.config)?;
    let catalog = Catalog::dark(&config.palette, &config.font)?;

    info!("installing FlatLaf");
    let mut report = flatlaf::install(&target.install, &config.flatlaf, source)?;

    info!("installing dark preferences");
    report.merge(install_dark_preferences(&target.config, &catalog, &config.tools)?);
    Ok(report)
}

/// Undo [`install_at`].
pub fn remove_at(target: &Target, config: &DarkConfig) -> Result<Report, DarkError> {
    info!("uninstalling FlatLaf");
    let mut report = flatlaf::remove(&target.install, &config.flatlaf)?;

    info!("removing dark preferences");
    report.merge(remove_dark_preferences(&target.config, &config.tools)?);
    Ok(report)
}

fn check_first_run(config_dir: &Path) -> Result<(), PatchError> {
    if is_first_run(config_dir) {
        error!("Please open Ghidra at least once to fully install dark mode.");
        return Err(PatchError::NotFound(preferences_path(config_dir)));
    }
    debug!("using Ghidra config path {}", config_dir.display());
    Ok(())
}

/// Log level a warning is surfaced at.
pub fn log_level(warning: &Warning) -> Level {
    match warning.severity() {
        Severity::Info => Level::INFO,
        Severity::Warning => Level::WARN,
    }
}

pub fn log_report(report: &Report) {
    for warning in report.iter() {
        if log_level(warning) == Level::INFO {
            info!("{warning}");
        } else {
            warn!("{warning}");
        }
    }
}

/// 0 on success, 2 when Ghidra is running, 1 for everything else.
pub fn exit_code(result: &Result<Report, DarkError>) -> u8 {
    match result {
        Ok(_) => 0,
        Err(DarkError::GhidraRunning) => 2,
        Err(_) => 1,
    }
}
