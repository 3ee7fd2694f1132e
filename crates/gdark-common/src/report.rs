use std::fmt;
use std::path::PathBuf;

/// How loudly a [`Warning`] should be surfaced to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
}

/// A non-fatal condition met while installing or removing the theme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// A known tool config is absent. `primary` marks the one whose
    /// absence means Ghidra has never been opened.
    MissingToolConfig { path: PathBuf, primary: bool },
    /// Restore was requested but there is no `.bak` next to the file.
    NoBackup(PathBuf),
    /// A `.bak` from an earlier install already existed and was kept.
    BackupKept(PathBuf),
    /// A bundle artifact that should be removed was not on disk.
    MissingArtifact(PathBuf),
}

impl Warning {
    pub fn severity(&self) -> Severity {
        match self {
            Warning::BackupKept(_) => Severity::Info,
            Warning::MissingToolConfig { primary: false, .. } => Severity::Info,
            _ => Severity::Warning,
        }
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::MissingToolConfig {
                path,
                primary: true,
            } => write!(
                f,
                "{} not found; open Ghidra at least once to fully install dark mode",
                path.display()
            ),
            Warning::MissingToolConfig { path, .. } => {
                write!(f, "{} not found, skipping", path.display())
            }
            Warning::NoBackup(path) => {
                write!(f, "no backup of {} found, cannot restore", path.display())
            }
            Warning::BackupKept(path) => {
                write!(f, "keeping existing backup {}", path.display())
            }
            Warning::MissingArtifact(path) => {
                write!(f, "could not remove {}: not found", path.display())
            }
        }
    }
}

/// Ordered collection of warnings produced by one operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    warnings: Vec<Warning>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, warning: Warning) {
        self.warnings.push(warning);
    }

    /// Appends every warning of `other`, preserving order.
    pub fn merge(&mut self, other: Report) {
        self.warnings.extend(other.warnings);
    }

    pub fn is_empty(&self) -> bool {
        self.warnings.is_empty()
    }

    pub fn len(&self) -> usize {
        self.warnings.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Warning> {
        self.warnings.iter()
    }
}
