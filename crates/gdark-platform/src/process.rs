//! Detecting a running Ghidra instance.

use std::process::Command;

use gdark_common::PlatformError;
use tracing::debug;

/// Substring of the lower-cased process listing that marks Ghidra.
const GHIDRA_MARKER: &str = "ghidrarun";

#[cfg(windows)]
const LISTING_COMMAND: (&str, &[&str]) = ("WMIC", &["path", "win32_process", "get", "Commandline"]);

#[cfg(not(windows))]
const LISTING_COMMAND: (&str, &[&str]) = ("ps", &["-ax"]);

/// Returns true if any process command line mentions `ghidraRun`.
pub fn is_running() -> Result<bool, PlatformError> {
    let (program, args) = LISTING_COMMAND;
    debug!("running {program} {}", args.join(" "));

    let output = Command::new(program)
        .args(args)
        .output()
        .map_err(|e| PlatformError::ProcessError(format!("failed to run {program}: {e}")))?;
    if !output.status.success() {
        return Err(PlatformError::ProcessError(format!(
            "{program} exited with {}",
            output.status
        )));
    }
    Ok(listing_mentions_ghidra(&output.stdout))
}

/// Case-insensitive scan of raw process listing output.
pub fn listing_mentions_ghidra(listing: &[u8]) -> bool {
    String::from_utf8_lossy(listing)
        .to_lowercase()
        .contains(GHIDRA_MARKER)
}
