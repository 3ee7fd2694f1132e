//! Which tool configs under `<config>/tools` get patched.

use serde::{Deserialize, Serialize};

/// Tool configs Ghidra writes on first launch.
pub const DEFAULT_TOOL_FILES: &[&str] = &[
    "_code_browser.tcd",
    "_debugger.tcd",
    "_emulator.tcd",
    "_version_tracking.tcd",
    "_trace_rmi_debugger.tcd",
];

/// The tool config that proves Ghidra has been opened at least once.
pub const PRIMARY_TOOL_FILE: &str = "_code_browser.tcd";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolsConfig {
    pub files: Vec<String>,
    pub primary: String,
}

impl ToolsConfig {
    pub fn is_primary(&self, file: &str) -> bool {
        self.primary == file
    }
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            files: DEFAULT_TOOL_FILES.iter().map(|s| s.to_string()).collect(),
            primary: PRIMARY_TOOL_FILE.into(),
        }
    }
}
