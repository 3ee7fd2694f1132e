//! Everything outside the user's Ghidra config directory: finding the
//! install, checking for a running instance, and the FlatLaf bundle.

pub mod flatlaf;
pub mod paths;
pub mod process;

pub use flatlaf::{ArtifactSource, HttpSource};
pub use paths::{config_path, install_path, version};
pub use process::is_running;
