//! Configuration schema for the installer's own settings file.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields fall back to the stock Dracula palette and FlatLaf 2.5.

mod flatlaf;
mod font;
mod palette;
mod tools;

pub use flatlaf::*;
pub use font::*;
pub use palette::*;
pub use tools::*;

use serde::{Deserialize, Serialize};

/// Root configuration.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DarkConfig {
    pub flatlaf: FlatLafConfig,
    pub font: FontConfig,
    pub palette: PaletteConfig,
    pub tools: ToolsConfig,
}
