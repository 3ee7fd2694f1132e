//! Base colours the preference catalog is generated from.

use serde::{Deserialize, Serialize};

/// Named base colours, each `RRGGBB` without a leading `#`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteConfig {
    pub bg: String,
    pub fg: String,
    pub selection: String,
    pub comment: String,
    pub red: String,
    pub orange: String,
    pub yellow: String,
    pub green: String,
    pub purple: String,
    pub cyan: String,
    pub pink: String,
    pub white: String,
}

impl PaletteConfig {
    /// Every entry paired with its key, in declaration order.
    pub fn entries(&self) -> [(&'static str, &str); 12] {
        [
            ("bg", self.bg.as_str()),
            ("fg", self.fg.as_str()),
            ("selection", self.selection.as_str()),
            ("comment", self.comment.as_str()),
            ("red", self.red.as_str()),
            ("orange", self.orange.as_str()),
            ("yellow", self.yellow.as_str()),
            ("green", self.green.as_str()),
            ("purple", self.purple.as_str()),
            ("cyan", self.cyan.as_str()),
            ("pink", self.pink.as_str()),
            ("white", self.white.as_str()),
        ]
    }
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            bg: "282a36".into(),
            fg: "f8f8f2".into(),
            selection: "44475a".into(),
            comment: "6272a4".into(),
            red: "ff5555".into(),
            orange: "ffb86c".into(),
            yellow: "f1fa8c".into(),
            green: "50fa7b".into(),
            purple: "bd93f9".into(),
            cyan: "8be9fd".into(),
            pink: "ff79c6".into(),
            white: "ffffff".into(),
        }
    }
}
