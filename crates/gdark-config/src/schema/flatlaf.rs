//! FlatLaf look-and-feel bundle settings.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FlatLafConfig {
    /// Jar version fetched from the mirror.
    pub version: String,
    /// Look-and-feel class passed to Swing via `-Dswing.systemlaf`.
    pub laf_class: String,
    /// Expected SHA-256 of the jar as 64 hex digits. Empty means the
    /// digest is read from the mirror's `.sha256` sidecar instead.
    pub sha256: String,
    /// Maven repository directory that holds the versioned jars.
    pub mirror: String,
}

impl FlatLafConfig {
    pub fn jar_name(&self) -> String {
        format!("flatlaf-{}.jar", self.version)
    }

    pub fn jar_url(&self) -> String {
        format!(
            "{}/{}/{}",
            self.mirror.trim_end_matches('/'),
            self.version,
            self.jar_name()
        )
    }

    /// Pinned digest, if one is configured.
    pub fn pinned_sha256(&self) -> Option<&str> {
        let digest = self.sha256.trim();
        (!digest.is_empty()).then_some(digest)
    }
}

impl Default for FlatLafConfig {
    fn default() -> Self {
        Self {
            version: "2.5".into(),
            laf_class: "com.formdev.flatlaf.FlatDarculaLaf".into(),
            sha256: String::new(),
            mirror: "https://repo1.maven.org/maven2/com/formdev/flatlaf".into(),
        }
    }
}
