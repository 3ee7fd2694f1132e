use std::path::PathBuf;

/// Failures raised while reading or rewriting Ghidra's own files.
#[derive(Debug, thiserror::Error)]
pub enum PatchError {
    #[error("file not found: {0}")]
    NotFound(PathBuf),

    #[error("failed to parse {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("cannot resolve option '{option}' in category '{category}' of {path}")]
    Path {
        path: PathBuf,
        category: String,
        option: String,
    },

    #[error("encoding error: {0}")]
    Encoding(String),

    #[error("checksum mismatch for {path}: expected {expected}, got {actual}")]
    Integrity {
        path: PathBuf,
        expected: String,
        actual: String,
    },

    #[error("i/o error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl PatchError {
    /// Wraps an I/O error, mapping `NotFound` onto [`PatchError::NotFound`].
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            PatchError::NotFound(path)
        } else {
            PatchError::Io { path, source }
        }
    }
}

/// Failures loading the installer's own settings file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    #[error("path error: {0}")]
    PathError(String),

    #[error("process error: {0}")]
    ProcessError(String),

    #[error("network error: {0}")]
    Network(String),
}

#[derive(Debug, thiserror::Error)]
pub enum DarkError {
    #[error(transparent)]
    Patch(#[from] PatchError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Platform(#[from] PlatformError),

    #[error("ghidra is running; close every instance first")]
    GhidraRunning,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patch_error_display() {
        let err = PatchError::NotFound(PathBuf::from("/tmp/preferences"));
        assert_eq!(err.to_string(), "file not found: /tmp/preferences");

        let err = PatchError::Path {
            path: PathBuf::from("a.tcd"),
            category: "Decompiler".into(),
            option: "Display.Font".into(),
        };
        assert_eq!(
            err.to_string(),
            "cannot resolve option 'Display.Font' in category 'Decompiler' of a.tcd"
        );

        let err = PatchError::Encoding("bad hex".into());
        assert_eq!(err.to_string(), "encoding error: bad hex");
    }

    #[test]
    fn io_not_found_maps_to_not_found() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = PatchError::io("/x/y", io_err);
        assert!(matches!(err, PatchError::NotFound(p) if p == PathBuf::from("/x/y")));

        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "nope");
        let err = PatchError::io("/x/y", io_err);
        assert!(matches!(err, PatchError::Io { .. }));
        assert!(err.to_string().contains("/x/y"));
    }

    #[test]
    fn config_error_display() {
        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("font.size out of range".into());
        assert_eq!(
            err.to_string(),
            "config validation error: font.size out of range"
        );
    }

    #[test]
    fn dark_error_from_layers() {
        let err: DarkError = PatchError::Encoding("x".into()).into();
        assert!(matches!(err, DarkError::Patch(_)));

        let err: DarkError = PlatformError::Network("timeout".into()).into();
        assert!(matches!(err, DarkError::Platform(_)));
        assert_eq!(err.to_string(), "network error: timeout");

        let err: DarkError = ConfigError::ParseError("bad".into()).into();
        assert!(matches!(err, DarkError::Config(_)));
    }
}
