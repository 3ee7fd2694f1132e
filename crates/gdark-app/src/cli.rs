use std::path::PathBuf;

use clap::Parser;

/// Install a dark theme for Ghidra.
#[derive(Parser, Debug)]
#[command(name = "ghidra-dark", version, about)]
pub struct Args {
    /// Turn on debug logging.
    #[arg(short = 'd', long)]
    pub debug: bool,

    /// The installation path for Ghidra (defaults to the directory of
    /// `ghidraRun` on PATH).
    #[arg(short = 'p', long = "path")]
    pub install_path: Option<PathBuf>,

    /// The user to install for.
    #[arg(short = 'u', long)]
    pub user: Option<String>,

    /// Uninstall the dark theme.
    #[arg(short = 'r', long)]
    pub remove: bool,

    /// Settings file override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log filter override, e.g. `debug` or `gdark_config=trace`.
    #[arg(long)]
    pub log_level: Option<String>,
}

impl Args {
    /// Filter directive: `--log-level`, else `debug` with `-d`, else `warn`.
    pub fn log_directive(&self) -> &str {
        match (&self.log_level, self.debug) {
            (Some(level), _) => level.as_str(),
            (None, true) => "debug",
            (None, false) => "warn",
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_flags() {
        let args = Args::parse_from(["ghidra-dark", "-d", "-r", "-p", "/opt/ghidra", "-u", "bob"]);
        assert!(args.debug);
        assert!(args.remove);
        assert_eq!(args.install_path, Some(PathBuf::from("/opt/ghidra")));
        assert_eq!(args.user.as_deref(), Some("bob"));
        assert_eq!(args.log_directive(), "debug");
    }

    #[test]
    fn defaults_install_with_warn_logging() {
        let args = Args::parse_from(["ghidra-dark"]);
        assert!(!args.remove);
        assert!(args.install_path.is_none());
        assert!(args.config.is_none());
        assert_eq!(args.log_directive(), "warn");
    }

    #[test]
    fn log_level_overrides_debug() {
        let args = Args::parse_from(["ghidra-dark", "--debug", "--log-level", "info"]);
        assert_eq!(args.log_directive(), "info");
    }

    #[test]
    fn long_flags() {
        let args = Args::parse_from([
            "ghidra-dark",
            "--path",
            "/opt/ghidra",
            "--remove",
            "--config",
            "/tmp/dark.toml",
        ]);
        assert!(args.remove);
        assert_eq!(args.config, Some(PathBuf::from("/tmp/dark.toml")));
    }
}
