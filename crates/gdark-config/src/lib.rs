//! Dark theme patching for Ghidra user configuration.
//!
//! Builds the dark [`Catalog`] from a palette, merges it into Ghidra's
//! tool configs (`*.tcd`), and flips `LastLookAndFeel` in `preferences`.
//! Every file is backed up to `<file>.bak` before it is first touched so
//! removal can put it back byte for byte.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::path::Path;
//! use gdark_config::{install_dark_preferences, Catalog, DarkConfig};
//!
//! let config = DarkConfig::default();
//! let catalog = Catalog::dark(&config.palette, &config.font)?;
//! let report = install_dark_preferences(
//!     Path::new("/home/me/.ghidra/.ghidra_11.0_PUBLIC"),
//!     &catalog,
//!     &config.tools,
//! )?;
//! for warning in report.iter() {
//!     eprintln!("{warning}");
//! }
//! # Ok::<(), gdark_common::PatchError>(())
//! ```

pub mod backup;
pub mod catalog;
pub mod colors;
pub mod preferences;
pub mod schema;
pub mod tcd;
pub mod toml_loader;
pub mod validation;

pub use backup::{backup, backup_then_mutate, restore, BackupOutcome, RestoreOutcome};
pub use catalog::{Catalog, PreferenceEntry};
pub use colors::{encode_color, encode_font, encode_keystroke};
pub use preferences::{install_dark_preferences, remove_dark_preferences};
pub use schema::DarkConfig;
pub use tcd::{patch_document, ToolDocument};
pub use toml_loader::{default_config_path, load as load_config};
