//! TOML settings file loading.

mod loader;
mod paths;


pub use loader::{load, load_default, load_from_path};
pub use paths::default_config_path;
