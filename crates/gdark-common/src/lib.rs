pub mod errors;
pub mod report;
pub mod types;

pub use errors::{ConfigError, DarkError, PatchError, PlatformError};
pub use report::{Report, Severity, Warning};
pub use types::{Color, OptionNode, OptionValue, State, WrappedOption, WrapperKind};

pub type Result<T> = std::result::Result<T, DarkError>;
