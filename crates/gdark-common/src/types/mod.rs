mod color;
mod option;

pub use color::*;
pub use option::*;
