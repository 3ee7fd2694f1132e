//! Ghidra tool config (`.tcd`) reading and patching.
//!
//! Options live under `TOOL/OPTIONS/CATEGORY[@NAME]`, keyed by their full
//! dotted name:
//!
//! ```xml
//! <CATEGORY NAME="Decompiler">
//!     <WRAPPED_OPTION NAME="Display.Background Color" CLASS="ghidra.framework.options.WrappedColor">
//!         <STATE NAME="color" TYPE="int" VALUE="-1" />
//!     </WRAPPED_OPTION>
//! </CATEGORY>
//! ```

mod document;
mod element;
mod patch;
mod render;


pub use document::ToolDocument;

use std::path::Path;

use gdark_common::PatchError;

use crate::catalog::Catalog;

/// Open `path`, apply every catalog entry, and save it back in place.
pub fn patch_document(path: &Path, catalog: &Catalog) -> Result<(), PatchError> {
    let mut document = ToolDocument::open(path)?;
    document.apply(catalog)?;
    document.save(path)
}
