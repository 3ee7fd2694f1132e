//! In-memory tool config document.

use std::path::{Path, PathBuf};

use gdark_common::{OptionNode, PatchError, State, WrappedOption, WrapperKind};
use tracing::debug;

use super::element::{parse, Element};
use super::render::Layout;
use crate::backup::write_atomic;

/// A parsed `.tcd` file.
///
/// Holds the original text verbatim alongside its element tree. Saving an
/// unmodified document writes the exact bytes that were read.
#[derive(Debug, Clone)]
pub struct ToolDocument {
    pub(super) path: PathBuf,
    pub(super) text: String,
    pub(super) root: Element,
    pub(super) layout: Layout,
}

impl ToolDocument {
    /// Read and parse the tool config at `path`.
    pub fn open(path: &Path) -> Result<Self, PatchError> {
        let bytes = std::fs::read(path).map_err(|e| PatchError::io(path, e))?;
        let text = String::from_utf8(bytes).map_err(|e| PatchError::Parse {
            path: path.to_path_buf(),
            message: format!("not valid UTF-8: {e}"),
        })?;
        debug!(path = %path.display(), bytes = text.len(), "read tool config");
        Self::from_text(path, text)
    }

    /// Parse `text` as if read from `path`.
    pub fn from_text(path: impl Into<PathBuf>, text: String) -> Result<Self, PatchError> {
        let path = path.into();
        let root = parse(&text).map_err(|message| PatchError::Parse {
            path: path.clone(),
            message,
        })?;
        let first_indent = root
            .children
            .first()
            .and_then(|child| line_indent(&text, child.start));
        let layout = Layout::detect(&text, first_indent);
        Ok(Self {
            path,
            text,
            root,
            layout,
        })
    }

    /// Write the document to `path`, replacing it atomically.
    pub fn save(&self, path: &Path) -> Result<(), PatchError> {
        write_atomic(path, self.text.as_bytes())?;
        debug!(path = %path.display(), "saved tool config");
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The `OPTIONS` element under `TOOL`, if both exist.
    pub(super) fn options_element(&self) -> Option<&Element> {
        let tool = if self.root.name == "TOOL" {
            &self.root
        } else {
            self.root.child("TOOL")?
        };
        tool.child("OPTIONS")
    }

    /// Names of all option categories, in document order.
    pub fn categories(&self) -> Vec<&str> {
        self.options_element()
            .map(|options| {
                options
                    .children
                    .iter()
                    .filter(|c| c.name == "CATEGORY")
                    .filter_map(|c| c.attr("NAME"))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Typed view of one option. `None` when the option is absent or
    /// holds a value kind this tool does not model.
    pub fn option(&self, category: &str, option_path: &str) -> Option<OptionNode> {
        let element = self
            .options_element()?
            .child_with("CATEGORY", category)?
            .child_named(option_path)?;
        match element.name.as_str() {
            "STATE" => state_from(element).map(OptionNode::Plain),
            "WRAPPED_OPTION" => wrapped_from(element).map(OptionNode::Wrapped),
            _ => None,
        }
    }
}

/// Leading whitespace of the line `offset` sits on, if only whitespace
/// precedes it on that line.
pub(super) fn line_indent(text: &str, offset: usize) -> Option<&str> {
    let line_start = text[..offset].rfind('\n').map_or(0, |i| i + 1);
    let prefix = &text[line_start..offset];
    prefix
        .chars()
        .all(|c| c == ' ' || c == '\t')
        .then_some(prefix)
}

fn state_from(element: &Element) -> Option<State> {
    let name = element.attr("NAME").unwrap_or_default();
    let raw = element.attr("VALUE")?;
    let state = match element.attr("TYPE")? {
        "int" => State::new(name, raw.parse::<i32>().ok()?),
        "boolean" => State::new(name, raw.parse::<bool>().ok()?),
        "string" => State::new(name, raw),
        _ => return None,
    };
    Some(state)
}

fn wrapped_from(element: &Element) -> Option<WrappedOption> {
    let kind = WrapperKind::from_class_name(element.attr("CLASS")?)?;
    let states: Vec<State> = element.children.iter().filter_map(state_from).collect();
    let find = |name: &str| states.iter().find(|s| s.name() == name).map(State::value);
    let int = |name: &str| match find(name)? {
        gdark_common::OptionValue::Integer(i) => Some(*i),
        _ => None,
    };

    match kind {
        WrapperKind::Color => Some(WrappedOption::color(int("color")?)),
        WrapperKind::Font => {
            let family = match find("family")? {
                gdark_common::OptionValue::String(s) => s.clone(),
                _ => return None,
            };
            Some(WrappedOption::font(int("size")?, int("style")?, family))
        }
        WrapperKind::KeyStroke => Some(WrappedOption::key_stroke(
            int("KeyCode")?,
            int("Modifiers")?,
        )),
    }
}
