//! Option patching by splicing the document text.
//!
//! Each edit replaces or inserts exactly one element's bytes and then
//! re-parses, so untouched markup, comments and whitespace stay as read.

use std::ops::Range;

use gdark_common::{OptionNode, PatchError};
use tracing::{debug, trace};

use super::document::{line_indent, ToolDocument};
use super::element::{parse, Element};
use super::render::{render_category, render_option};
use crate::catalog::Catalog;

struct Edit {
    range: Range<usize>,
    replacement: String,
}

impl ToolDocument {
    /// Write every catalog entry into the document.
    pub fn apply(&mut self, catalog: &Catalog) -> Result<(), PatchError> {
        for entry in catalog.entries() {
            self.set_option(&entry.category, &entry.option_path, &entry.node)?;
        }
        debug!(path = %self.path.display(), entries = catalog.len(), "applied catalog");
        Ok(())
    }

    /// Write only the entries of `category`.
    pub fn apply_category(&mut self, catalog: &Catalog, category: &str) -> Result<(), PatchError> {
        for entry in catalog.for_category(category) {
            self.set_option(&entry.category, &entry.option_path, &entry.node)?;
        }
        Ok(())
    }

    /// Replace the option at `option_path` in `category` with `node`,
    /// creating the option or its category when absent.
    ///
    /// An existing option of a different kind is replaced whole.
    pub fn set_option(&mut self, category: &str, option_path: &str, node: &OptionNode) -> Result<(), PatchError> {
        let Some(options) = self.options_element() else {
            return Err(PatchError::Path {
                path: self.path.clone(),
                category: category.to_string(),
                option: option_path.to_string(),
            });
        };

        let edit = match options.child_with("CATEGORY", category) {
            Some(cat) => match cat.child_named(option_path) {
                Some(existing) => {
                    let indent = self.indent_of(existing, cat);
                    trace!(category, option_path, "replacing option");
                    Edit {
                        range: existing.start..existing.end,
                        replacement: render_option(option_path, node, &indent, &self.layout),
                    }
                }
                None => {
                    trace!(category, option_path, "inserting option");
                    self.append_child(cat, |indent, layout| {
                        render_option(option_path, node, indent, layout)
                    })
                }
            },
            None => {
                debug!(category, "creating category");
                self.append_child(options, |indent, layout| {
                    render_category(category, option_path, node, indent, layout)
                })
            }
        };

        self.splice(edit)
    }

    fn splice(&mut self, edit: Edit) -> Result<(), PatchError> {
        self.text.replace_range(edit.range, &edit.replacement);
        self.root = parse(&self.text).map_err(|message| PatchError::Parse {
            path: self.path.clone(),
            message: format!("document invalid after edit: {message}"),
        })?;
        Ok(())
    }

    fn parent_indent(&self, parent: &Element) -> String {
        line_indent(&self.text, parent.start)
            .unwrap_or_default()
            .to_string()
    }

    /// Indentation for `element`, falling back to one unit inside `parent`.
    fn indent_of(&self, element: &Element, parent: &Element) -> String {
        match line_indent(&self.text, element.start) {
            Some(indent) => indent.to_string(),
            None => format!("{}{}", self.parent_indent(parent), self.layout.unit),
        }
    }

    /// Build an edit that adds a new last child to `parent`.
    fn append_child<F>(&self, parent: &Element, render: F) -> Edit
    where
        F: FnOnce(&str, &super::render::Layout) -> String,
    {
        let nl = self.layout.newline;
        let parent_indent = self.parent_indent(parent);
        let child_indent = match parent.children.last() {
            Some(last) => self.indent_of(last, parent),
            None => format!("{parent_indent}{}", self.layout.unit),
        };
        let rendered = render(&child_indent, &self.layout);

        if parent.self_closing {
            let head = self.text[parent.start..parent.open_end]
                .trim_end_matches('>')
                .trim_end_matches('/')
                .trim_end();
            return Edit {
                range: parent.start..parent.end,
                replacement: format!(
                    "{head}>{nl}{child_indent}{rendered}{nl}{parent_indent}</{}>",
                    parent.name
                ),
            };
        }

        let inner = &self.text[parent.open_end..parent.close_start];
        let trailing_ws = inner.len() - inner.trim_end().len();
        if trailing_ws == inner.len() {
            Edit {
                range: parent.open_end..parent.close_start,
                replacement: format!("{nl}{child_indent}{rendered}{nl}{parent_indent}"),
            }
        } else if inner[inner.len() - trailing_ws..].contains('\n') {
            let at = parent.close_start - trailing_ws;
            Edit {
                range: at..at,
                replacement: format!("{nl}{child_indent}{rendered}"),
            }
        } else {
            // closing tag shares a line with the last child
            Edit {
                range: parent.close_start - trailing_ws..parent.close_start,
                replacement: format!("{nl}{child_indent}{rendered}{nl}{parent_indent}"),
            }
        }
    }
}
