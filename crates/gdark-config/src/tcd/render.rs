//! Serialization of option nodes in Ghidra's tool config dialect.

use gdark_common::{OptionNode, State};

/// Whitespace conventions detected from the document being edited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Layout {
    pub newline: &'static str,
    pub unit: String,
}

impl Layout {
    pub fn detect(text: &str, first_child_indent: Option<&str>) -> Self {
        let newline = if text.contains("\r\n") { "\r\n" } else { "\n" };
        let unit = match first_child_indent {
            Some(indent) if !indent.is_empty() => indent.to_string(),
            _ => "    ".to_string(),
        };
        Self { newline, unit }
    }
}

/// Escape an attribute value the way Ghidra's writer does.
pub(crate) fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\t' => out.push_str("&#x9;"),
            '\n' => out.push_str("&#xA;"),
            '\r' => out.push_str("&#xD;"),
            c => out.push(c),
        }
    }
    out
}

fn render_state(name: &str, state: &State) -> String {
    format!(
        "<STATE NAME=\"{}\" TYPE=\"{}\" VALUE=\"{}\" />",
        escape_attr(name),
        state.type_tag(),
        escape_attr(&state.serialized())
    )
}

/// Render the element for `option_path` whose own line is indented by
/// `indent`. The returned text starts at `<` and carries no leading
/// indentation or trailing newline.
pub(crate) fn render_option(option_path: &str, node: &OptionNode, indent: &str, layout: &Layout) -> String {
    match node {
        OptionNode::Plain(state) => render_state(option_path, state),
        OptionNode::Wrapped(wrapped) => {
            let nl = layout.newline;
            let mut out = format!(
                "<WRAPPED_OPTION NAME=\"{}\" CLASS=\"{}\">",
                escape_attr(option_path),
                wrapped.class_name()
            );
            for state in wrapped.states() {
                out.push_str(nl);
                out.push_str(indent);
                out.push_str(&layout.unit);
                out.push_str(&render_state(state.name(), state));
            }
            out.push_str(nl);
            out.push_str(indent);
            out.push_str("</WRAPPED_OPTION>");
            out
        }
    }
}

/// Render a new `CATEGORY` holding a single option.
pub(crate) fn render_category(
    category: &str,
    option_path: &str,
    node: &OptionNode,
    indent: &str,
    layout: &Layout,
) -> String {
    let nl = layout.newline;
    let inner_indent = format!("{indent}{}", layout.unit);
    format!(
        "<CATEGORY NAME=\"{}\">{nl}{inner_indent}{}{nl}{indent}</CATEGORY>",
        escape_attr(category),
        render_option(option_path, node, &inner_indent, layout)
    )
}
