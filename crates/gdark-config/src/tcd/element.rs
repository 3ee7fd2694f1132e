//! Span-preserving element tree over a tool config's XML text.
//!
//! Every element records the byte ranges of its tags so edits can splice
//! the original text without re-serializing untouched markup.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Element {
    pub name: String,
    pub attrs: Vec<(String, String)>,
    /// Offset of the `<` opening the start tag.
    pub start: usize,
    /// Offset just past the start tag's `>`.
    pub open_end: usize,
    /// Offset of the `<` opening the end tag; equals `end` when self-closing.
    pub close_start: usize,
    /// Offset just past the element.
    pub end: usize,
    pub self_closing: bool,
    pub children: Vec<Element>,
}

impl Element {
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn child(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.name == name)
    }

    /// First child whose `NAME` attribute equals `value`, any tag.
    pub fn child_named(&self, value: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.attr("NAME") == Some(value))
    }

    /// First child with tag `tag` and `NAME` attribute `value`.
    pub fn child_with(&self, tag: &str, value: &str) -> Option<&Element> {
        self.children
            .iter()
            .find(|c| c.name == tag && c.attr("NAME") == Some(value))
    }
}

/// Offset of the `<` that opens the tag ending at `tag_end`.
fn tag_start(text: &str, tag_end: usize) -> Result<usize, String> {
    text[..tag_end]
        .rfind('<')
        .ok_or_else(|| format!("malformed tag ending at byte {tag_end}"))
}

fn open(text: &str, tag: &BytesStart<'_>, tag_end: usize, self_closing: bool) -> Result<Element, String> {
    if !text[..tag_end].ends_with('>') {
        return Err(format!("unterminated tag near byte {tag_end}"));
    }
    let start = tag_start(text, tag_end)?;
    let name = String::from_utf8_lossy(tag.name().as_ref()).into_owned();

    let mut attrs = Vec::new();
    for attr in tag.attributes() {
        let attr = attr.map_err(|e| format!("bad attribute in <{name}>: {e}"))?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr
            .unescape_value()
            .map_err(|e| format!("bad value for {key} in <{name}>: {e}"))?
            .into_owned();
        attrs.push((key, value));
    }

    Ok(Element {
        name,
        attrs,
        start,
        open_end: tag_end,
        close_start: tag_end,
        end: tag_end,
        self_closing,
        children: Vec::new(),
    })
}

fn attach(stack: &mut [Element], root: &mut Option<Element>, element: Element) -> Result<(), String> {
    if let Some(parent) = stack.last_mut() {
        parent.children.push(element);
        Ok(())
    } else if root.is_some() {
        Err(format!("second root element <{}>", element.name))
    } else {
        *root = Some(element);
        Ok(())
    }
}

/// Move every span of `element` and its descendants `by` bytes right.
fn shift(element: &mut Element, by: usize) {
    element.start += by;
    element.open_end += by;
    element.close_start += by;
    element.end += by;
    for child in &mut element.children {
        shift(child, by);
    }
}

/// Parse `text` into its root [`Element`].
///
/// A leading UTF-8 byte order mark is skipped; spans still index `text`.
pub(crate) fn parse(text: &str) -> Result<Element, String> {
    let bom = if text.starts_with('\u{feff}') {
        '\u{feff}'.len_utf8()
    } else {
        0
    };
    let mut root = parse_body(&text[bom..])?;
    if bom > 0 {
        shift(&mut root, bom);
    }
    Ok(root)
}

fn parse_body(text: &str) -> Result<Element, String> {
    let mut reader = Reader::from_str(text);
    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        let event = reader
            .read_event()
            .map_err(|e| format!("{e} (near byte {})", reader.buffer_position()))?;
        let pos = reader.buffer_position() as usize;

        match event {
            Event::Start(tag) => stack.push(open(text, &tag, pos, false)?),
            Event::Empty(tag) => {
                let element = open(text, &tag, pos, true)?;
                attach(&mut stack, &mut root, element)?;
            }
            Event::End(_) => {
                let mut element = stack
                    .pop()
                    .ok_or_else(|| format!("unexpected end tag near byte {pos}"))?;
                element.close_start = tag_start(text, pos)?;
                element.end = pos;
                attach(&mut stack, &mut root, element)?;
            }
            Event::Text(t) => {
                if stack.is_empty() && !t.iter().all(u8::is_ascii_whitespace) {
                    return Err(format!("text outside the root element near byte {pos}"));
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if let Some(open) = stack.last() {
        return Err(format!("unclosed element <{}>", open.name));
    }
    root.ok_or_else(|| "document has no root element".to_string())
}
