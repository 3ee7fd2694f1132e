//! Typed model of the values Ghidra stores in tool configs.
//!
//! A plain option is a single [`State`]; a composite option is a
//! [`WrappedOption`] whose state sequence is fixed by its [`WrapperKind`].

use std::fmt;

/// Native value carried by a [`State`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionValue {
    String(String),
    Boolean(bool),
    Integer(i32),
}

impl OptionValue {
    /// The `TYPE` attribute Ghidra writes for this value.
    pub fn type_tag(&self) -> &'static str {
        match self {
            OptionValue::String(_) => "string",
            OptionValue::Boolean(_) => "boolean",
            OptionValue::Integer(_) => "int",
        }
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::String(s) => f.write_str(s),
            OptionValue::Boolean(b) => write!(f, "{b}"),
            OptionValue::Integer(i) => write!(f, "{i}"),
        }
    }
}

impl From<&str> for OptionValue {
    fn from(s: &str) -> Self {
        OptionValue::String(s.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(s: String) -> Self {
        OptionValue::String(s)
    }
}

impl From<bool> for OptionValue {
    fn from(b: bool) -> Self {
        OptionValue::Boolean(b)
    }
}

impl From<i32> for OptionValue {
    fn from(i: i32) -> Self {
        OptionValue::Integer(i)
    }
}

/// One `STATE` element: a possibly empty name plus a typed value.
///
/// The type tag is derived from the value at construction and the value
/// cannot be swapped afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State {
    name: String,
    value: OptionValue,
}

impl State {
    pub fn new(name: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// A state with no name, for plain options named by their position.
    pub fn unnamed(value: impl Into<OptionValue>) -> Self {
        Self::new("", value)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &OptionValue {
        &self.value
    }

    pub fn type_tag(&self) -> &'static str {
        self.value.type_tag()
    }

    /// Canonical string form written to the `VALUE` attribute.
    pub fn serialized(&self) -> String {
        self.value.to_string()
    }

    /// Same value under a different name.
    pub fn renamed(&self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: self.value.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WrapperKind {
    Color,
    Font,
    KeyStroke,
}

impl WrapperKind {
    /// Fully qualified Java class recorded in the `CLASS` attribute.
    pub fn class_name(&self) -> &'static str {
        match self {
            WrapperKind::Color => "ghidra.framework.options.WrappedColor",
            WrapperKind::Font => "ghidra.framework.options.WrappedFont",
            WrapperKind::KeyStroke => "ghidra.framework.options.WrappedKeyStroke",
        }
    }

    pub fn from_class_name(class: &str) -> Option<Self> {
        [WrapperKind::Color, WrapperKind::Font, WrapperKind::KeyStroke]
            .into_iter()
            .find(|k| k.class_name() == class)
    }
}

/// A `WRAPPED_OPTION`: composite value with kind-specific state order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrappedOption {
    kind: WrapperKind,
    states: Vec<State>,
}

impl WrappedOption {
    /// Colour packed as a signed ARGB integer.
    pub fn color(packed: i32) -> Self {
        Self {
            kind: WrapperKind::Color,
            states: vec![State::new("color", packed)],
        }
    }

    pub fn font(size: i32, style: i32, family: impl Into<String>) -> Self {
        Self {
            kind: WrapperKind::Font,
            states: vec![
                State::new("size", size),
                State::new("style", style),
                State::new("family", family.into()),
            ],
        }
    }

    pub fn key_stroke(key_code: i32, modifiers: i32) -> Self {
        Self {
            kind: WrapperKind::KeyStroke,
            states: vec![
                State::new("KeyCode", key_code),
                State::new("Modifiers", modifiers),
            ],
        }
    }

    pub fn kind(&self) -> WrapperKind {
        self.kind
    }

    pub fn class_name(&self) -> &'static str {
        self.kind.class_name()
    }

    pub fn states(&self) -> &[State] {
        &self.states
    }
}

/// A node in a tool config's option tree: either a leaf value or a
/// wrapped composite with named child states.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionNode {
    Plain(State),
    Wrapped(WrappedOption),
}

impl From<State> for OptionNode {
    fn from(state: State) -> Self {
        OptionNode::Plain(state)
    }
}

impl From<WrappedOption> for OptionNode {
    fn from(wrapped: WrappedOption) -> Self {
        OptionNode::Wrapped(wrapped)
    }
}
