//! IR node and calling conventions
//!
//! An [`IrNode`] is the unit of the host-agnostic tree. Its `node_type` tag
//! selects semantics, its `call_as` fixes how the matching builder is
//! invoked, and its children are in document order.
//!
//! Invariant: a `"text"` node has a payload, no children and no calling
//! convention; every other node carries one of the three recognized
//! conventions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::attributes::Attributes;

/// The sentinel type tag for raw text leaves.
pub const TEXT_TYPE: &str = "text";

/// The argument-shape contract a builder expects.
///
/// The host's own node constructors have heterogeneous signatures: some take
/// a leading raw-source argument, text elements take raw source and raw
/// text, and pure value-transforms take neither. The convention tag lets one
/// generic renderer drive all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CallAs {
    /// Two leading empty-string placeholders (raw source, raw text).
    #[serde(rename = "text-element")]
    TextElement,
    /// One leading empty-string placeholder (raw source).
    #[serde(rename = "element")]
    Element,
    /// Rendered children and attributes only.
    #[serde(rename = "function")]
    Function,
}

impl CallAs {
    pub fn as_str(&self) -> &'static str {
        match self {
            CallAs::TextElement => "text-element",
            CallAs::Element => "element",
            CallAs::Function => "function",
        }
    }
}

impl fmt::Display for CallAs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for a convention tag outside the three recognized ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCallAs(pub String);

impl fmt::Display for UnknownCallAs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Call convention not implemented: {}", self.0)
    }
}

impl std::error::Error for UnknownCallAs {}

impl FromStr for CallAs {
    type Err = UnknownCallAs;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text-element" => Ok(CallAs::TextElement),
            "element" => Ok(CallAs::Element),
            "function" => Ok(CallAs::Function),
            other => Err(UnknownCallAs(other.to_string())),
        }
    }
}

/// One node of the host-agnostic IR tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IrNode {
    #[serde(rename = "type")]
    pub node_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub call_as: Option<CallAs>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<IrNode>,
    #[serde(default, skip_serializing_if = "Attributes::is_empty")]
    pub attributes: Attributes,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl IrNode {
    /// Create a non-text node with the given type tag and convention.
    pub fn new(node_type: impl Into<String>, call_as: CallAs) -> Self {
        IrNode {
            node_type: node_type.into(),
            call_as: Some(call_as),
            children: Vec::new(),
            attributes: Attributes::new(),
            text: None,
        }
    }

    /// Create a raw text leaf.
    pub fn text(payload: impl Into<String>) -> Self {
        IrNode {
            node_type: TEXT_TYPE.to_string(),
            call_as: None,
            children: Vec::new(),
            attributes: Attributes::new(),
            text: Some(payload.into()),
        }
    }

    /// Append children (builder pattern).
    pub fn with_children(mut self, children: Vec<IrNode>) -> Self {
        self.children.extend(children);
        self
    }

    /// Set one attribute (builder pattern).
    pub fn with_attribute(
        mut self,
        key: impl Into<String>,
        value: impl Into<super::attributes::AttrValue>,
    ) -> Self {
        self.attributes.insert(key, value);
        self
    }

    pub fn is_text(&self) -> bool {
        self.node_type == TEXT_TYPE
    }
}
