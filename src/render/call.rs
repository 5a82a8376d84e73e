//! Builder call shaping
//!
//! The host's node constructors expect different leading arguments depending
//! on their kind: text elements take a raw-source string and a raw-text
//! string, plain elements take only raw source, and pure functions take
//! neither. [`BuilderCall::for_convention`] materializes those placeholders
//! from the node's calling convention; the renderer always passes empty
//! strings, matching the host convention for programmatically built nodes.

use crate::ir::{Attributes, CallAs};
use crate::target::TargetNode;

/// The shaped arguments handed to a [`super::NodeBuilder`].
#[derive(Debug, Clone, PartialEq)]
pub struct BuilderCall {
    /// Raw-source placeholder; present for `element` and `text-element`.
    pub raw_source: Option<String>,
    /// Raw-text placeholder; present only for `text-element`.
    pub raw_text: Option<String>,
    /// Children, already rendered depth-first in document order.
    pub children: Vec<TargetNode>,
    /// The IR node's attributes, passed through keyword-style.
    pub attributes: Attributes,
}

impl BuilderCall {
    pub fn for_convention(
        call_as: CallAs,
        children: Vec<TargetNode>,
        attributes: Attributes,
    ) -> Self {
        let (raw_source, raw_text) = match call_as {
            CallAs::TextElement => (Some(String::new()), Some(String::new())),
            CallAs::Element => (Some(String::new()), None),
            CallAs::Function => (None, None),
        };
        BuilderCall {
            raw_source,
            raw_text,
            children,
            attributes,
        }
    }

    /// The markup source carried by a rich-text node: the payload of its
    /// single text child.
    pub fn source_text(&self) -> Option<&str> {
        match self.children.as_slice() {
            [child] => child.payload(),
            _ => None,
        }
    }
}
