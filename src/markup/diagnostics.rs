//! Markup diagnostics
//!
//! A syntax error inside an embedded fragment must not blank the whole
//! document, so errors are carried as values and rendered into the output
//! as `problematic` nodes at the point of failure.

use std::fmt;

use crate::target::{tags, TargetNode};

use super::lines::VIRTUAL_SOURCE;

/// A recoverable markup syntax error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkupError {
    pub message: String,
}

impl MarkupError {
    pub fn new(message: impl Into<String>) -> Self {
        MarkupError {
            message: message.into(),
        }
    }
}

impl fmt::Display for MarkupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for MarkupError {}

/// Render an error as an inline diagnostic node.
pub fn problematic(error: &MarkupError, line: usize) -> TargetNode {
    TargetNode::element(tags::PROBLEMATIC)
        .with_attribute("source", VIRTUAL_SOURCE)
        .with_attribute("line", line.to_string())
        .with_children(vec![TargetNode::text(error.message.clone())])
}
