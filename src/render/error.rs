//! Render errors
//!
//! Structural errors (unknown type tag, missing convention, malformed
//! special nodes) abort the render call; they indicate a builder/IR mismatch
//! that cannot be recovered locally. Content-level markup errors never reach
//! this enum — the markup sub-renderer degrades them to diagnostic nodes.

use std::fmt;

use crate::domains::DomainError;

/// Error that can occur while rendering an IR tree.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderError {
    /// No builder registered for the node's type tag.
    UnknownNodeType(String),
    /// A non-text node arrived without a calling convention.
    MissingCallAs(String),
    /// A special node is missing a required attribute.
    MissingAttribute {
        node_type: String,
        attribute: String,
    },
    /// A markup-source node has no text child to parse.
    MissingSource(String),
    /// Domain overlay failure for a `domain_entry` node.
    Domain(DomainError),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::UnknownNodeType(tag) => {
                write!(f, "No builder registered for node type '{tag}'")
            }
            RenderError::MissingCallAs(tag) => {
                write!(f, "Node type '{tag}' has no calling convention")
            }
            RenderError::MissingAttribute {
                node_type,
                attribute,
            } => {
                write!(
                    f,
                    "Node type '{node_type}' is missing required attribute '{attribute}'"
                )
            }
            RenderError::MissingSource(tag) => {
                write!(f, "Node type '{tag}' has no markup source to parse")
            }
            RenderError::Domain(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::Domain(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DomainError> for RenderError {
    fn from(err: DomainError) -> Self {
        RenderError::Domain(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_unknown_type() {
        let err = RenderError::UnknownNodeType("mystery".to_string());
        assert_eq!(
            err.to_string(),
            "No builder registered for node type 'mystery'"
        );
    }

    #[test]
    fn test_display_missing_attribute() {
        let err = RenderError::MissingAttribute {
            node_type: "domain_entry".to_string(),
            attribute: "declaration".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Node type 'domain_entry' is missing required attribute 'declaration'"
        );
    }

    #[test]
    fn test_domain_error_wraps() {
        let err = RenderError::from(DomainError::UnsupportedDomain("rust".to_string()));
        assert!(err.to_string().contains("Unsupported domain: rust"));
    }
}
