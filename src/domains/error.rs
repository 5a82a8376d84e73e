//! Domain overlay errors
//!
//! All of these are fatal to the node being rendered: they indicate either a
//! source declaration the capability table has no mapping for, or directive
//! output the overlay cannot splice into. The offending domain/kind pair is
//! always carried so the author can fix the source declaration.

use std::fmt;

/// Error that can occur while rendering a domain entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The domain is not in the capability table.
    UnsupportedDomain(String),
    /// The domain exists but has no entry for this kind.
    UnsupportedKind { domain: String, kind: String },
    /// The directive handler could not parse the declaration string.
    MalformedDeclaration {
        declaration: String,
        reason: String,
    },
    /// Directive output lacked a structurally required node.
    MissingSlot(&'static str),
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainError::UnsupportedDomain(domain) => {
                write!(f, "Unsupported domain: {domain}")
            }
            DomainError::UnsupportedKind { domain, kind } => {
                write!(f, "Unsupported kind \"{kind}\" on domain \"{domain}\"")
            }
            DomainError::MalformedDeclaration {
                declaration,
                reason,
            } => {
                write!(f, "Unable to parse declaration '{declaration}': {reason}")
            }
            DomainError::MissingSlot(slot) => {
                write!(f, "Directive output has no {slot} node")
            }
        }
    }
}

impl std::error::Error for DomainError {}
