//! Domain overlay
//!
//! Synthesizes fully-formed symbol declarations for `domain_entry` IR nodes.
//! A capability table maps a `(domain, kind)` pair to the domain's directive
//! handler, its internal name for the kind and a post-processing chain; the
//! overlay invokes the handler to parse the declaration, splices the anchor
//! target and the caller's rendered content into the returned subtree, and
//! applies the kind-specific post-processing (qualifier stripping, source
//! location tagging).

pub mod declaration;
pub mod directive;
pub mod error;
pub mod links;
pub mod location;
pub mod overlay;
pub mod post;
pub mod registry;

pub use directive::DeclarationDirective;
pub use error::DomainError;
pub use links::SourceLinkResolver;
pub use location::SourceLocation;
pub use overlay::{render_domain_entry, DeclarationRequest};
pub use registry::{DomainRegistry, KindEntry};
