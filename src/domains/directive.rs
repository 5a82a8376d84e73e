//! Directive handler interface
//!
//! A domain's native directive machinery parses a declaration string and
//! returns a fully formed declaration subtree (an index node followed by the
//! declaration wrapper). Handlers must be side-effect-free and re-entrant so
//! unrelated documents can share one capability table across worker threads.

use crate::target::TargetNode;

use super::error::DomainError;

/// Parses a source-language declaration into a declaration subtree.
pub trait DeclarationDirective: Send + Sync {
    /// Run the directive.
    ///
    /// `directive_name` is the synthesized `"{domain}:{native_kind}"` name;
    /// `declaration` is the raw declaration string, passed fully qualified
    /// so cross-references resolve against the right scope.
    fn run(
        &self,
        directive_name: &str,
        declaration: &str,
    ) -> Result<Vec<TargetNode>, DomainError>;
}
