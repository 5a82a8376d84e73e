//! Domain entry rendering
//!
//! The splice algorithm: run the domain's directive over the declaration,
//! locate the declarator and content slots in its output, replace the
//! content container's children with the caller's pre-rendered description
//! body, insert the anchor target ahead of the signature tokens, then apply
//! the kind's post-processing chain. The directive's output sequence is
//! mutated in place and returned.

use log::trace;

use crate::target::{SignatureFinder, TargetNode};

use super::error::DomainError;
use super::location::SourceLocation;
use super::post::DeclarationSlots;
use super::registry::DomainRegistry;

/// Everything needed to render one domain entry.
#[derive(Debug)]
pub struct DeclarationRequest {
    pub domain: String,
    pub kind: String,
    /// The declaration, fully qualified so the directive resolves
    /// cross-references against the right scope.
    pub declaration: String,
    pub location: Option<SourceLocation>,
    /// Anchor node spliced ahead of the rendered signature tokens.
    pub target: TargetNode,
    /// Pre-rendered description body.
    pub content: Vec<TargetNode>,
}

/// Render a domain entry into its final node sequence.
pub fn render_domain_entry(
    registry: &DomainRegistry,
    request: DeclarationRequest,
) -> Result<Vec<TargetNode>, DomainError> {
    let entry = registry.lookup(&request.domain, &request.kind)?;

    let directive_name = format!("{}:{}", request.domain, entry.native_kind);
    trace!(
        "domain entry: {} declaration={}",
        directive_name,
        request.declaration
    );
    let mut roots = entry.directive.run(&directive_name, &request.declaration)?;

    let finder = SignatureFinder::walk(&roots);
    let slots = DeclarationSlots {
        signature: finder
            .signature
            .ok_or(DomainError::MissingSlot("desc_signature"))?,
        declarator: finder
            .declarator
            .ok_or(DomainError::MissingSlot("desc_signature"))?,
        content: finder
            .content
            .ok_or(DomainError::MissingSlot("desc_content"))?,
    };

    // The description body replaces whatever default content the directive
    // produced, attached through the container's own child management.
    slots
        .content
        .resolve_mut(&mut roots)
        .ok_or(DomainError::MissingSlot("desc_content"))?
        .replace_children(request.content);

    // The anchor precedes the rendered name/signature tokens.
    slots
        .declarator
        .resolve_mut(&mut roots)
        .ok_or(DomainError::MissingSlot("desc_signature"))?
        .insert_child(0, request.target);

    for post in entry.post {
        post(&mut roots, &slots, request.location.as_ref());
    }

    Ok(roots)
}
