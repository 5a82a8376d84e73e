//! Kind-specific post-processing
//!
//! Declarations are passed to the directive fully qualified so
//! cross-references resolve correctly, but the qualifying prefix must not be
//! visible in rendered output; and when a source location is supplied it is
//! encoded into the signature's identity field for the external link
//! resolver. Each step is a plain function; a kind's chain is the slice of
//! steps the capability table lists for it.

use crate::target::{tags, NodePath, TargetNode};

use super::location::SourceLocation;

/// The slot paths the finder recorded in the directive output.
#[derive(Debug, Clone)]
pub struct DeclarationSlots {
    pub signature: NodePath,
    pub declarator: NodePath,
    pub content: NodePath,
}

/// One post-processing step applied to the rendered entry.
pub type PostProcess = fn(&mut [TargetNode], &DeclarationSlots, Option<&SourceLocation>);

/// Remove the qualifier-prefix node from the declarator so the qualifier is
/// not shown; the entity's nesting already conveys it. Idempotent, and a
/// no-op for declarations that were not qualified.
pub fn strip_qualifier_prefix(
    roots: &mut [TargetNode],
    slots: &DeclarationSlots,
    _location: Option<&SourceLocation>,
) {
    if let Some(declarator) = slots.declarator.resolve_mut(roots) {
        declarator.retain_children(|child| child.tag() != tags::DESC_ADDNAME);
    }
}

/// Encode the source location into the signature's `names` identity field.
pub fn tag_location(
    roots: &mut [TargetNode],
    slots: &DeclarationSlots,
    location: Option<&SourceLocation>,
) {
    let Some(location) = location else {
        return;
    };
    if let Some(signature) = slots.signature.resolve_mut(roots) {
        signature.set_attribute("names", location.identity());
    }
}

/// Post chain for kinds with no natural qualifier to strip.
pub const LOCATION_ONLY: &[PostProcess] = &[tag_location];

/// Post chain for nested kinds whose qualifier must disappear from display.
pub const STRIP_AND_LOCATION: &[PostProcess] = &[strip_qualifier_prefix, tag_location];
