//! Per-render state
//!
//! A [`RenderContext`] travels mutably through one render pass. It carries
//! the domain capability table, the markup parser memo (section/title
//! tracking for nested parses) and the collector for explicitly noted link
//! targets. The registry itself stays outside the context so builders can
//! never re-enter it.

use std::sync::Arc;

use crate::domains::DomainRegistry;
use crate::markup::ParserMemo;
use crate::target::TargetNode;

/// Explicit link targets noted while rendering, in document order.
///
/// The host registers these with its own cross-reference machinery after the
/// render returns; this collector mirrors that "note explicit target" call.
#[derive(Debug, Default)]
pub struct TargetNotes {
    noted: Vec<String>,
}

impl TargetNotes {
    pub fn note_explicit_target(&mut self, target: &TargetNode) {
        if let Some(refid) = target.attribute("refid") {
            self.noted.push(refid.to_string());
        }
    }

    pub fn noted(&self) -> &[String] {
        &self.noted
    }
}

/// Mutable state for one render pass.
pub struct RenderContext {
    pub domains: Arc<DomainRegistry>,
    pub memo: ParserMemo,
    pub notes: TargetNotes,
}

impl RenderContext {
    pub fn new(domains: Arc<DomainRegistry>) -> Self {
        RenderContext {
            domains,
            memo: ParserMemo::default(),
            notes: TargetNotes::default(),
        }
    }
}

impl Default for RenderContext {
    fn default() -> Self {
        RenderContext::new(Arc::new(DomainRegistry::with_defaults()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_explicit_target() {
        let mut notes = TargetNotes::default();
        notes.note_explicit_target(&TargetNode::element("target").with_attribute("refid", "a"));
        notes.note_explicit_target(&TargetNode::element("target"));
        notes.note_explicit_target(&TargetNode::element("target").with_attribute("refid", "b"));

        assert_eq!(notes.noted(), &["a".to_string(), "b".to_string()]);
    }
}
