//! Builder registry
//!
//! Maps an IR type tag to the construction function for the matching target
//! node. The registry is keyed purely by type; the calling convention comes
//! from the node itself, so a registered builder and the convention used for
//! its type must agree across the whole system.
//!
//! The host integration layer supplies the mapping once at startup;
//! [`BuilderRegistry::with_defaults`] provides the standard catalogue of the
//! publishing host this crate was built against.

use std::collections::HashMap;

use super::builders::{
    DomainEntryBuilder, InternalReferenceBuilder, RichTextBlockBuilder, RichTextInlineBuilder,
    SimpleBuilder, TargetBuilder,
};
use super::call::BuilderCall;
use super::context::RenderContext;
use super::error::RenderError;
use crate::target::TargetNode;

/// Constructs target nodes for one IR type tag.
///
/// A builder always returns a sequence; zero, one or many nodes are all
/// legal and the renderer flattens them into the parent's output.
pub trait NodeBuilder: Send + Sync {
    fn build(
        &self,
        call: BuilderCall,
        ctx: &mut RenderContext,
    ) -> Result<Vec<TargetNode>, RenderError>;
}

/// Registry of node builders, keyed by IR type tag.
pub struct BuilderRegistry {
    builders: HashMap<String, Box<dyn NodeBuilder>>,
}

impl BuilderRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        BuilderRegistry {
            builders: HashMap::new(),
        }
    }

    /// Register a builder for a type tag.
    ///
    /// If a builder is already registered for the tag, it is replaced.
    pub fn register<B: NodeBuilder + 'static>(&mut self, node_type: &str, builder: B) {
        self.builders.insert(node_type.to_string(), Box::new(builder));
    }

    /// Get the builder for a type tag.
    pub fn get(&self, node_type: &str) -> Option<&dyn NodeBuilder> {
        self.builders.get(node_type).map(|b| b.as_ref())
    }

    pub fn has(&self, node_type: &str) -> bool {
        self.builders.contains_key(node_type)
    }

    /// List all registered type tags (sorted).
    pub fn list_types(&self) -> Vec<String> {
        let mut types: Vec<_> = self.builders.keys().cloned().collect();
        types.sort();
        types
    }

    /// Create a registry with the standard host catalogue.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        // Plain structural nodes: the IR tag and the host tag coincide.
        for tag in [
            "bullet_list",
            "colspec",
            "container",
            "desc",
            "desc_content",
            "desc_name",
            "desc_parameter",
            "desc_parameterlist",
            "desc_sig_keyword",
            "desc_sig_name",
            "desc_sig_space",
            "desc_signature",
            "desc_signature_line",
            "emphasis",
            "entry",
            "enumerated_list",
            "field",
            "field_body",
            "field_list",
            "field_name",
            "image",
            "index",
            "inline",
            "list_item",
            "literal",
            "literal_block",
            "literal_strong",
            "note",
            "only",
            "paragraph",
            "raw",
            "row",
            "rubric",
            "strong",
            "table",
            "tbody",
            "tgroup",
            "thead",
            "warning",
        ] {
            registry.register(tag, SimpleBuilder::new(tag));
        }

        // Tags whose host name differs from the IR tag.
        registry.register("external_reference", SimpleBuilder::new("reference"));
        registry.register("see_also", SimpleBuilder::new("seealso"));

        // Special builders.
        registry.register("internal_reference", InternalReferenceBuilder);
        registry.register("restructured_text_block", RichTextBlockBuilder);
        registry.register("restructured_text_inline", RichTextInlineBuilder);
        registry.register("target", TargetBuilder);
        registry.register("domain_entry", DomainEntryBuilder);

        registry
    }
}

impl Default for BuilderRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
