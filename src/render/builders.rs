//! Default node builders
//!
//! The standard catalogue: plain structural builders that wrap rendered
//! children in a host node, plus the special builders for targets,
//! cross-references, embedded markup and domain entries.

use std::collections::BTreeMap;

use super::call::BuilderCall;
use super::context::RenderContext;
use super::error::RenderError;
use super::registry::NodeBuilder;
use crate::domains::{self, DeclarationRequest, SourceLocation};
use crate::ir::AttrValue;
use crate::markup::{self, ParseMode};
use crate::target::{tags, TargetNode};

/// Flatten an IR attribute value onto the string form target nodes carry.
///
/// Lists join with spaces (the host convention for multi-valued attributes
/// like `ids` and `classes`); nested structures are not representable and
/// yield `None`.
fn flatten_attr(value: &AttrValue) -> Option<String> {
    match value {
        AttrValue::Str(s) => Some(s.clone()),
        AttrValue::Int(i) => Some(i.to_string()),
        AttrValue::Bool(b) => Some(b.to_string()),
        AttrValue::List(items) => {
            let parts: Vec<String> = items.iter().filter_map(flatten_attr).collect();
            Some(parts.join(" "))
        }
        AttrValue::Map(_) | AttrValue::Node(_) => None,
    }
}

fn apply_attributes(node: &mut TargetNode, call: &BuilderCall) {
    for (key, value) in call.attributes.iter() {
        if let Some(flat) = flatten_attr(value) {
            node.set_attribute(key.clone(), flat);
        }
    }
}

/// Builds one host element with the rendered children and attributes.
pub struct SimpleBuilder {
    tag: &'static str,
}

impl SimpleBuilder {
    pub fn new(tag: &'static str) -> Self {
        SimpleBuilder { tag }
    }
}

impl NodeBuilder for SimpleBuilder {
    fn build(
        &self,
        call: BuilderCall,
        _ctx: &mut RenderContext,
    ) -> Result<Vec<TargetNode>, RenderError> {
        let mut node = TargetNode::element(self.tag);
        if let Some(raw) = &call.raw_source {
            node.set_raw_source(raw.clone());
        }
        apply_attributes(&mut node, &call);
        if let Some(raw_text) = &call.raw_text {
            if !raw_text.is_empty() {
                node.push_child(TargetNode::text(raw_text.clone()));
            }
        }
        let children = call.children;
        Ok(vec![node.with_children(children)])
    }
}

/// Construct an anchor node from a target descriptor map and note it as an
/// explicit link target.
pub(crate) fn build_target_node(
    descriptor: &BTreeMap<String, AttrValue>,
    ctx: &mut RenderContext,
) -> TargetNode {
    let mut target = TargetNode::element(tags::TARGET);
    for (key, value) in descriptor {
        if let Some(flat) = flatten_attr(value) {
            target.set_attribute(key.clone(), flat);
        }
    }
    ctx.notes.note_explicit_target(&target);
    target
}

/// Builds an anchor node and registers it as an explicit target.
pub struct TargetBuilder;

impl NodeBuilder for TargetBuilder {
    fn build(
        &self,
        call: BuilderCall,
        ctx: &mut RenderContext,
    ) -> Result<Vec<TargetNode>, RenderError> {
        let mut target = TargetNode::element(tags::TARGET);
        apply_attributes(&mut target, &call);
        ctx.notes.note_explicit_target(&target);
        Ok(vec![target.with_children(call.children)])
    }
}

/// Builds a pending cross-reference resolved by the host at link time.
pub struct InternalReferenceBuilder;

impl NodeBuilder for InternalReferenceBuilder {
    fn build(
        &self,
        call: BuilderCall,
        _ctx: &mut RenderContext,
    ) -> Result<Vec<TargetNode>, RenderError> {
        let refid = call
            .attributes
            .get_str("refid")
            .ok_or_else(|| RenderError::MissingAttribute {
                node_type: "internal_reference".to_string(),
                attribute: "refid".to_string(),
            })?
            .to_string();

        let reference = TargetNode::element("pending_xref")
            .with_attribute("reftype", "ref")
            .with_attribute("refdomain", "std")
            .with_attribute("refexplicit", "true")
            .with_attribute("refid", refid.clone())
            .with_attribute("reftarget", refid)
            .with_children(call.children);
        Ok(vec![reference])
    }
}

/// Parses an embedded block-level markup fragment with the document grammar.
pub struct RichTextBlockBuilder;

impl NodeBuilder for RichTextBlockBuilder {
    fn build(
        &self,
        call: BuilderCall,
        ctx: &mut RenderContext,
    ) -> Result<Vec<TargetNode>, RenderError> {
        let source = call
            .source_text()
            .ok_or_else(|| RenderError::MissingSource("restructured_text_block".to_string()))?;
        Ok(markup::nested_parse(source, ParseMode::Block, &mut ctx.memo))
    }
}

/// Parses an embedded inline markup fragment as a single inline run.
pub struct RichTextInlineBuilder;

impl NodeBuilder for RichTextInlineBuilder {
    fn build(
        &self,
        call: BuilderCall,
        ctx: &mut RenderContext,
    ) -> Result<Vec<TargetNode>, RenderError> {
        let source = call
            .source_text()
            .ok_or_else(|| RenderError::MissingSource("restructured_text_inline".to_string()))?;
        Ok(markup::nested_parse(source, ParseMode::Inline, &mut ctx.memo))
    }
}

/// Synthesizes a cross-reference domain entry for a declaration.
pub struct DomainEntryBuilder;

impl DomainEntryBuilder {
    fn required<'a>(call: &'a BuilderCall, attribute: &str) -> Result<&'a str, RenderError> {
        call.attributes
            .get_str(attribute)
            .ok_or_else(|| RenderError::MissingAttribute {
                node_type: "domain_entry".to_string(),
                attribute: attribute.to_string(),
            })
    }
}

impl NodeBuilder for DomainEntryBuilder {
    fn build(
        &self,
        call: BuilderCall,
        ctx: &mut RenderContext,
    ) -> Result<Vec<TargetNode>, RenderError> {
        let domain = Self::required(&call, "domain")?.to_string();
        let kind = Self::required(&call, "type")?.to_string();
        let declaration = Self::required(&call, "declaration")?.to_string();

        let location = call
            .attributes
            .get_map("location")
            .and_then(SourceLocation::from_map);

        let descriptor =
            call.attributes
                .get_map("target")
                .ok_or_else(|| RenderError::MissingAttribute {
                    node_type: "domain_entry".to_string(),
                    attribute: "target".to_string(),
                })?;
        let target = build_target_node(descriptor, ctx);

        let request = DeclarationRequest {
            domain,
            kind,
            declaration,
            location,
            target,
            content: call.children,
        };

        let registry = ctx.domains.clone();
        domains::render_domain_entry(&registry, request).map_err(RenderError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::Attributes;
    use crate::ir::CallAs;

    fn call_with(attributes: Attributes, children: Vec<TargetNode>) -> BuilderCall {
        BuilderCall::for_convention(CallAs::Element, children, attributes)
    }

    #[test]
    fn test_simple_builder_wraps_children() {
        let mut ctx = RenderContext::default();
        let mut attrs = Attributes::new();
        attrs.insert("ids", AttrValue::List(vec!["a".into(), "b".into()]));

        let out = SimpleBuilder::new("paragraph")
            .build(call_with(attrs, vec![TargetNode::text("body")]), &mut ctx)
            .unwrap();

        assert_eq!(out.len(), 1);
        assert_eq!(out[0].tag(), "paragraph");
        assert_eq!(out[0].attribute("ids"), Some("a b"));
        assert_eq!(out[0].as_text(), "body");
    }

    #[test]
    fn test_target_builder_notes_target() {
        let mut ctx = RenderContext::default();
        let mut attrs = Attributes::new();
        attrs.insert("refid", "fn-add");

        let out = TargetBuilder.build(call_with(attrs, vec![]), &mut ctx).unwrap();
        assert_eq!(out[0].tag(), "target");
        assert_eq!(ctx.notes.noted(), &["fn-add".to_string()]);
    }

    #[test]
    fn test_internal_reference_requires_refid() {
        let mut ctx = RenderContext::default();
        let err = InternalReferenceBuilder
            .build(call_with(Attributes::new(), vec![]), &mut ctx)
            .unwrap_err();
        assert!(matches!(err, RenderError::MissingAttribute { .. }));
    }

    #[test]
    fn test_internal_reference_shape() {
        let mut ctx = RenderContext::default();
        let mut attrs = Attributes::new();
        attrs.insert("refid", "structfoo");

        let out = InternalReferenceBuilder
            .build(call_with(attrs, vec![TargetNode::text("Foo")]), &mut ctx)
            .unwrap();
        let reference = &out[0];
        assert_eq!(reference.tag(), "pending_xref");
        assert_eq!(reference.attribute("reftarget"), Some("structfoo"));
        assert_eq!(reference.attribute("refdomain"), Some("std"));
        assert_eq!(reference.as_text(), "Foo");
    }

    #[test]
    fn test_rich_text_block_requires_source() {
        let mut ctx = RenderContext::default();
        let err = RichTextBlockBuilder
            .build(call_with(Attributes::new(), vec![]), &mut ctx)
            .unwrap_err();
        assert!(matches!(err, RenderError::MissingSource(_)));
    }
}
