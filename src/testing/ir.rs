//! Fluent IR construction
//!
//! The conventions encoded here mirror the host catalogue: markup-derived
//! nodes are text elements, structural wrappers are elements, and the
//! special transforms (domain entries, embedded markup) are functions.

use std::collections::BTreeMap;

use crate::ir::{AttrValue, CallAs, IrNode};

/// A raw text leaf.
pub fn text(payload: &str) -> IrNode {
    IrNode::text(payload)
}

/// A node called under the `text-element` convention.
pub fn text_element(node_type: &str, children: Vec<IrNode>) -> IrNode {
    IrNode::new(node_type, CallAs::TextElement).with_children(children)
}

/// A node called under the `element` convention.
pub fn element(node_type: &str, children: Vec<IrNode>) -> IrNode {
    IrNode::new(node_type, CallAs::Element).with_children(children)
}

/// A node called under the `function` convention.
pub fn function(node_type: &str, children: Vec<IrNode>) -> IrNode {
    IrNode::new(node_type, CallAs::Function).with_children(children)
}

/// A paragraph holding one text leaf.
pub fn paragraph(body: &str) -> IrNode {
    text_element("paragraph", vec![text(body)])
}

/// The target descriptor attribute value for an anchor with `refid`.
pub fn target_descriptor(refid: &str) -> AttrValue {
    let mut map = BTreeMap::new();
    map.insert("refid".to_string(), AttrValue::from(refid));
    map.insert("ids".to_string(), AttrValue::from(refid));
    AttrValue::Map(map)
}

/// A `{path, line}` location attribute value.
pub fn location(path: &str, line: i64) -> AttrValue {
    let mut map = BTreeMap::new();
    map.insert("path".to_string(), AttrValue::from(path));
    map.insert("line".to_string(), AttrValue::from(line));
    AttrValue::Map(map)
}

/// A `domain_entry` node with an anchor and pre-rendered content children.
pub fn domain_entry(
    domain: &str,
    kind: &str,
    declaration: &str,
    refid: &str,
    content: Vec<IrNode>,
) -> IrNode {
    function("domain_entry", content)
        .with_attribute("domain", domain)
        .with_attribute("type", kind)
        .with_attribute("declaration", declaration)
        .with_attribute("target", target_descriptor(refid))
}

/// A block-level embedded markup node.
pub fn rst_block(source: &str) -> IrNode {
    function("restructured_text_block", vec![text(source)])
}

/// An inline embedded markup node.
pub fn rst_inline(source: &str) -> IrNode {
    function("restructured_text_inline", vec![text(source)])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_entry_shape() {
        let node = domain_entry("cpp", "function", "int f()", "fn-f", vec![paragraph("Doc.")]);
        assert_eq!(node.node_type, "domain_entry");
        assert_eq!(node.call_as, Some(CallAs::Function));
        assert_eq!(node.attributes.get_str("declaration"), Some("int f()"));
        assert_eq!(node.children.len(), 1);

        let target = node.attributes.get_map("target").unwrap();
        assert_eq!(target["refid"].as_str(), Some("fn-f"));
    }

    #[test]
    fn test_paragraph_shape() {
        let node = paragraph("hello");
        assert_eq!(node.call_as, Some(CallAs::TextElement));
        assert!(node.children[0].is_text());
    }
}
