//! Tree visualization serializer
//!
//! Renders a target-node sequence as an indented text tree for debugging
//! and snapshot tests. Attributes print in key order, so output for a given
//! tree is stable.

use super::node::TargetNode;

const INDENT: &str = "    ";

/// Serialize a node sequence to the treeviz text format.
pub fn render_tree(nodes: &[TargetNode]) -> String {
    let mut out = String::new();
    for node in nodes {
        render_node(node, 0, &mut out);
    }
    out
}

fn render_node(node: &TargetNode, depth: usize, out: &mut String) {
    for _ in 0..depth {
        out.push_str(INDENT);
    }

    if node.is_text() {
        out.push_str("#text ");
        out.push_str(&format!("{:?}", node.payload().unwrap_or("")));
        out.push('\n');
        return;
    }

    out.push_str(node.tag());
    for (key, value) in node.attributes() {
        out.push(' ');
        out.push_str(key);
        out.push('=');
        out.push_str(value);
    }
    out.push('\n');

    for child in node.children() {
        render_node(child, depth + 1, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_nested_tree() {
        let nodes = vec![TargetNode::element("paragraph").with_children(vec![
            TargetNode::text("see "),
            TargetNode::element("emphasis").with_children(vec![TargetNode::text("this")]),
        ])];

        let expected = "paragraph\n    #text \"see \"\n    emphasis\n        #text \"this\"\n";
        assert_eq!(render_tree(&nodes), expected);
    }

    #[test]
    fn test_attributes_in_key_order() {
        let nodes = vec![TargetNode::element("target")
            .with_attribute("refid", "fn-add")
            .with_attribute("ids", "fn-add")];

        assert_eq!(render_tree(&nodes), "target ids=fn-add refid=fn-add\n");
    }

    #[test]
    fn test_multiple_roots() {
        let nodes = vec![
            TargetNode::element("index"),
            TargetNode::element("desc"),
        ];
        assert_eq!(render_tree(&nodes), "index\ndesc\n");
    }
}
