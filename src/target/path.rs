//! Paths into a rendered node sequence
//!
//! Directive handlers return a flat sequence of roots; the finder records
//! where the structurally significant nodes live as index paths so callers
//! can come back and mutate them one at a time. The first path segment
//! selects the root, the rest descend through children.

use super::node::TargetNode;

/// An index path addressing one node inside a sequence of root nodes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NodePath {
    segments: Vec<usize>,
}

impl NodePath {
    pub fn new(segments: Vec<usize>) -> Self {
        NodePath { segments }
    }

    pub fn segments(&self) -> &[usize] {
        &self.segments
    }

    pub fn push(&mut self, index: usize) {
        self.segments.push(index);
    }

    pub fn pop(&mut self) {
        self.segments.pop();
    }

    /// Resolve this path against a root sequence.
    pub fn resolve<'a>(&self, roots: &'a [TargetNode]) -> Option<&'a TargetNode> {
        let (first, rest) = self.segments.split_first()?;
        let mut node = roots.get(*first)?;
        for index in rest {
            node = node.children().get(*index)?;
        }
        Some(node)
    }

    /// Resolve this path against a root sequence, mutably.
    pub fn resolve_mut<'a>(&self, roots: &'a mut [TargetNode]) -> Option<&'a mut TargetNode> {
        let (first, rest) = self.segments.split_first()?;
        let mut node = roots.get_mut(*first)?;
        for index in rest {
            node = node.child_mut(*index)?;
        }
        Some(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roots() -> Vec<TargetNode> {
        vec![
            TargetNode::element("index"),
            TargetNode::element("desc").with_children(vec![
                TargetNode::element("desc_signature")
                    .with_children(vec![TargetNode::element("desc_name")]),
                TargetNode::element("desc_content"),
            ]),
        ]
    }

    #[test]
    fn test_resolve_root() {
        let roots = roots();
        let path = NodePath::new(vec![1]);
        assert_eq!(path.resolve(&roots).unwrap().tag(), "desc");
    }

    #[test]
    fn test_resolve_nested() {
        let roots = roots();
        let path = NodePath::new(vec![1, 0, 0]);
        assert_eq!(path.resolve(&roots).unwrap().tag(), "desc_name");
    }

    #[test]
    fn test_resolve_out_of_bounds() {
        let roots = roots();
        assert!(NodePath::new(vec![2]).resolve(&roots).is_none());
        assert!(NodePath::new(vec![1, 5]).resolve(&roots).is_none());
        assert!(NodePath::new(vec![]).resolve(&roots).is_none());
    }

    #[test]
    fn test_resolve_mut_allows_splice() {
        let mut roots = roots();
        let path = NodePath::new(vec![1, 1]);
        path.resolve_mut(&mut roots)
            .unwrap()
            .push_child(TargetNode::text("body"));
        assert_eq!(roots[1].children()[1].as_text(), "body");
    }
}
