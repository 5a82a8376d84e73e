//! Locating the structurally significant declaration nodes
//!
//! A directive handler returns a declaration subtree containing a signature
//! node and a content container. The finder walks the returned sequence and
//! records paths to:
//!
//! - the **signature**: the last `desc_signature` seen (a multi-declarator
//!   entry keeps only the final one, which is the actual declarator rather
//!   than a `template <...>` prefix);
//! - the **declarator**: same as the signature, unless the signature is
//!   split into `desc_signature_line` children, in which case the last line
//!   holds the declarator and is preferred;
//! - the **content**: the first `desc_content`, whose own children are not
//!   walked (they are about to be replaced anyway, and may contain node
//!   kinds this crate knows nothing about).

use super::node::TargetNode;
use super::path::NodePath;
use super::tags;

/// Walks a rendered node sequence recording declaration slot paths.
#[derive(Debug, Default)]
pub struct SignatureFinder {
    pub signature: Option<NodePath>,
    pub declarator: Option<NodePath>,
    pub content: Option<NodePath>,
}

impl SignatureFinder {
    /// Walk a root sequence and return the recorded slots.
    pub fn walk(roots: &[TargetNode]) -> Self {
        let mut finder = SignatureFinder::default();
        let mut path = NodePath::default();
        for (index, root) in roots.iter().enumerate() {
            path.push(index);
            finder.visit(root, &mut path);
            path.pop();
        }
        finder
    }

    fn visit(&mut self, node: &TargetNode, path: &mut NodePath) {
        match node.tag() {
            tags::DESC_SIGNATURE => {
                self.signature = Some(path.clone());
                self.declarator = Some(path.clone());
            }
            tags::DESC_SIGNATURE_LINE => {
                self.declarator = Some(path.clone());
            }
            tags::DESC_CONTENT => {
                if self.content.is_none() {
                    self.content = Some(path.clone());
                }
                // Do not descend into the description body.
                return;
            }
            _ => {}
        }

        for (index, child) in node.children().iter().enumerate() {
            path.push(index);
            self.visit(child, path);
            path.pop();
        }
    }
}
