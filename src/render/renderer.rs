//! The generic IR-tree transducer
//!
//! Depth-first, left-to-right, order-preserving. Every builder returns a
//! sequence and the results flatten into the parent's output, so a builder
//! is free to expand to zero, one or many target nodes.

use log::trace;

use super::call::BuilderCall;
use super::context::RenderContext;
use super::error::RenderError;
use super::registry::BuilderRegistry;
use crate::ir::IrNode;
use crate::target::TargetNode;

/// Render a list of IR nodes into a flat target-node sequence.
pub fn render_node_list(
    nodes: &[IrNode],
    registry: &BuilderRegistry,
    ctx: &mut RenderContext,
) -> Result<Vec<TargetNode>, RenderError> {
    let mut out = Vec::new();
    for node in nodes {
        out.extend(render_node(node, registry, ctx)?);
    }
    Ok(out)
}

/// Render one IR node.
///
/// A `"text"` node emits exactly one opaque text leaf. Any other node
/// resolves its builder by type tag, renders all children first, then
/// invokes the builder under the node's calling convention. An unknown type
/// tag or a missing convention is a hard failure; silent omission would
/// corrupt document structure invisibly.
pub fn render_node(
    node: &IrNode,
    registry: &BuilderRegistry,
    ctx: &mut RenderContext,
) -> Result<Vec<TargetNode>, RenderError> {
    if node.is_text() {
        return Ok(vec![TargetNode::text(node.text.clone().unwrap_or_default())]);
    }

    let builder = registry
        .get(&node.node_type)
        .ok_or_else(|| RenderError::UnknownNodeType(node.node_type.clone()))?;

    let call_as = node
        .call_as
        .ok_or_else(|| RenderError::MissingCallAs(node.node_type.clone()))?;

    trace!("rendering node type={} call_as={}", node.node_type, call_as);

    let children = render_node_list(&node.children, registry, ctx)?;
    let call = BuilderCall::for_convention(call_as, children, node.attributes.clone());
    builder.build(call, ctx)
}
