//! Tree renderer
//!
//! Transduces IR trees into target-tree node sequences. The renderer itself
//! is generic: it resolves a builder for each node's type tag from the
//! [`BuilderRegistry`], renders children depth-first, shapes the builder
//! call according to the node's calling convention and flattens the result.
//! All host knowledge lives in the registered builders.

pub mod builders;
pub mod call;
pub mod context;
pub mod error;
pub mod registry;
pub mod renderer;

pub use call::BuilderCall;
pub use context::{RenderContext, TargetNotes};
pub use error::RenderError;
pub use registry::{BuilderRegistry, NodeBuilder};
pub use renderer::{render_node, render_node_list};
