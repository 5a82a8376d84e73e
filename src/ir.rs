//! IR data model
//!
//! The host-agnostic intermediate representation consumed by the renderer.
//! Trees of [`IrNode`] arrive from the upstream extraction layer already
//! validated; this module only models them and fails fast on the few
//! structural mismatches the renderer must care about (missing or unknown
//! calling conventions).

pub mod attributes;
pub mod node;

pub use attributes::{AttrValue, Attributes};
pub use node::{CallAs, IrNode, UnknownCallAs, TEXT_TYPE};
