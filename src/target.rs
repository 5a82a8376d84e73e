//! Target tree model
//!
//! The publishing host's own node structure, modelled as an owned tree with
//! explicit child-management primitives. Splicing operations elsewhere in
//! the crate (content replacement, anchor insertion, qualifier stripping)
//! all go through these primitives rather than raw list surgery.

pub mod finder;
pub mod node;
pub mod path;
pub mod tags;
pub mod treeviz;

pub use finder::SignatureFinder;
pub use node::TargetNode;
pub use path::NodePath;
pub use treeviz::render_tree;
