//! # docbridge
//!
//! Renders an intermediate representation of structured API documentation
//! (extracted upstream from Doxygen-style XML) into the node taxonomy of a
//! documentation-publishing host.
//!
//! The crate is organised around three cores:
//!
//! - [`render`] walks an IR tree and drives host-node construction through a
//!   pluggable, calling-convention-aware builder registry.
//! - [`domains`] synthesizes cross-reference domain entries for declarations
//!   (functions, classes, enums, ...) and splices rendered content and anchor
//!   targets into the declaration subtree.
//! - [`deps`] tracks which source artifacts each output document read and
//!   decides, by content hash, which documents an incremental build must
//!   regenerate.
//!
//! [`markup`] supports the renderer by parsing embedded markup fragments with
//! the surrounding document's own grammar, and [`target`] provides the owned
//! host-tree node model everything produces.
//!
//! ## Testing
//!
//! Unit tests live in `#[cfg(test)]` modules next to the code; scenario and
//! property suites live under `tests/`. The [`testing`] module provides the
//! IR construction helpers both layers share.

pub mod deps;
pub mod domains;
pub mod ir;
pub mod markup;
pub mod render;
pub mod target;
pub mod testing;
