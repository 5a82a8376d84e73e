//! Dependency cache
//!
//! Records, per build, which source artifacts were read while producing
//! which output documents, and decides on each subsequent build — by content
//! hash, not timestamps alone — which documents must be regenerated.
//!
//! Renders accumulate artifact accesses into independent per-document
//! [`AccessTracker`]s; trackers merge into the shared [`DependencyCache`] at
//! a synchronization barrier after all documents of a build have rendered,
//! so concurrent render passes never contend on the shared map.

pub mod cache;
pub mod hash;
pub mod store;
pub mod tracker;

pub use cache::{ArtifactRecord, DependencyCache, DocId};
pub use hash::hash_file;
pub use tracker::AccessTracker;
