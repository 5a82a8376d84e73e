//! Per-document access tracking
//!
//! One tracker accompanies each render pass and records every artifact path
//! read while producing that document. Trackers are independent — render
//! passes for different documents may run on different worker threads — and
//! merge into the shared cache only at the post-render barrier.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Accumulates the artifact paths one document's render reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessTracker {
    doc_id: String,
    paths: BTreeSet<PathBuf>,
}

impl AccessTracker {
    pub fn new(doc_id: impl Into<String>) -> Self {
        AccessTracker {
            doc_id: doc_id.into(),
            paths: BTreeSet::new(),
        }
    }

    /// Record one artifact read. Repeat reads collapse.
    pub fn record(&mut self, path: impl AsRef<Path>) {
        self.paths.insert(path.as_ref().to_path_buf());
    }

    pub fn doc_id(&self) -> &str {
        &self.doc_id
    }

    /// The recorded paths, in sorted order.
    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.paths.iter().map(PathBuf::as_path)
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}
