//! The artifact dependency map
//!
//! For every artifact read by some build: its content hash and the set of
//! output documents that depend on it. Records are created on first access,
//! their dependent sets grow as documents render, and purged documents are
//! removed from every record — the records themselves are never deleted.

use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use super::hash::hash_file;
use super::tracker::AccessTracker;

/// Identifier of an output document.
pub type DocId = String;

/// What the cache knows about one artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactRecord {
    /// Content hash at the last time the artifact was (re)hashed.
    pub hash: String,
    /// Output documents that read this artifact.
    pub dependents: BTreeSet<DocId>,
}

/// The persisted cache payload.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub(crate) struct CacheState {
    pub(crate) artifacts: BTreeMap<String, ArtifactRecord>,
    /// Previous build timestamp, whole seconds since the Unix epoch.
    pub(crate) last_build: Option<u64>,
}

/// Artifact -> (hash, dependents) map plus the previous build timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DependencyCache {
    pub(crate) state: CacheState,
}

fn epoch_secs(time: SystemTime) -> u64 {
    time.duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

impl DependencyCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `doc_id` read `path`. The artifact is hashed the first
    /// time any build sees it.
    pub fn record_access(&mut self, doc_id: &str, path: &Path) -> std::io::Result<()> {
        let key = path.to_string_lossy().into_owned();
        match self.state.artifacts.get_mut(&key) {
            Some(record) => {
                record.dependents.insert(doc_id.to_string());
            }
            None => {
                let hash = hash_file(path)?;
                let mut dependents = BTreeSet::new();
                dependents.insert(doc_id.to_string());
                self.state
                    .artifacts
                    .insert(key, ArtifactRecord { hash, dependents });
            }
        }
        Ok(())
    }

    /// Merge one document's tracker into the shared map. Called at the
    /// post-render synchronization barrier.
    pub fn absorb(&mut self, tracker: &AccessTracker) -> std::io::Result<()> {
        for path in tracker.paths() {
            self.record_access(tracker.doc_id(), path)?;
        }
        Ok(())
    }

    /// Decide which documents must be re-rendered this build.
    ///
    /// The first build has no baseline, so nothing is stale. Afterwards,
    /// every tracked artifact whose modification time reaches the previous
    /// build's timestamp is rehashed; only a hash change marks its
    /// dependents stale. The stored timestamp always advances to `now`,
    /// even when nothing changed, so the next build's window starts here.
    pub fn compute_stale_set(&mut self, now: SystemTime) -> BTreeSet<DocId> {
        let previous = self.state.last_build;
        self.state.last_build = Some(epoch_secs(now));

        let Some(previous) = previous else {
            return BTreeSet::new();
        };

        let mut stale = BTreeSet::new();
        for (path, record) in &mut self.state.artifacts {
            let changed = match std::fs::metadata(path).and_then(|meta| meta.modified()) {
                // Timestamps are whole seconds, so same-second writes must
                // rehash: skip only strictly older mtimes.
                Ok(mtime) if epoch_secs(mtime) < previous => false,
                Ok(_) => match hash_file(Path::new(path)) {
                    Ok(hash) if hash == record.hash => false,
                    Ok(hash) => {
                        debug!("artifact changed: {path}");
                        record.hash = hash;
                        true
                    }
                    // Unreadable artifact: assume changed.
                    Err(_) => true,
                },
                // Missing artifact: assume changed.
                Err(_) => true,
            };

            if changed {
                stale.extend(record.dependents.iter().cloned());
            }
        }

        debug!("stale documents: {stale:?}");
        stale
    }

    /// Remove a deleted document from every artifact's dependent set.
    pub fn purge(&mut self, doc_id: &str) {
        debug!("purging document {doc_id}");
        for record in self.state.artifacts.values_mut() {
            record.dependents.remove(doc_id);
        }
    }

    /// The record for one artifact, if any build has seen it.
    pub fn record_for(&self, path: &Path) -> Option<&ArtifactRecord> {
        self.state.artifacts.get(path.to_string_lossy().as_ref())
    }

    /// Tracked artifact paths, in sorted order.
    pub fn tracked_artifacts(&self) -> impl Iterator<Item = &str> {
        self.state.artifacts.keys().map(String::as_str)
    }

    /// Previous build timestamp as whole epoch seconds.
    pub fn last_build(&self) -> Option<u64> {
        self.state.last_build
    }
}
