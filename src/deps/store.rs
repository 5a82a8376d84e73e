//! Persisted cache state
//!
//! The artifact map and the last-build timestamp must survive across build
//! invocations. The store format is plain JSON with a defined
//! load/merge/save lifecycle: load (or start empty) before the build,
//! absorb trackers during it, save afterwards.

use std::io;
use std::path::Path;

use super::cache::{CacheState, DependencyCache};

impl DependencyCache {
    /// Load persisted state. A missing file yields a fresh, empty cache.
    pub fn load_from(path: &Path) -> io::Result<Self> {
        if !path.exists() {
            return Ok(Self::new());
        }
        let text = std::fs::read_to_string(path)?;
        let state: CacheState = serde_json::from_str(&text)
            .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;
        Ok(DependencyCache { state })
    }

    /// Persist the current state.
    pub fn save_to(&self, path: &Path) -> io::Result<()> {
        let text = serde_json::to_string_pretty(&self.state)
            .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;
        std::fs::write(path, text)
    }
}
