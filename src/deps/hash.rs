//! Artifact content hashing
//!
//! SHA-256 over file contents, streamed so large extraction outputs don't
//! land in memory whole. The hash — not the modification time — is the
//! deciding staleness signal; mtime only pre-filters which artifacts are
//! worth rehashing.

use log::debug;
use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Hash a file's contents, returned as lowercase hex.
pub fn hash_file(path: &Path) -> io::Result<String> {
    debug!("hashing {}", path.display());

    let mut file = File::open(path)?;
    let mut hasher = Sha256::new();
    let mut buffer = [0u8; 8192];
    loop {
        let read = file.read(&mut buffer)?;
        if read == 0 {
            break;
        }
        hasher.update(&buffer[..read]);
    }
    Ok(hex::encode(hasher.finalize()))
}
