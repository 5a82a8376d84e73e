//! Source locations and their identity encoding
//!
//! A declaration's origin is encoded into the signature node's `names`
//! attribute as `"{path}:{line}"` for later consumption by an external
//! source-link resolver. Decoding must fail silently — the identity field is
//! shared with other producers, so anything unexpected simply means "no
//! link", never an aborted build.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;

use crate::ir::AttrValue;

/// `path:line`, split at the last colon so paths may contain colons.
static IDENTITY: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(.+):([0-9]+)$").unwrap());

/// File path and line a declaration originates from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLocation {
    pub path: String,
    pub line: u64,
}

impl SourceLocation {
    pub fn new(path: impl Into<String>, line: u64) -> Self {
        SourceLocation {
            path: path.into(),
            line,
        }
    }

    /// The identity encoding written into the signature's `names` field.
    pub fn identity(&self) -> String {
        format!("{}:{}", self.path, self.line)
    }

    /// Decode an identity string. Returns `None` for anything that is not a
    /// well-formed `path:line`.
    pub fn decode(identity: &str) -> Option<Self> {
        let caps = IDENTITY.captures(identity)?;
        let line = caps.get(2)?.as_str().parse().ok()?;
        Some(SourceLocation {
            path: caps.get(1)?.as_str().to_string(),
            line,
        })
    }

    /// Read a location from a `{path, line}` attribute map.
    pub fn from_map(map: &BTreeMap<String, AttrValue>) -> Option<Self> {
        let path = map.get("path")?.as_str()?.to_string();
        let line = match map.get("line")? {
            AttrValue::Int(line) => u64::try_from(*line).ok()?,
            AttrValue::Str(line) => line.parse().ok()?,
            _ => return None,
        };
        Some(SourceLocation { path, line })
    }
}
