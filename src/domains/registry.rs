//! Domain capability table
//!
//! Maps a `(domain, kind)` pair to the domain's native directive handler,
//! the domain's own name for the kind, and the post-processing chain. The
//! table is read-only after initialization and extensible without touching
//! the renderer.

use std::collections::HashMap;
use std::sync::Arc;

use super::declaration::BuiltinDeclarationDirective;
use super::directive::DeclarationDirective;
use super::error::DomainError;
use super::post::{PostProcess, LOCATION_ONLY, STRIP_AND_LOCATION};

/// Capabilities registered for one declaration kind.
#[derive(Clone)]
pub struct KindEntry {
    pub directive: Arc<dyn DeclarationDirective>,
    /// The domain's internal name for the kind (e.g. `define` -> `macro`).
    pub native_kind: &'static str,
    pub post: &'static [PostProcess],
}

impl std::fmt::Debug for KindEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KindEntry")
            .field("native_kind", &self.native_kind)
            .field("post", &self.post)
            .finish_non_exhaustive()
    }
}

/// Registry of domain capabilities, keyed by domain then kind.
pub struct DomainRegistry {
    domains: HashMap<String, HashMap<String, KindEntry>>,
}

impl DomainRegistry {
    pub fn new() -> Self {
        DomainRegistry {
            domains: HashMap::new(),
        }
    }

    /// Register one kind. Replaces any existing entry for the pair.
    pub fn register(&mut self, domain: &str, kind: &str, entry: KindEntry) {
        self.domains
            .entry(domain.to_string())
            .or_default()
            .insert(kind.to_string(), entry);
    }

    /// Look up the capability entry for a `(domain, kind)` pair.
    pub fn lookup(&self, domain: &str, kind: &str) -> Result<&KindEntry, DomainError> {
        let kinds = self
            .domains
            .get(domain)
            .ok_or_else(|| DomainError::UnsupportedDomain(domain.to_string()))?;
        kinds.get(kind).ok_or_else(|| DomainError::UnsupportedKind {
            domain: domain.to_string(),
            kind: kind.to_string(),
        })
    }

    pub fn has_domain(&self, domain: &str) -> bool {
        self.domains.contains_key(domain)
    }

    /// List registered kinds for a domain (sorted).
    pub fn kinds(&self, domain: &str) -> Vec<String> {
        let mut kinds: Vec<String> = self
            .domains
            .get(domain)
            .map(|k| k.keys().cloned().collect())
            .unwrap_or_default();
        kinds.sort();
        kinds
    }

    /// Create a registry with the built-in `c` and `cpp` capability tables.
    pub fn with_defaults() -> Self {
        let directive: Arc<dyn DeclarationDirective> = Arc::new(BuiltinDeclarationDirective);
        let entry = |native_kind: &'static str, post: &'static [PostProcess]| KindEntry {
            directive: directive.clone(),
            native_kind,
            post,
        };

        let mut registry = Self::new();

        registry.register("cpp", "class", entry("class", LOCATION_ONLY));
        registry.register("cpp", "struct", entry("struct", LOCATION_ONLY));
        registry.register("cpp", "enum", entry("enum", LOCATION_ONLY));
        registry.register("cpp", "enumerator", entry("enumerator", STRIP_AND_LOCATION));
        registry.register("cpp", "function", entry("function", STRIP_AND_LOCATION));
        registry.register("cpp", "member", entry("member", STRIP_AND_LOCATION));

        registry.register("c", "define", entry("macro", LOCATION_ONLY));
        registry.register("c", "enum", entry("enum", LOCATION_ONLY));
        registry.register("c", "enumerator", entry("enumerator", STRIP_AND_LOCATION));
        registry.register("c", "function", entry("function", LOCATION_ONLY));
        registry.register("c", "member", entry("member", STRIP_AND_LOCATION));
        registry.register("c", "struct", entry("struct", LOCATION_ONLY));
        registry.register("c", "typedef", entry("type", LOCATION_ONLY));
        registry.register("c", "union", entry("union", STRIP_AND_LOCATION));

        registry
    }
}

impl Default for DomainRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known_pair() {
        let registry = DomainRegistry::with_defaults();
        let entry = registry.lookup("cpp", "function").unwrap();
        assert_eq!(entry.native_kind, "function");
    }

    #[test]
    fn test_native_kind_mapping() {
        let registry = DomainRegistry::with_defaults();
        assert_eq!(registry.lookup("c", "define").unwrap().native_kind, "macro");
        assert_eq!(registry.lookup("c", "typedef").unwrap().native_kind, "type");
    }

    #[test]
    fn test_unknown_domain() {
        let registry = DomainRegistry::with_defaults();
        let err = registry.lookup("fortran", "function").unwrap_err();
        assert_eq!(err, DomainError::UnsupportedDomain("fortran".to_string()));
    }

    #[test]
    fn test_unknown_kind() {
        let registry = DomainRegistry::with_defaults();
        let err = registry.lookup("cpp", "typedef").unwrap_err();
        assert_eq!(
            err,
            DomainError::UnsupportedKind {
                domain: "cpp".to_string(),
                kind: "typedef".to_string(),
            }
        );
    }

    #[test]
    fn test_kind_listing() {
        let registry = DomainRegistry::with_defaults();
        assert_eq!(
            registry.kinds("cpp"),
            vec!["class", "enum", "enumerator", "function", "member", "struct"]
        );
        assert!(registry.kinds("unknown").is_empty());
    }
}
