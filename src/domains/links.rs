//! Source link resolution
//!
//! Consumes the `"{path}:{line}"` identity the overlay writes into signature
//! nodes and turns it into a web URL for the declaration's source line. The
//! identity field is shared with other producers, so extraction is careful:
//! anything unexpected resolves to no link rather than an error.

use std::path::{Path, PathBuf};

use super::location::SourceLocation;

/// Resolves declaration identities to repository source URLs.
#[derive(Debug, Clone)]
pub struct SourceLinkResolver {
    root: PathBuf,
    user: String,
    repo: String,
    tag: Option<String>,
    branch: Option<String>,
    revision: Option<String>,
}

impl SourceLinkResolver {
    pub fn new(root: impl Into<PathBuf>, user: impl Into<String>, repo: impl Into<String>) -> Self {
        SourceLinkResolver {
            root: root.into(),
            user: user.into(),
            repo: repo.into(),
            tag: None,
            branch: None,
            revision: None,
        }
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    pub fn with_branch(mut self, branch: impl Into<String>) -> Self {
        self.branch = Some(branch.into());
        self
    }

    pub fn with_revision(mut self, revision: impl Into<String>) -> Self {
        self.revision = Some(revision.into());
        self
    }

    /// Resolve a signature identity to a source URL.
    ///
    /// Returns `None` — never an error — when the domain is not one this
    /// resolver handles, the identity does not decode, the path falls
    /// outside the project root, or no tag/branch/revision is configured.
    pub fn resolve(&self, domain: &str, identity: Option<&str>) -> Option<String> {
        if domain != "c" && domain != "cpp" {
            return None;
        }

        let location = SourceLocation::decode(identity?)?;
        let relative = Path::new(&location.path).strip_prefix(&self.root).ok()?;

        let reference = self
            .tag
            .as_deref()
            .or(self.branch.as_deref())
            .or(self.revision.as_deref())?;

        Some(format!(
            "https://github.com/{}/{}/blob/{}/{}#L{}",
            self.user,
            self.repo,
            reference,
            relative.display(),
            location.line
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver() -> SourceLinkResolver {
        SourceLinkResolver::new("/project", "octo", "widgets").with_tag("v1.2.0")
    }

    #[test]
    fn test_resolves_valid_identity() {
        let url = resolver().resolve("cpp", Some("/project/include/widget.h:42"));
        assert_eq!(
            url.as_deref(),
            Some("https://github.com/octo/widgets/blob/v1.2.0/include/widget.h#L42")
        );
    }

    #[test]
    fn test_reference_preference_order() {
        let resolver = SourceLinkResolver::new("/p", "u", "r")
            .with_branch("main")
            .with_revision("abc123");
        let url = resolver.resolve("c", Some("/p/a.h:1")).unwrap();
        assert!(url.contains("/blob/main/"));
    }

    #[test]
    fn test_unhandled_domain_is_none() {
        assert_eq!(resolver().resolve("py", Some("/project/a.h:1")), None);
    }

    #[test]
    fn test_missing_identity_is_none() {
        assert_eq!(resolver().resolve("cpp", None), None);
    }

    #[test]
    fn test_malformed_identity_is_none() {
        assert_eq!(resolver().resolve("cpp", Some("not an identity")), None);
        assert_eq!(resolver().resolve("cpp", Some("/project/a.h:x")), None);
    }

    #[test]
    fn test_path_outside_root_is_none() {
        assert_eq!(resolver().resolve("cpp", Some("/elsewhere/a.h:3")), None);
    }

    #[test]
    fn test_no_reference_is_none() {
        let bare = SourceLinkResolver::new("/project", "octo", "widgets");
        assert_eq!(bare.resolve("cpp", Some("/project/a.h:3")), None);
    }
}
