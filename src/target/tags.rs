//! Tag names with structural meaning
//!
//! Most target-node tags are opaque to this crate; the ones named here are
//! load-bearing for the finder and the domain overlay.

/// Declaration wrapper produced by domain directives.
pub const DESC: &str = "desc";
/// Signature node; its `names` attribute carries the location identity.
pub const DESC_SIGNATURE: &str = "desc_signature";
/// One line of a multi-line signature (template prefix + declarator).
pub const DESC_SIGNATURE_LINE: &str = "desc_signature_line";
/// Qualifier prefix of a declarator name.
pub const DESC_ADDNAME: &str = "desc_addname";
/// Unqualified declarator name.
pub const DESC_NAME: &str = "desc_name";
/// Parameter list wrapper.
pub const DESC_PARAMETERLIST: &str = "desc_parameterlist";
/// Single parameter.
pub const DESC_PARAMETER: &str = "desc_parameter";
/// Human-written description body of a declaration.
pub const DESC_CONTENT: &str = "desc_content";
/// Whitespace token inside a signature.
pub const DESC_SIG_SPACE: &str = "desc_sig_space";
/// Keyword token inside a signature.
pub const DESC_SIG_KEYWORD: &str = "desc_sig_keyword";
/// Index entry node emitted ahead of a declaration.
pub const INDEX: &str = "index";
/// Anchor node.
pub const TARGET: &str = "target";
/// Raw text leaf.
pub const TEXT: &str = "#text";
/// Inline wrapper.
pub const INLINE: &str = "inline";
/// Block paragraph.
pub const PARAGRAPH: &str = "paragraph";
/// Placeholder container for nested block parses.
pub const CONTAINER: &str = "container";
/// Inline diagnostic emitted for a recovered markup error.
pub const PROBLEMATIC: &str = "problematic";
