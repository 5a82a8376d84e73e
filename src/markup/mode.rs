//! Parse modes
//!
//! The underlying grammar is block-capable; the inline mode substitutes a
//! restricted entry state that treats leading indentation as ordinary
//! characters, consumes exactly the first text block as one inline run and
//! never synthesizes a trailing paragraph at end of input.

/// Sub-grammar selection for a nested parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseMode {
    /// Full block-level grammar; the fragment merges into the parent flow.
    Block,
    /// Single inline run wrapped in an `inline` node.
    Inline,
}
