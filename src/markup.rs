//! Rich-text sub-renderer
//!
//! Two IR node types carry markup source as a raw string rather than
//! pre-structured children; the embedded text can legally contain the full
//! document markup, so it is parsed here with the document's own grammar.
//!
//! The parse is reentrant: [`nested_parse`] takes an explicit
//! [`ParseMode`] selecting the block grammar or the single-run inline
//! grammar, and saves/restores the enclosing document's title-tracking
//! [`ParserMemo`] around the nested parse so an embedded fragment cannot
//! corrupt the enclosing heading hierarchy.
//!
//! Syntax errors degrade gracefully per fragment: a malformed construct
//! becomes a `problematic` diagnostic node in the output and the render
//! continues.

pub mod block;
pub mod diagnostics;
pub mod inline;
pub mod lexer;
pub mod lines;
pub mod memo;
pub mod mode;
pub mod parser;

pub use diagnostics::MarkupError;
pub use memo::ParserMemo;
pub use mode::ParseMode;
pub use parser::nested_parse;
