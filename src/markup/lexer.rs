//! Inline markup lexer
//!
//! Tokenizes one inline run. Everything that is not an inline marker or a
//! role opener is plain text; the parser reassembles adjacent text tokens.

use logos::Logos;

/// Tokens of the inline markup grammar.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
pub enum InlineToken {
    #[token("**")]
    StrongMarker,

    #[token("*")]
    EmphasisMarker,

    #[token("``")]
    LiteralMarker,

    // A role opener like `:ref:` up to and including its backtick.
    #[regex(r":[A-Za-z][A-Za-z0-9_.+-]*:`", priority = 10)]
    RoleStart,

    #[token("`")]
    Backtick,

    #[token(":")]
    Colon,

    // Runs of ordinary characters, newlines included.
    #[regex(r"[^*`:]+")]
    Text,
}

impl InlineToken {
    /// Marker tokens open a span that must be closed by the same marker.
    pub fn is_span_marker(&self) -> bool {
        matches!(
            self,
            InlineToken::StrongMarker | InlineToken::EmphasisMarker | InlineToken::LiteralMarker
        )
    }
}

/// Tokenize an inline run, pairing each token with its source slice.
///
/// Unmatched input degrades to text; the inline grammar has no unlexable
/// characters.
pub fn tokenize(source: &str) -> Vec<(InlineToken, &str)> {
    let mut lexer = InlineToken::lexer(source);
    let mut tokens = Vec::new();
    while let Some(result) = lexer.next() {
        let slice = lexer.slice();
        match result {
            Ok(token) => tokens.push((token, slice)),
            Err(()) => tokens.push((InlineToken::Text, slice)),
        }
    }
    tokens
}
