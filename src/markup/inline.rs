//! Inline markup parser
//!
//! Parses one inline run into target nodes. Inline markup does not nest;
//! a span runs from its opening marker to the next matching marker, and an
//! unclosed span is a syntax error the caller degrades to a diagnostic.

use crate::target::TargetNode;

use super::diagnostics::MarkupError;
use super::lexer::{tokenize, InlineToken};

/// Parse an inline run into a node sequence.
pub fn parse_inline(source: &str) -> Result<Vec<TargetNode>, MarkupError> {
    let tokens = tokenize(source);
    let mut out = Vec::new();
    let mut text = String::new();
    let mut index = 0;

    while index < tokens.len() {
        let (token, slice) = tokens[index];
        match token {
            InlineToken::Text | InlineToken::Colon | InlineToken::Backtick => {
                text.push_str(slice);
                index += 1;
            }
            InlineToken::StrongMarker => {
                flush(&mut text, &mut out);
                let (content, next) = span_content(&tokens, index, InlineToken::StrongMarker)
                    .ok_or_else(|| {
                        MarkupError::new("Inline strong start-string without end-string.")
                    })?;
                out.push(
                    TargetNode::element("strong").with_children(vec![TargetNode::text(content)]),
                );
                index = next;
            }
            InlineToken::EmphasisMarker => {
                flush(&mut text, &mut out);
                let (content, next) = span_content(&tokens, index, InlineToken::EmphasisMarker)
                    .ok_or_else(|| {
                        MarkupError::new("Inline emphasis start-string without end-string.")
                    })?;
                out.push(
                    TargetNode::element("emphasis").with_children(vec![TargetNode::text(content)]),
                );
                index = next;
            }
            InlineToken::LiteralMarker => {
                flush(&mut text, &mut out);
                let (content, next) = span_content(&tokens, index, InlineToken::LiteralMarker)
                    .ok_or_else(|| {
                        MarkupError::new("Inline literal start-string without end-string.")
                    })?;
                out.push(
                    TargetNode::element("literal").with_children(vec![TargetNode::text(content)]),
                );
                index = next;
            }
            InlineToken::RoleStart => {
                flush(&mut text, &mut out);
                // The slice is `:name:` including the opening backtick.
                let name = &slice[1..slice.len() - 2];
                let (target, next) = span_content(&tokens, index, InlineToken::Backtick)
                    .ok_or_else(|| {
                        MarkupError::new(
                            "Inline interpreted text or phrase reference start-string \
                             without end-string.",
                        )
                    })?;
                out.push(role_node(name, &target)?);
                index = next;
            }
        }
    }

    flush(&mut text, &mut out);
    Ok(out)
}

/// Collect the source text between an opening marker at `open` and the next
/// `closing` token. Returns the content and the index after the close.
fn span_content(
    tokens: &[(InlineToken, &str)],
    open: usize,
    closing: InlineToken,
) -> Option<(String, usize)> {
    let mut content = String::new();
    for (offset, (token, slice)) in tokens.iter().enumerate().skip(open + 1) {
        if *token == closing {
            return Some((content, offset + 1));
        }
        content.push_str(slice);
    }
    None
}

fn role_node(name: &str, target: &str) -> Result<TargetNode, MarkupError> {
    match name {
        "ref" => Ok(TargetNode::element("pending_xref")
            .with_attribute("reftype", "ref")
            .with_attribute("refdomain", "std")
            .with_attribute("refexplicit", "true")
            .with_attribute("reftarget", target)
            .with_children(vec![TargetNode::text(target)])),
        other => Err(MarkupError::new(format!(
            "Unknown interpreted text role \"{other}\"."
        ))),
    }
}

fn flush(text: &mut String, out: &mut Vec<TargetNode>) {
    if !text.is_empty() {
        out.push(TargetNode::text(std::mem::take(text)));
    }
}
