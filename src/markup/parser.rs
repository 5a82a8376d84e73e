//! Reentrant fragment parsing
//!
//! One entry point drives both sub-grammars. The caller's [`ParserMemo`] is
//! saved before the nested parse and restored afterwards — the embedded
//! fragment parses against a fresh memo, and whatever it does to title
//! tracking is discarded, so it cannot corrupt the enclosing document's
//! heading hierarchy.

use crate::target::{tags, TargetNode};

use super::block::parse_blocks;
use super::diagnostics::problematic;
use super::inline::parse_inline;
use super::lines::{dedent, tag_lines};
use super::memo::ParserMemo;
use super::mode::ParseMode;

/// Parse an embedded markup fragment.
///
/// Block mode dedents the source, parses it with the full block grammar
/// inside a placeholder container and returns the placeholder's children so
/// the fragment merges into its parent's flow. Inline mode consumes exactly
/// the first text block as one inline run and returns a single `inline`
/// wrapper; it never produces a paragraph.
pub fn nested_parse(source: &str, mode: ParseMode, memo: &mut ParserMemo) -> Vec<TargetNode> {
    let saved = std::mem::take(memo);
    let result = match mode {
        ParseMode::Block => parse_block_fragment(source, memo),
        ParseMode::Inline => parse_inline_fragment(source),
    };
    *memo = saved;
    result
}

fn parse_block_fragment(source: &str, memo: &mut ParserMemo) -> Vec<TargetNode> {
    let dedented = dedent(source);
    let lines = tag_lines(&dedented);

    // Parent node for the generated subtree; the parsed fragment carries its
    // own block nodes at the top level, so the placeholder itself is not
    // part of the output.
    let mut placeholder = TargetNode::element(tags::CONTAINER);
    placeholder.replace_children(parse_blocks(&lines, memo));
    placeholder.take_children()
}

fn parse_inline_fragment(source: &str) -> Vec<TargetNode> {
    // Exactly the first text block, joined into one run; leading
    // indentation is ordinary text, not block structure.
    let run = source
        .lines()
        .take_while(|line| !line.trim().is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    let mut wrapper = TargetNode::element(tags::INLINE);
    match parse_inline(&run) {
        Ok(children) => {
            wrapper.replace_children(children);
        }
        Err(err) => wrapper.push_child(problematic(&err, 1)),
    }
    vec![wrapper]
}
