//! Block-level markup parser
//!
//! Line-based: the fragment is split into blank-line-separated blocks and
//! each block is classified by its first line. Section nesting follows the
//! order in which title adornment characters first appear, tracked in the
//! [`ParserMemo`].

use once_cell::sync::Lazy;
use regex::Regex;

use crate::target::TargetNode;

use super::diagnostics::{problematic, MarkupError};
use super::inline::parse_inline;
use super::lines::TaggedLine;
use super::memo::ParserMemo;

/// Characters that may adorn a section title.
const ADORNMENT_CHARS: &str = "=-~^\"'`#*+.:_";

/// Bullet item opener: marker, one space, content.
static BULLET: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([-*]) +").unwrap());

/// Width of a bullet marker prefix ("- " or "* ").
const BULLET_INDENT: usize = 2;

/// The adornment character if the whole line repeats one adornment char.
fn adornment_char(line: &str) -> Option<char> {
    let trimmed = line.trim_end();
    let mut chars = trimmed.chars();
    let first = chars.next()?;
    if !ADORNMENT_CHARS.contains(first) || trimmed.len() < 2 {
        return None;
    }
    chars.all(|c| c == first).then_some(first)
}

fn bullet_marker(line: &str) -> Option<char> {
    BULLET
        .captures(line)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().chars().next())
}

/// Appends parsed blocks either at the top level or into the innermost open
/// section, closing sections as new titles arrive at shallower levels.
#[derive(Default)]
struct Sink {
    out: Vec<TargetNode>,
    open: Vec<(usize, TargetNode)>,
}

impl Sink {
    fn append(&mut self, node: TargetNode) {
        match self.open.last_mut() {
            Some((_, section)) => section.push_child(node),
            None => self.out.push(node),
        }
    }

    fn open_section(&mut self, level: usize, section: TargetNode) {
        self.close_to(level);
        self.open.push((level, section));
    }

    /// Close every open section at `level` or deeper.
    fn close_to(&mut self, level: usize) {
        while matches!(self.open.last(), Some((open_level, _)) if *open_level >= level) {
            let (_, section) = self.open.pop().expect("matched above");
            self.append(section);
        }
    }

    fn finish(mut self) -> Vec<TargetNode> {
        self.close_to(0);
        self.out
    }
}

/// Parse tagged fragment lines with the block grammar.
pub(crate) fn parse_blocks(lines: &[TaggedLine], memo: &mut ParserMemo) -> Vec<TargetNode> {
    let mut sink = Sink::default();
    let mut i = 0;

    while i < lines.len() {
        if lines[i].is_blank() {
            i += 1;
            continue;
        }

        if let Some(consumed) = try_title(lines, i, memo, &mut sink) {
            i += consumed;
            continue;
        }

        if bullet_marker(&lines[i].text).is_some() {
            i += parse_bullet_list(lines, i, memo, &mut sink);
            continue;
        }

        i += parse_paragraph(lines, i, &mut sink);
    }

    sink.finish()
}

/// A title is a non-adornment line followed by an adornment line.
fn try_title(
    lines: &[TaggedLine],
    i: usize,
    memo: &mut ParserMemo,
    sink: &mut Sink,
) -> Option<usize> {
    if adornment_char(&lines[i].text).is_some() {
        return None;
    }
    let underline = lines.get(i + 1)?;
    let ch = adornment_char(&underline.text)?;

    let title_text = lines[i].text.trim();
    let mut title = TargetNode::element("title");
    match parse_inline(title_text) {
        Ok(children) => {
            title.replace_children(children);
        }
        Err(err) => title.push_child(problematic(&err, lines[i].line)),
    }

    let level = memo.level_for(ch);
    memo.section_level = level;

    let mut section = TargetNode::element("section");
    section.push_child(title);
    if underline.text.trim_end().len() < title_text.len() {
        section.push_child(problematic(
            &MarkupError::new("Title underline too short."),
            underline.line,
        ));
    }

    sink.open_section(level, section);
    Some(2)
}

/// Parse a run of bullet items sharing one marker. Returns lines consumed.
fn parse_bullet_list(
    lines: &[TaggedLine],
    start: usize,
    memo: &mut ParserMemo,
    sink: &mut Sink,
) -> usize {
    let marker = bullet_marker(&lines[start].text).expect("caller checked");
    let mut list =
        TargetNode::element("bullet_list").with_attribute("bullet", marker.to_string());
    let mut i = start;

    while i < lines.len() {
        if lines[i].is_blank() {
            // A blank line only ends the list if no further item follows.
            match lines[i + 1..].iter().find(|l| !l.is_blank()) {
                Some(next) if bullet_marker(&next.text) == Some(marker) && next.indent() == 0 => {
                    i += 1;
                    continue;
                }
                _ => break,
            }
        }
        if bullet_marker(&lines[i].text) != Some(marker) || lines[i].indent() != 0 {
            break;
        }

        // First item line plus indented continuation lines.
        let mut item_lines = vec![TaggedLine {
            text: lines[i].text[BULLET_INDENT..].to_string(),
            source: lines[i].source,
            line: lines[i].line,
        }];
        i += 1;
        while i < lines.len()
            && (lines[i].is_blank()
                || (lines[i].indent() >= BULLET_INDENT
                    && bullet_marker(&lines[i].text).is_none()))
        {
            let text = if lines[i].is_blank() {
                String::new()
            } else {
                lines[i].text[BULLET_INDENT..].to_string()
            };
            item_lines.push(TaggedLine {
                text,
                source: lines[i].source,
                line: lines[i].line,
            });
            i += 1;
        }

        let children = parse_blocks(&item_lines, memo);
        list.push_child(TargetNode::element("list_item").with_children(children));
    }

    sink.append(list);
    i - start
}

/// Parse a paragraph, plus the literal block it introduces when its last
/// line ends in `::`. Returns lines consumed.
fn parse_paragraph(lines: &[TaggedLine], start: usize, sink: &mut Sink) -> usize {
    let mut i = start;
    let mut collected: Vec<&TaggedLine> = Vec::new();

    while i < lines.len() && !lines[i].is_blank() {
        // A bullet opener starts a new block.
        if bullet_marker(&lines[i].text).is_some() {
            break;
        }
        // If the next line is an adornment, this line is a title, not ours.
        if !collected.is_empty()
            && adornment_char(&lines[i].text).is_none()
            && lines
                .get(i + 1)
                .is_some_and(|next| adornment_char(&next.text).is_some())
        {
            break;
        }
        collected.push(&lines[i]);
        i += 1;
    }

    if collected.is_empty() {
        // Defensive: never loop without consuming input.
        return 1;
    }

    let mut text = collected
        .iter()
        .map(|line| line.text.trim_end())
        .collect::<Vec<_>>()
        .join("\n");

    let introduces_literal = text.ends_with("::");
    if introduces_literal {
        // "para::" renders as "para:"; a bare "::" line disappears.
        text.truncate(text.len() - 2);
        let kept = text.trim_end().to_string();
        text = if kept.is_empty() {
            kept
        } else {
            format!("{kept}:")
        };
    }

    if !text.is_empty() {
        let mut paragraph = TargetNode::element("paragraph");
        match parse_inline(&text) {
            Ok(children) => {
                paragraph.replace_children(children);
            }
            Err(err) => paragraph.push_child(problematic(&err, collected[0].line)),
        }
        sink.append(paragraph);
    }

    if introduces_literal {
        i += parse_literal_block(lines, i, sink);
    }

    i - start
}

/// Consume the indented block following a `::` paragraph. Returns lines
/// consumed (including the leading blank lines).
fn parse_literal_block(lines: &[TaggedLine], start: usize, sink: &mut Sink) -> usize {
    let mut i = start;
    while i < lines.len() && lines[i].is_blank() {
        i += 1;
    }

    let mut block: Vec<&str> = Vec::new();
    while i < lines.len() && (lines[i].is_blank() || lines[i].indent() > 0) {
        block.push(&lines[i].text);
        i += 1;
    }
    // Trailing blank lines belong to the surrounding flow.
    while block.last().is_some_and(|line| line.trim().is_empty()) {
        block.pop();
    }

    if !block.is_empty() {
        let text = super::lines::dedent(&block.join("\n"));
        sink.append(
            TargetNode::element("literal_block")
                .with_attribute("xml:space", "preserve")
                .with_children(vec![TargetNode::text(text)]),
        );
    }

    i - start
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::lines::tag_lines;

    fn parse(source: &str) -> Vec<TargetNode> {
        let lines = tag_lines(source);
        let mut memo = ParserMemo::default();
        parse_blocks(&lines, &mut memo)
    }

    #[test]
    fn test_single_paragraph() {
        let out = parse("one line\nand another");
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].tag(), "paragraph");
        assert_eq!(out[0].as_text(), "one line\nand another");
    }

    #[test]
    fn test_two_paragraphs() {
        let out = parse("first\n\nsecond");
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].as_text(), "first");
        assert_eq!(out[1].as_text(), "second");
    }

    #[test]
    fn test_inline_markup_in_paragraph() {
        let out = parse("see *this* now");
        assert_eq!(out[0].children()[1].tag(), "emphasis");
    }

    #[test]
    fn test_bullet_list() {
        let out = parse("- one\n- two\n- three");
        assert_eq!(out.len(), 1);
        let list = &out[0];
        assert_eq!(list.tag(), "bullet_list");
        assert_eq!(list.attribute("bullet"), Some("-"));
        assert_eq!(list.child_count(), 3);
        assert_eq!(list.children()[0].tag(), "list_item");
        assert_eq!(list.children()[0].as_text(), "one");
    }

    #[test]
    fn test_bullet_list_multi_line_item() {
        let out = parse("- first line\n  continued\n- second");
        let list = &out[0];
        assert_eq!(list.child_count(), 2);
        assert_eq!(list.children()[0].as_text(), "first line\ncontinued");
    }

    #[test]
    fn test_bullet_list_blank_separated_items() {
        let out = parse("- one\n\n- two");
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].child_count(), 2);
    }

    #[test]
    fn test_nested_bullet_list() {
        let out = parse("- outer\n  - inner one\n  - inner two");
        let outer_item = &out[0].children()[0];
        let nested = outer_item
            .find_first("bullet_list")
            .expect("nested list present");
        assert_eq!(nested.child_count(), 2);
    }

    #[test]
    fn test_section_title() {
        let out = parse("Heading\n=======\n\nbody text");
        assert_eq!(out.len(), 1);
        let section = &out[0];
        assert_eq!(section.tag(), "section");
        assert_eq!(section.children()[0].tag(), "title");
        assert_eq!(section.children()[0].as_text(), "Heading");
        assert_eq!(section.children()[1].tag(), "paragraph");
    }

    #[test]
    fn test_nested_sections() {
        let out = parse("Top\n===\n\nSub\n---\n\ndeep text\n\nNext Top\n========\n\nshallow");
        assert_eq!(out.len(), 2, "two top-level sections");
        let first = &out[0];
        let sub = first
            .children()
            .iter()
            .find(|n| n.tag() == "section")
            .expect("nested section");
        assert_eq!(sub.children()[0].as_text(), "Sub");
    }

    #[test]
    fn test_short_underline_diagnostic() {
        let out = parse("Long Heading\n==\n");
        let section = &out[0];
        assert_eq!(section.children()[1].tag(), "problematic");
        assert_eq!(section.children()[1].as_text(), "Title underline too short.");
    }

    #[test]
    fn test_literal_block() {
        let out = parse("Example::\n\n    code here\n    more code\n\nafter");
        assert_eq!(out.len(), 3);
        assert_eq!(out[0].as_text(), "Example:");
        assert_eq!(out[1].tag(), "literal_block");
        assert_eq!(out[1].as_text(), "code here\nmore code");
        assert_eq!(out[2].as_text(), "after");
    }

    #[test]
    fn test_bare_literal_marker_paragraph_disappears() {
        let out = parse("::\n\n    verbatim");
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].tag(), "literal_block");
        assert_eq!(out[0].as_text(), "verbatim");
    }

    #[test]
    fn test_markup_error_degrades_to_problematic() {
        let out = parse("broken *emphasis here");
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].tag(), "paragraph");
        assert_eq!(out[0].children()[0].tag(), "problematic");
        assert!(out[0].as_text().contains("without end-string"));
    }
}
