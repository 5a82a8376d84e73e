//! Embedded markup fragments, end to end through the renderer.

use docbridge::ir::IrNode;
use docbridge::render::{render_node_list, BuilderRegistry, RenderContext};
use docbridge::target::TargetNode;
use docbridge::testing::ir::{paragraph, rst_block, rst_inline};

fn render(nodes: &[IrNode]) -> Vec<TargetNode> {
    let registry = BuilderRegistry::with_defaults();
    let mut ctx = RenderContext::default();
    render_node_list(nodes, &registry, &mut ctx).expect("render should succeed")
}

#[test]
fn block_fragment_merges_into_parent_flow() {
    // The fragment's own paragraphs surface directly; no wrapper node.
    let nodes = vec![
        paragraph("before"),
        rst_block("    embedded one\n\n    embedded two"),
        paragraph("after"),
    ];
    let out = render(&nodes);

    let tags: Vec<&str> = out.iter().map(|n| n.tag()).collect();
    assert_eq!(
        tags,
        vec!["paragraph", "paragraph", "paragraph", "paragraph"]
    );
    assert_eq!(out[1].as_text(), "embedded one");
    assert_eq!(out[2].as_text(), "embedded two");
}

#[test]
fn block_fragment_supports_full_grammar() {
    let source = "\
Intro paragraph with *emphasis*.

- item one
- item two

Usage::

    let x = 1;
";
    let out = render(&[rst_block(source)]);

    assert_eq!(out[0].tag(), "paragraph");
    assert_eq!(out[0].children()[1].tag(), "emphasis");
    assert_eq!(out[1].tag(), "bullet_list");
    assert_eq!(out[1].child_count(), 2);
    assert_eq!(out[2].tag(), "paragraph");
    assert_eq!(out[2].as_text(), "Usage:");
    assert_eq!(out[3].tag(), "literal_block");
    assert_eq!(out[3].as_text(), "let x = 1;");
}

#[test]
fn block_fragment_cross_reference() {
    let out = render(&[rst_block("See :ref:`usage-guide` for details.")]);
    let paragraph = &out[0];
    let xref = paragraph.find_first("pending_xref").expect("role parsed");
    assert_eq!(xref.attribute("reftarget"), Some("usage-guide"));
}

#[test]
fn inline_fragment_is_one_inline_run() {
    let out = render(&[rst_inline("a **strong** word")]);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].tag(), "inline");
    assert_eq!(out[0].children()[1].tag(), "strong");
}

#[test]
fn inline_fragment_never_synthesizes_paragraph() {
    let out = render(&[rst_inline("first block\n\nsecond block ignored")]);

    fn contains_paragraph(node: &TargetNode) -> bool {
        node.tag() == "paragraph" || node.children().iter().any(contains_paragraph)
    }
    assert!(!out.iter().any(contains_paragraph));
    assert_eq!(out[0].as_text(), "first block");
}

#[test]
fn inline_fragment_keeps_leading_indent() {
    let out = render(&[rst_inline("  spaced out")]);
    assert_eq!(out[0].as_text(), "  spaced out");
}

#[test]
fn syntax_error_degrades_to_diagnostic_not_failure() {
    let nodes = vec![
        paragraph("good"),
        rst_block("broken *emphasis\n\nstill renders"),
        paragraph("also good"),
    ];
    let out = render(&nodes);

    // The bad fragment paragraph carries a diagnostic...
    let damaged = &out[1];
    assert_eq!(damaged.children()[0].tag(), "problematic");
    // ...and everything around it rendered normally.
    assert_eq!(out[2].as_text(), "still renders");
    assert_eq!(out[3].as_text(), "also good");
}

#[test]
fn fragment_titles_do_not_corrupt_enclosing_state() {
    let registry = BuilderRegistry::with_defaults();
    let mut ctx = RenderContext::default();
    ctx.memo.title_styles = vec!['#', '='];
    ctx.memo.section_level = 2;

    let nodes = vec![rst_block("Fragment Title\n--------------\n\nbody")];
    let out = render_node_list(&nodes, &registry, &mut ctx).unwrap();

    // The fragment produced its section...
    assert_eq!(out[0].tag(), "section");
    // ...without touching the enclosing document's heading hierarchy.
    assert_eq!(ctx.memo.title_styles, vec!['#', '=']);
    assert_eq!(ctx.memo.section_level, 2);
}

#[test]
fn nested_fragments_inside_domain_entry_content() {
    use docbridge::testing::ir::domain_entry;

    let nodes = vec![domain_entry(
        "cpp",
        "function",
        "void log(const char *msg)",
        "fn-log",
        vec![rst_block("Writes *msg* to the log.")],
    )];
    let out = render(&nodes);

    let body = out[1].children().last().unwrap();
    assert_eq!(body.tag(), "desc_content");
    assert_eq!(body.children()[0].tag(), "paragraph");
    assert_eq!(body.children()[0].children()[1].tag(), "emphasis");
}
