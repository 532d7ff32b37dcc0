//! Behavioural tests for the block parser as a whole.

use crate::parsing::{
    blocks::{BlockNode, HeadingLevel},
    document_title, parse_markdown, parse_str,
};

fn para(s: &str) -> BlockNode {
    BlockNode::Paragraph(s.to_string())
}

fn list(items: &[&str]) -> BlockNode {
    BlockNode::UnorderedList(items.iter().map(|s| s.to_string()).collect())
}

fn heading(level: HeadingLevel, s: &str) -> BlockNode {
    BlockNode::Heading {
        level,
        text: s.to_string(),
    }
}

#[test]
fn empty_document() {
    assert!(parse_markdown(Vec::<String>::new()).is_empty());
}

#[test]
fn blank_lines_only() {
    assert!(parse_str("\n  \n\t\n").is_empty());
}

#[test]
fn heading_requires_whitespace() {
    assert_eq!(parse_markdown(["#title"]), vec![para("#title")]);
    assert_eq!(
        parse_markdown(["# title"]),
        vec![heading(HeadingLevel::H1, "title")]
    );
}

#[test]
fn four_hashes_is_paragraph_text() {
    assert_eq!(parse_markdown(["#### deep"]), vec![para("#### deep")]);
}

#[test]
fn list_items_accumulate_until_blank() {
    assert_eq!(
        parse_markdown(["- a", "- b", "", "- c"]),
        vec![list(&["a", "b"]), list(&["c"])]
    );
}

#[test]
fn mixed_markers_share_one_list() {
    assert_eq!(
        parse_markdown(["- a", "* b", "  - c"]),
        vec![list(&["a", "b", "c"])]
    );
}

#[test]
fn paragraph_lines_are_joined() {
    assert_eq!(
        parse_markdown(["first line  ", "  second line", "", "next"]),
        vec![para("first line second line"), para("next")]
    );
}

#[test]
fn heading_ends_paragraph_and_list() {
    assert_eq!(
        parse_markdown(["text", "## Section", "- item", "### Sub"]),
        vec![
            para("text"),
            heading(HeadingLevel::H2, "Section"),
            list(&["item"]),
            heading(HeadingLevel::H3, "Sub"),
        ]
    );
}

#[test]
fn list_item_ends_paragraph() {
    assert_eq!(
        parse_markdown(["intro", "- item"]),
        vec![para("intro"), list(&["item"])]
    );
}

#[test]
fn text_after_list_flushes_paragraph_first() {
    // Paragraph lines do not end a list; at the next flush point the
    // paragraph buffer is emitted before the list buffer.
    assert_eq!(
        parse_markdown(["- a", "trailing", ""]),
        vec![para("trailing"), list(&["a"])]
    );
}

#[test]
fn code_block_is_literal() {
    assert_eq!(
        parse_markdown(["```", "[x](y)", "```"]),
        vec![BlockNode::CodeBlock("[x](y)".to_string())]
    );
}

#[test]
fn code_block_preserves_blank_and_indented_lines() {
    assert_eq!(
        parse_markdown(["```rust", "fn main() {", "", "    # not a heading", "- nor a list", "}", "```"]),
        vec![BlockNode::CodeBlock(
            "fn main() {\n\n    # not a heading\n- nor a list\n}".to_string()
        )]
    );
}

#[test]
fn fence_flushes_pending_blocks() {
    assert_eq!(
        parse_markdown(["para", "```", "code", "```", "- a"]),
        vec![
            para("para"),
            BlockNode::CodeBlock("code".to_string()),
            list(&["a"]),
        ]
    );
}

#[test]
fn unterminated_fence_still_yields_code_block() {
    assert_eq!(
        parse_markdown(["```", "line1"]),
        vec![BlockNode::CodeBlock("line1".to_string())]
    );
}

#[test]
fn empty_fenced_block() {
    assert_eq!(
        parse_markdown(["```", "```"]),
        vec![BlockNode::CodeBlock(String::new())]
    );
}

#[test]
fn line_terminators_are_stripped() {
    assert_eq!(
        parse_markdown(["# Title\r\n", "```\n", "code\r\n", "```\n"]),
        vec![
            heading(HeadingLevel::H1, "Title"),
            BlockNode::CodeBlock("code".to_string()),
        ]
    );
}

#[test]
fn lone_carriage_returns_end_lines() {
    assert_eq!(
        parse_str("# T\rbody\rmore"),
        vec![heading(HeadingLevel::H1, "T"), para("body more")]
    );
}

#[test]
fn mixed_line_endings_in_one_document() {
    assert_eq!(
        parse_str("- a\r\n- b\r\r```\ncode\r```"),
        vec![list(&["a", "b"]), BlockNode::CodeBlock("code".to_string())]
    );
}

#[test]
fn title_from_first_heading_only() {
    let doc = parse_str("# Hello\n\nbody");
    assert_eq!(document_title(&doc), Some("Hello"));

    let doc = parse_str("body\n\n# Later");
    assert_eq!(document_title(&doc), None);
}
