use pretty_assertions::assert_eq;
use starlibrary_engine::{markdown_to_html, parse_markdown, render_html};

#[test]
fn fixture_headings_and_paragraphs() {
    assert_fixture("headings_and_paragraphs");
}

#[test]
fn fixture_lists() {
    assert_fixture("lists");
}

#[test]
fn fixture_code_fences() {
    assert_fixture("code_fences");
}

#[test]
fn fixture_inline_spans() {
    assert_fixture("inline_spans");
}

fn assert_fixture(name: &str) {
    let dir = format!("{}/tests/fixtures", env!("CARGO_MANIFEST_DIR"));
    let md = std::fs::read_to_string(format!("{dir}/{name}.md")).unwrap();
    let expected = std::fs::read_to_string(format!("{dir}/{name}.html")).unwrap();

    assert_eq!(markdown_to_html(&md), expected);
}

/// Feeding lines with their terminators gives the same result as the
/// whole-string entry point.
#[test]
fn terminated_lines_match_str_entry_point() {
    let md = "# T\r\n\r\n- a\r\n- b\r\n\r\n```\r\n x\r\n```\r\n";
    let lines: Vec<&str> = md.split_inclusive('\n').collect();

    assert_eq!(render_html(&parse_markdown(lines)), markdown_to_html(md));
}

#[test]
fn code_block_literalness() {
    assert_eq!(
        markdown_to_html("```\n[x](y)\n```"),
        "<pre><code>[x](y)</code></pre>\n"
    );
}

#[test]
fn empty_input_renders_single_newline() {
    assert_eq!(markdown_to_html(""), "\n");
}
