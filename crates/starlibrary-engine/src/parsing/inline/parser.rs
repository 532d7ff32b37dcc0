use super::{
    cursor::Cursor,
    kinds::{CodeSpan, Link},
    types::InlineNode,
};

/// Parses inline content into a sequence of [`InlineNode`]s.
///
/// # Raw Zone Precedence
/// Code spans are found first, across the whole input. Links are only
/// searched for in the text between code spans, so neither a link inside a
/// code span nor a link straddling one is recognised.
///
/// # Returns
/// A vector of inline nodes covering the entire input. Text between special
/// constructs is emitted as `InlineNode::Text`. Unclosed constructs stay text.
pub fn parse_inline(s: &str) -> Vec<InlineNode<'_>> {
    let mut out = vec![];
    for node in scan(s, try_parse_code_span) {
        match node {
            InlineNode::Text(text) => out.extend(scan(text, try_parse_link)),
            other => out.push(other),
        }
    }
    out
}

/// One left-to-right pass looking for a single construct.
///
/// Matches never overlap: scanning resumes after the end of each match.
fn scan<'a>(
    s: &'a str,
    try_parse: fn(&mut Cursor<'a>) -> Option<InlineNode<'a>>,
) -> Vec<InlineNode<'a>> {
    let mut cur = Cursor::new(s);
    let mut out = vec![];
    let mut text_start = cur.pos();

    // Helper to flush accumulated text as a Text node
    fn flush_text<'a>(out: &mut Vec<InlineNode<'a>>, text: &'a str) {
        if !text.is_empty() {
            out.push(InlineNode::Text(text));
        }
    }

    while !cur.eof() {
        let start = cur.pos();
        if let Some(node) = try_parse(&mut cur) {
            flush_text(&mut out, cur.slice(text_start, start));
            text_start = cur.pos();
            out.push(node);
            continue;
        }
        cur.bump();
    }

    flush_text(&mut out, cur.slice(text_start, cur.pos().min(s.len())));
    out
}

/// Attempts to parse a code span starting at the current position.
///
/// Returns `None` if not at a backtick, if the span is empty, or if it
/// isn't closed. On failure, cursor position is restored.
fn try_parse_code_span<'a>(cur: &mut Cursor<'a>) -> Option<InlineNode<'a>> {
    if cur.peek() != Some(CodeSpan::TICK) {
        return None;
    }

    let saved = cur.clone();
    cur.bump(); // `
    let inner = cur.eat_until(CodeSpan::TICK);

    if inner.is_empty() || cur.peek() != Some(CodeSpan::TICK) {
        *cur = saved;
        return None;
    }
    cur.bump(); // closing `

    Some(InlineNode::CodeSpan { inner })
}

/// Attempts to parse a `[label](url)` link starting at the current position.
///
/// The label runs to the first `]`, which must be followed directly by `(`;
/// the url runs to the first `)`. Both must be non-empty.
/// On failure, cursor position is restored.
fn try_parse_link<'a>(cur: &mut Cursor<'a>) -> Option<InlineNode<'a>> {
    if cur.peek() != Some(Link::OPEN) {
        return None;
    }

    let saved = cur.clone();
    cur.bump(); // [
    let label = cur.eat_until(Link::LABEL_CLOSE);
    if label.is_empty() || !cur.starts_with(Link::MIDDLE) {
        *cur = saved;
        return None;
    }
    cur.bump_n(Link::MIDDLE.len());

    let url = cur.eat_until(Link::CLOSE);
    if url.is_empty() || cur.peek() != Some(Link::CLOSE) {
        *cur = saved;
        return None;
    }
    cur.bump(); // )

    Some(InlineNode::Link { label, url })
}
