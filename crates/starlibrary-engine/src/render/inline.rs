use crate::parsing::inline::{InlineNode, parse_inline};

use super::escape::{escape_attr, escape_text};

/// Renders inline markdown (code spans and links) to escaped HTML.
///
/// Only for heading, paragraph and list item text; code blocks go through
/// [`escape_text`] alone.
pub fn format_inline(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for node in parse_inline(text) {
        match node {
            InlineNode::Text(t) => out.push_str(&escape_text(t)),
            InlineNode::CodeSpan { inner } => {
                out.push_str("<code>");
                out.push_str(&escape_text(inner));
                out.push_str("</code>");
            }
            InlineNode::Link { label, url } => {
                out.push_str("<a href=\"");
                out.push_str(&escape_attr(url));
                out.push_str("\">");
                out.push_str(&escape_text(label));
                out.push_str("</a>");
            }
        }
    }
    out
}
