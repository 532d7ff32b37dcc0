//! # HTML Rendering
//!
//! Turns a block node sequence into an HTML fragment: one element per node,
//! newline separated, with a trailing newline.
//!
//! - **`escape`**: `&`, `<`, `>` escaping (plus `"` for attributes)
//! - **`inline`**: code span and link substitution for text-bearing blocks

pub mod escape;
pub mod inline;

pub use escape::{escape_attr, escape_text};
pub use inline::format_inline;

use crate::parsing::blocks::BlockNode;

/// Renders parsed blocks as an HTML fragment.
///
/// Never fails. An empty sequence renders as a single `\n`.
pub fn render_html(nodes: &[BlockNode]) -> String {
    let mut out = nodes.iter().map(render_block).collect::<Vec<_>>().join("\n");
    out.push('\n');
    out
}

fn render_block(node: &BlockNode) -> String {
    match node {
        BlockNode::Heading { level, text } => {
            let tag = level.tag();
            format!("<{tag}>{}</{tag}>", format_inline(text))
        }
        BlockNode::Paragraph(text) => format!("<p>{}</p>", format_inline(text)),
        BlockNode::UnorderedList(items) => {
            let items = items
                .iter()
                .map(|item| format!("<li>{}</li>", format_inline(item)))
                .collect::<Vec<_>>()
                .join("\n");
            format!("<ul>\n{items}\n</ul>")
        }
        BlockNode::CodeBlock(code) => format!("<pre><code>{}</code></pre>", escape_text(code)),
    }
}

/// Parses and renders a whole document in one go.
pub fn markdown_to_html(text: &str) -> String {
    render_html(&crate::parsing::parse_str(text))
}
