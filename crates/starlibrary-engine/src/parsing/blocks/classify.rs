use super::{
    kinds::{CodeFence, Heading, ListItem},
    types::HeadingLevel,
};

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of block parsing: each line is classified independently
/// without reference to surrounding context. Whether a line is actually
/// treated as its class depends on the builder (inside a fence every line is
/// raw content).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass<'a> {
    /// A ```` ``` ```` fence opener or closer.
    Fence,
    /// Whitespace only.
    Blank,
    /// `#`..`###` heading with its trimmed text.
    Heading { level: HeadingLevel, text: &'a str },
    /// `-` / `*` item with its trimmed text.
    ListItem(&'a str),
    /// Anything else; paragraph text.
    Text,
}

/// Classifies individual lines for the block parsing phase.
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    /// Classifies a line (already stripped of its terminator).
    ///
    /// Precedence: fence, blank, heading, list item, text.
    pub fn classify<'a>(&self, line: &'a str) -> LineClass<'a> {
        if CodeFence::is_fence(line) {
            return LineClass::Fence;
        }
        if line.trim().is_empty() {
            return LineClass::Blank;
        }
        if let Some((level, text)) = Heading::parse(line) {
            return LineClass::Heading { level, text };
        }
        if let Some(text) = ListItem::parse(line) {
            return LineClass::ListItem(text);
        }
        LineClass::Text
    }
}
