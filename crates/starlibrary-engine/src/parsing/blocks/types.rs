/// Heading depth. Only the first three levels exist in the dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
}

impl HeadingLevel {
    /// Maps a run of `#` characters to a level. Four or more is not a heading.
    pub fn from_marker_len(len: usize) -> Option<Self> {
        match len {
            1 => Some(Self::H1),
            2 => Some(Self::H2),
            3 => Some(Self::H3),
            _ => None,
        }
    }

    /// The HTML tag name for this level (`h1`, `h2`, `h3`).
    pub fn tag(self) -> &'static str {
        match self {
            Self::H1 => "h1",
            Self::H2 => "h2",
            Self::H3 => "h3",
        }
    }
}

/// A parsed block of a document.
///
/// Text payloads are raw markdown: headings, paragraphs and list items still
/// contain inline syntax, code blocks contain the literal fenced lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockNode {
    /// `#`, `##` or `###` heading with its trimmed text.
    Heading { level: HeadingLevel, text: String },
    /// Consecutive non-blank lines joined with a single space.
    Paragraph(String),
    /// Consecutive `-` / `*` items, in source order.
    UnorderedList(Vec<String>),
    /// Lines between two fences joined with `\n`. Never inline-formatted.
    CodeBlock(String),
}

impl BlockNode {
    /// Text of a heading node, `None` for every other kind.
    pub fn heading_text(&self) -> Option<&str> {
        match self {
            Self::Heading { text, .. } => Some(text),
            _ => None,
        }
    }
}
