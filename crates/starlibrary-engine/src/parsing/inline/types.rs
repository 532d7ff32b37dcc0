/// A parsed inline node borrowing from the block text.
///
/// Every byte of the input belongs to exactly one node; delimiters are
/// implied by the variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InlineNode<'a> {
    /// Plain text that isn't part of any special construct.
    Text(&'a str),
    /// A code span (backtick-delimited). This is a "raw zone" - no parsing inside.
    CodeSpan {
        /// Content between the backticks.
        inner: &'a str,
    },
    /// A `[label](url)` link.
    Link {
        /// Text between the brackets.
        label: &'a str,
        /// Text between the parentheses.
        url: &'a str,
    },
}
