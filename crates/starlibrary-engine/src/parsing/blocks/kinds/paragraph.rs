/// Paragraph block type (marker struct).
///
/// Paragraphs have no delimiters - they are the default leaf block
/// when no other block opener matches. Inline parsing is applied
/// to paragraph content.
pub struct Paragraph;

impl Paragraph {
    /// Joins buffered lines into paragraph text.
    ///
    /// Each line is trimmed and the lines are joined with a single space.
    /// Returns `None` when nothing but whitespace remains.
    pub fn join<S: AsRef<str>>(lines: &[S]) -> Option<String> {
        let text = lines
            .iter()
            .map(|l| l.as_ref().trim())
            .collect::<Vec<_>>()
            .join(" ");
        let text = text.trim();
        (!text.is_empty()).then(|| text.to_string())
    }
}
