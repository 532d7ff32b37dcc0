pub mod blocks;
pub mod inline;

#[cfg(test)]
mod tests;

use blocks::{BlockBuilder, BlockNode};

/// Parses a document given as lines into its block nodes.
///
/// Lines may keep their `\n` / `\r\n` terminators. Parsing never fails:
/// anything unrecognised ends up as paragraph text.
pub fn parse_markdown<I, S>(lines: I) -> Vec<BlockNode>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut builder = BlockBuilder::new();
    for line in lines {
        builder.push(line.as_ref());
    }
    builder.finish()
}

/// Convenience: parse a whole document held in one string.
///
/// `\n`, `\r\n` and a lone `\r` all end a line.
pub fn parse_str(text: &str) -> Vec<BlockNode> {
    let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
    parse_markdown(normalized.lines())
}

/// The document title: the text of the first node when it is a heading.
pub fn document_title(blocks: &[BlockNode]) -> Option<&str> {
    blocks.first().and_then(BlockNode::heading_text)
}
