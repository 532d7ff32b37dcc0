use super::{
    classify::{LineClass, MarkdownLineClassifier},
    kinds::Paragraph,
    types::BlockNode,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Normal,
    InCode,
}

/// Accumulate-then-flush state machine turning lines into [`BlockNode`]s.
///
/// Buffers live only for the lifetime of one builder, i.e. one document.
pub struct BlockBuilder {
    classifier: MarkdownLineClassifier,
    mode: Mode,
    code: Vec<String>,
    paragraph: Vec<String>,
    list: Vec<String>,
    out: Vec<BlockNode>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self {
            classifier: MarkdownLineClassifier,
            mode: Mode::Normal,
            code: vec![],
            paragraph: vec![],
            list: vec![],
            out: vec![],
        }
    }

    /// Feeds one line. A trailing `\n` or `\r\n` is stripped first.
    pub fn push(&mut self, raw: &str) {
        let line = raw.trim_end_matches(['\r', '\n']);
        let class = self.classifier.classify(line);

        match (self.mode, class) {
            (Mode::InCode, LineClass::Fence) => self.close_fence(),
            (Mode::Normal, LineClass::Fence) => {
                self.flush_paragraph();
                self.flush_list();
                self.mode = Mode::InCode;
            }
            // Raw zone: nothing else applies inside a fence.
            (Mode::InCode, _) => self.code.push(line.to_string()),
            (Mode::Normal, LineClass::Blank) => {
                self.flush_paragraph();
                self.flush_list();
            }
            (Mode::Normal, LineClass::Heading { level, text }) => {
                self.flush_paragraph();
                self.flush_list();
                self.out.push(BlockNode::Heading {
                    level,
                    text: text.to_string(),
                });
            }
            (Mode::Normal, LineClass::ListItem(text)) => {
                // Consecutive items share a buffer; only the paragraph ends.
                self.flush_paragraph();
                self.list.push(text.to_string());
            }
            (Mode::Normal, LineClass::Text) => self.paragraph.push(line.to_string()),
        }
    }

    pub fn finish(mut self) -> Vec<BlockNode> {
        // EOF flush
        self.flush_paragraph();
        self.flush_list();
        if self.mode == Mode::InCode {
            // Unterminated fence: emit as code block anyway
            self.close_fence();
        }
        self.out
    }

    fn close_fence(&mut self) {
        let lines = std::mem::take(&mut self.code);
        self.out.push(BlockNode::CodeBlock(lines.join("\n")));
        self.mode = Mode::Normal;
    }

    fn flush_paragraph(&mut self) {
        let lines = std::mem::take(&mut self.paragraph);
        if let Some(text) = Paragraph::join(&lines) {
            self.out.push(BlockNode::Paragraph(text));
        }
    }

    fn flush_list(&mut self) {
        let items = std::mem::take(&mut self.list);
        if !items.is_empty() {
            self.out.push(BlockNode::UnorderedList(items));
        }
    }
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}
