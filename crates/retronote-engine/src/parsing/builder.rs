use crate::model::{Block, BlockLevel};

use super::{TemplateSyntax, classify::LineClass};

/// Accumulates classified lines into finished blocks.
///
/// A block-start line opens a block; body lines are buffered verbatim until
/// the next block start or end of input finalizes the open block. Body lines
/// arriving before the first block start have no block to attach to and are
/// dropped.
pub struct BlockBuilder<'a> {
    syntax: &'a TemplateSyntax,
    open: Option<OpenBlock>,
    out: Vec<Block>,
}

struct OpenBlock {
    level: BlockLevel,
    title: String,
    body: Vec<String>,
}

impl<'a> BlockBuilder<'a> {
    pub fn new(syntax: &'a TemplateSyntax) -> Self {
        Self {
            syntax,
            open: None,
            out: vec![],
        }
    }

    pub fn push(&mut self, raw_line: &str, class: LineClass) {
        match class {
            LineClass::BlockStart { level, title } => {
                self.flush();
                self.open = Some(OpenBlock {
                    level,
                    title,
                    body: vec![],
                });
            }
            LineClass::Body => {
                if let Some(open) = self.open.as_mut() {
                    open.body.push(raw_line.to_string());
                }
            }
        }
    }

    pub fn finish(mut self) -> Vec<Block> {
        // EOF flush
        self.flush();
        self.out
    }

    fn flush(&mut self) {
        let Some(open) = self.open.take() else {
            return;
        };

        let mut block = Block::new(open.level, open.title);
        block.is_default_section =
            block.level == BlockLevel::H2 && self.syntax.is_default_section(&block.title);

        let body = open.body.join("\n");
        let body = body.trim();
        if !body.is_empty() {
            block.content = Some(body.to_string());
        }

        self.out.push(block);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::classify::classify;

    fn build(input: &str) -> Vec<Block> {
        let syntax = TemplateSyntax::default();
        let mut builder = BlockBuilder::new(&syntax);
        for line in input.lines() {
            builder.push(line, classify(line));
        }
        builder.finish()
    }

    #[test]
    fn body_lines_attach_to_open_block() {
        let blocks = build("## 접근 방법\n투 포인터로 풀었다.\n\n시간복잡도는 O(n).");
        assert_eq!(blocks.len(), 1);
        assert_eq!(
            blocks[0].content.as_deref(),
            Some("투 포인터로 풀었다.\n\n시간복잡도는 O(n).")
        );
    }

    #[test]
    fn body_before_first_block_start_is_dropped() {
        let blocks = build("orphan prose\n## 접근 방법");
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].title, "접근 방법");
        assert_eq!(blocks[0].content, None);
    }

    #[test]
    fn whitespace_only_body_becomes_absent_content() {
        let blocks = build("## 접근 방법\n   \n");
        assert_eq!(blocks[0].content, None);
    }

    #[test]
    fn default_section_is_flagged_on_h2() {
        let blocks = build("## 제출한 코드\n```rust\nfn main() {}\n```");
        assert!(blocks[0].is_default_section);
    }

    #[test]
    fn default_section_match_is_case_insensitive() {
        let blocks = build("## Submitted Code");
        assert!(blocks[0].is_default_section);
    }

    #[test]
    fn default_section_title_on_h3_is_not_flagged() {
        let blocks = build("### 제출한 코드");
        assert!(!blocks[0].is_default_section);
    }
}
