//! Markdown-to-block parsing.
//!
//! The grammar is deliberately small: a line either opens a block (`#`/`##`/
//! `###` heading or a whole-line bold span) or belongs to the body of the
//! block above it. Parsing is total; any input string, malformed markdown
//! included, produces a valid block sequence.

pub(crate) mod builder;
pub(crate) mod classify;

use crate::model::{Block, BlockLevel};
use builder::BlockBuilder;
use classify::classify;

/// Policy knobs for template parsing.
///
/// The defaults match the hosted product; deployments override them through
/// configuration rather than code (in particular, localized default-section
/// titles are added to the allow-list explicitly, never inferred).
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateSyntax {
    /// H2 titles recognized as protected default sections, matched
    /// case-insensitively against the trimmed title.
    pub default_section_titles: Vec<String>,
    /// Token accepted inside a leading H1 title in place of the concrete
    /// problem name, e.g. `# {{problemId}}`.
    pub placeholder_token: String,
}

impl Default for TemplateSyntax {
    fn default() -> Self {
        Self {
            default_section_titles: vec![
                "제출한 코드".to_string(),
                "submitted code".to_string(),
            ],
            placeholder_token: "{{problemId}}".to_string(),
        }
    }
}

impl TemplateSyntax {
    pub fn is_default_section(&self, title: &str) -> bool {
        let title = title.trim().to_lowercase();
        self.default_section_titles
            .iter()
            .any(|candidate| candidate.to_lowercase() == title)
    }

    /// Whether `first` is an acceptable document title block.
    fn accepts_title_block(&self, first: &Block, fallback_title: &str) -> bool {
        first.level == BlockLevel::H1
            && (first.title.contains(&self.placeholder_token) || first.title == fallback_title)
    }
}

/// Parse a markdown template into its block sequence using default syntax.
///
/// See [`parse_with`] for the guarantees.
pub fn parse(markdown: &str, fallback_title: &str) -> Vec<Block> {
    parse_with(markdown, fallback_title, &TemplateSyntax::default())
}

/// Parse a markdown template into its block sequence.
///
/// The returned sequence always starts with an H1 title block: when the
/// input lacks a leading H1 whose title contains the placeholder token or
/// equals `fallback_title`, a synthetic `{fallback_title, H1}` block is
/// prepended. Empty or heading-free input collapses to that synthetic block
/// alone.
pub fn parse_with(markdown: &str, fallback_title: &str, syntax: &TemplateSyntax) -> Vec<Block> {
    if markdown.trim().is_empty() {
        return vec![title_block(fallback_title)];
    }

    let mut builder = BlockBuilder::new(syntax);
    for line in markdown.lines() {
        builder.push(line, classify(line));
    }

    let mut blocks = builder.finish();
    if blocks.is_empty() {
        return vec![title_block(fallback_title)];
    }
    if !syntax.accepts_title_block(&blocks[0], fallback_title) {
        blocks.insert(0, title_block(fallback_title));
    }
    blocks
}

fn title_block(fallback_title: &str) -> Block {
    Block::new(BlockLevel::H1, fallback_title)
}
