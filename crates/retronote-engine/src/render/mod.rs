//! Block-to-markdown rendering.
//!
//! [`serialize`] is the canonical form that gets persisted; it is the right
//! inverse of parsing up to whitespace normalization, so
//! `serialize(parse(m))` is a fixed point after the first pass.
//! [`to_editable_markdown`] layers the view-only presentation policies
//! (numbering, emoji stripping, guide questions) on top without touching the
//! blocks themselves.

mod format;

pub use format::{FormatOptions, GuideCatalog, to_editable_markdown};

use crate::model::{Block, BlockLevel};

/// Serialize a block sequence to canonical markdown.
///
/// Pure and deterministic: heading marker plus title, a blank line and the
/// trimmed body when one exists, blocks joined by blank lines.
pub fn serialize(blocks: &[Block]) -> String {
    let rendered: Vec<String> = blocks.iter().map(render_block).collect();
    rendered.join("\n\n")
}

fn render_block(block: &Block) -> String {
    let heading = heading_line(block.level, &block.title);
    match block.content.as_deref().map(str::trim) {
        Some(body) if !body.is_empty() => format!("{heading}\n\n{body}"),
        _ => heading,
    }
}

pub(crate) fn heading_line(level: BlockLevel, title: &str) -> String {
    match level {
        BlockLevel::H1 => format!("# {title}"),
        BlockLevel::H2 => format!("## {title}"),
        BlockLevel::H3 => format!("### {title}"),
        BlockLevel::Paragraph => format!("**{title}**"),
    }
}
