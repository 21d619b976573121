use crate::model::BlockLevel;

/// Classification of a single input line containing only local facts.
///
/// This is phase 1 of template parsing: each line is classified independently
/// without reference to surrounding context. Block-start detection is
/// whole-line anchored after trimming; multi-line headings do not exist in
/// this grammar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass {
    /// The line opens a new block.
    BlockStart { level: BlockLevel, title: String },
    /// Anything else; belongs to the body of the currently open block.
    Body,
}

pub fn classify(line: &str) -> LineClass {
    let trimmed = line.trim();

    // Longest marker first so `### x` is not read as `## #x`.
    if let Some(rest) = trimmed.strip_prefix("### ") {
        return block_start(BlockLevel::H3, rest);
    }
    if let Some(rest) = trimmed.strip_prefix("## ") {
        return block_start(BlockLevel::H2, rest);
    }
    if let Some(rest) = trimmed.strip_prefix("# ") {
        return block_start(BlockLevel::H1, rest);
    }
    if let Some(inner) = bold_line(trimmed) {
        return block_start(BlockLevel::Paragraph, inner);
    }

    LineClass::Body
}

fn block_start(level: BlockLevel, title: &str) -> LineClass {
    LineClass::BlockStart {
        level,
        title: title.trim().to_string(),
    }
}

/// Matches a line that is exactly one bold span, e.g. `**풀이 요약**`.
///
/// Lines that merely start and end with bold text (`**a** and **b**`) are
/// body text, not block starts.
fn bold_line(trimmed: &str) -> Option<&str> {
    let inner = trimmed.strip_prefix("**")?.strip_suffix("**")?;
    if inner.trim().is_empty() || inner.contains("**") {
        return None;
    }
    Some(inner)
}
