use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::model::{Block, Preset};

use super::heading_line;

/// User-toggled presentation flags for the editable view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FormatOptions {
    /// Auto-number non-title blocks by their position in the sequence.
    pub numbering: bool,
    /// Strip a leading editor emoji from titles.
    pub strip_emoji: bool,
    /// Inject a preset guide question under sections that have no body yet.
    pub guide_questions: bool,
}

static NUMERIC_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\s*").expect("numeric prefix pattern"));

/// Emoji the editor itself places ahead of section titles. Stripping is
/// limited to this set; any other emoji in a title is user content and stays.
const TITLE_EMOJI: &[&str] = &[
    "💡", "📝", "🔍", "🧠", "✅", "📌", "🚀", "🤔", "⏱️", "✍️",
];

static EMOJI_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    let alternatives: Vec<String> = TITLE_EMOJI.iter().map(|e| regex::escape(e)).collect();
    Regex::new(&format!(r"^(?:{})\s*", alternatives.join("|"))).expect("emoji prefix pattern")
});

/// Preset guide questions indexed by normalized title.
///
/// Preset titles are normalized the same way block titles are at lookup
/// time, so a preset matches whether or not the viewer has numbering or
/// emoji toggled on. Presets whose titles collide after normalization are
/// deduplicated by first-seen order.
#[derive(Debug, Clone, Default)]
pub struct GuideCatalog {
    guides: HashMap<String, String>,
}

impl GuideCatalog {
    pub fn from_presets(presets: &[Preset]) -> Self {
        let mut guides = HashMap::new();
        for preset in presets {
            guides
                .entry(normalize_title(&preset.title))
                .or_insert_with(|| preset.guide.clone());
        }
        Self { guides }
    }

    /// Look up the guide question for a block title, case-sensitively after
    /// normalization.
    pub fn guide_for(&self, title: &str) -> Option<&str> {
        self.guides.get(&normalize_title(title)).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.guides.is_empty()
    }
}

/// Drop an auto-numbering prefix and a leading editor emoji, in that order.
fn normalize_title(title: &str) -> String {
    let title = NUMERIC_PREFIX.replace(title.trim(), "");
    EMOJI_PREFIX.replace(title.trim(), "").trim().to_string()
}

/// Render blocks for the editable view with presentation policies applied.
///
/// View-only: the transforms never mutate the blocks and are recomputed on
/// every call. Numbering counts the block's position in the full sequence,
/// so with index 0 reserved for the title block the first section comes out
/// as `1.`.
pub fn to_editable_markdown(
    blocks: &[Block],
    options: &FormatOptions,
    guides: &GuideCatalog,
) -> String {
    let rendered: Vec<String> = blocks
        .iter()
        .enumerate()
        .map(|(index, block)| render_for_edit(index, block, options, guides))
        .collect();
    rendered.join("\n\n")
}

fn render_for_edit(
    index: usize,
    block: &Block,
    options: &FormatOptions,
    guides: &GuideCatalog,
) -> String {
    let mut title = block.title.trim().to_string();
    // Index 0 is the document title; a numeric prefix there is the problem
    // number, not an auto-number, so renumbering leaves it alone.
    if options.numbering && index > 0 {
        // Old prefixes go first so renumbering never stacks.
        title = NUMERIC_PREFIX.replace(&title, "").into_owned();
    }
    if options.strip_emoji {
        title = EMOJI_PREFIX.replace(title.trim(), "").trim().to_string();
    }
    if options.numbering && index > 0 {
        title = format!("{index}. {title}");
    }

    let mut out = heading_line(block.level, &title);
    match block.content.as_deref().map(str::trim) {
        Some(body) if !body.is_empty() => {
            out.push_str("\n\n");
            out.push_str(body);
        }
        _ => {
            // An empty section gets its guide question, if one is known.
            if options.guide_questions
                && index > 0
                && let Some(guide) = guides.guide_for(&block.title)
            {
                out.push_str("\n\n> ");
                out.push_str(guide);
            }
        }
    }
    out
}
