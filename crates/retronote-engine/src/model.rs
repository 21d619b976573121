use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a block within one editing session.
///
/// Ids are generated fresh on every parse and are never persisted. The only
/// guarantee is uniqueness within a single sequence, which is all the UI
/// needs for list diffing and drag reordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockId(Uuid);

impl BlockId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for BlockId {
    fn default() -> Self {
        Self::new()
    }
}

/// Heading level of a block, determining the markdown marker it renders to.
///
/// `Paragraph` blocks carry their title as a whole-line bold span instead of
/// an ATX heading. Matching is exhaustive in both the parser and the
/// renderer so a new level cannot be added to one side only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlockLevel {
    H1,
    H2,
    H3,
    Paragraph,
}

/// A titled unit of editable template content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    /// Session-stable identity for UI diffing.
    pub id: BlockId,
    /// Heading level driving the serialized marker.
    pub level: BlockLevel,
    /// Heading text (for paragraph blocks, the bolded lead text).
    pub title: String,
    /// Body text following the heading line, up to the next block start.
    pub content: Option<String>,
    /// Structurally required section, protected from deletion and retitling.
    pub is_default_section: bool,
}

impl Block {
    pub fn new(level: BlockLevel, title: impl Into<String>) -> Self {
        Self {
            id: BlockId::new(),
            level,
            title: title.into(),
            content: None,
            is_default_section: false,
        }
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }
}

/// Suggested-section template supplied by a collaborator.
///
/// Presets arrive as already-fetched JSON records; the engine never performs
/// the fetch itself. Field names follow the upstream API payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preset {
    pub title: String,
    /// Helper question shown under the section while it is still empty.
    pub guide: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_guide: Option<String>,
    pub category: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_ids_are_unique() {
        let a = Block::new(BlockLevel::H2, "접근 방법");
        let b = Block::new(BlockLevel::H2, "접근 방법");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn preset_deserializes_from_api_payload() {
        let json = r#"{
            "title": "💡 접근 방법",
            "guide": "어떤 순서로 문제를 풀었나요?",
            "contentGuide": "풀이 과정을 단계별로 적어보세요",
            "category": "problem-solving"
        }"#;
        let preset: Preset = serde_json::from_str(json).unwrap();
        assert_eq!(preset.title, "💡 접근 방법");
        assert!(preset.content_guide.is_some());
    }

    #[test]
    fn preset_content_guide_is_optional() {
        let json = r#"{"title": "회고", "guide": "오늘 배운 점은?", "category": "retro"}"#;
        let preset: Preset = serde_json::from_str(json).unwrap();
        assert_eq!(preset.content_guide, None);
    }
}
