//! Command-based editing of a template's block sequence.
//!
//! All session mutations flow through [`TemplateDoc::apply`]; the document
//! owns the only mutable reference to the sequence while the editor is open,
//! and protection rules (title block stays at index 0, default sections keep
//! their titles and cannot be removed) are enforced here rather than in UI
//! code.

use thiserror::Error;

use crate::model::{Block, BlockId};
use crate::parsing::{self, TemplateSyntax};
use crate::render;

/// Edit operations over the block sequence.
#[derive(Debug, Clone, PartialEq)]
pub enum Cmd {
    Retitle { id: BlockId, title: String },
    SetContent { id: BlockId, content: Option<String> },
    Insert { index: usize, block: Block },
    Remove { id: BlockId },
    Move { id: BlockId, to: usize },
}

#[derive(Debug, Error, PartialEq)]
pub enum EditError {
    #[error("no block with the given id in this document")]
    UnknownBlock,
    #[error("a block with this id already exists in the document")]
    DuplicateBlock,
    #[error("\"{0}\" is a protected section and cannot be retitled or removed")]
    ProtectedSection(String),
    #[error("the title block must stay at the top of the document")]
    TitlePosition,
    #[error("index {index} is out of range for {len} blocks")]
    IndexOutOfRange { index: usize, len: usize },
}

/// One editing session over a template's block sequence.
///
/// Blocks live only for the session; persisting means serializing back to
/// markdown via [`TemplateDoc::to_markdown`]. The version counter bumps on
/// every successful command so a UI can cheaply detect staleness.
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateDoc {
    blocks: Vec<Block>,
    version: u64,
}

impl TemplateDoc {
    /// Open a session by parsing persisted markdown with default syntax.
    pub fn open(markdown: &str, fallback_title: &str) -> Self {
        Self::from_blocks(parsing::parse(markdown, fallback_title))
    }

    /// Open a session with explicit syntax policy.
    pub fn open_with(markdown: &str, fallback_title: &str, syntax: &TemplateSyntax) -> Self {
        Self::from_blocks(parsing::parse_with(markdown, fallback_title, syntax))
    }

    pub fn from_blocks(blocks: Vec<Block>) -> Self {
        Self { blocks, version: 0 }
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    /// Serialize the current sequence to canonical markdown.
    pub fn to_markdown(&self) -> String {
        render::serialize(&self.blocks)
    }

    pub fn apply(&mut self, cmd: Cmd) -> Result<(), EditError> {
        match cmd {
            Cmd::Retitle { id, title } => {
                let block = self.block_mut(id)?;
                if block.is_default_section {
                    return Err(EditError::ProtectedSection(block.title.clone()));
                }
                block.title = title;
            }
            Cmd::SetContent { id, content } => {
                let block = self.block_mut(id)?;
                block.content = content.filter(|body| !body.trim().is_empty());
            }
            Cmd::Insert { index, block } => {
                if index == 0 {
                    return Err(EditError::TitlePosition);
                }
                if index > self.blocks.len() {
                    return Err(EditError::IndexOutOfRange {
                        index,
                        len: self.blocks.len(),
                    });
                }
                if self.blocks.iter().any(|existing| existing.id == block.id) {
                    return Err(EditError::DuplicateBlock);
                }
                self.blocks.insert(index, block);
            }
            Cmd::Remove { id } => {
                let index = self.index_of(id)?;
                if index == 0 {
                    return Err(EditError::TitlePosition);
                }
                if self.blocks[index].is_default_section {
                    return Err(EditError::ProtectedSection(self.blocks[index].title.clone()));
                }
                self.blocks.remove(index);
            }
            Cmd::Move { id, to } => {
                let from = self.index_of(id)?;
                if from == 0 || to == 0 {
                    return Err(EditError::TitlePosition);
                }
                if to >= self.blocks.len() {
                    return Err(EditError::IndexOutOfRange {
                        index: to,
                        len: self.blocks.len(),
                    });
                }
                let block = self.blocks.remove(from);
                self.blocks.insert(to, block);
            }
        }
        self.version += 1;
        Ok(())
    }

    fn index_of(&self, id: BlockId) -> Result<usize, EditError> {
        self.blocks
            .iter()
            .position(|block| block.id == id)
            .ok_or(EditError::UnknownBlock)
    }

    fn block_mut(&mut self, id: BlockId) -> Result<&mut Block, EditError> {
        self.blocks
            .iter_mut()
            .find(|block| block.id == id)
            .ok_or(EditError::UnknownBlock)
    }
}
