//! Document-level types.

use super::{Paragraph, Table};
use serde::{Deserialize, Serialize};

/// A parsed piece of mixed content: an ordered list of blocks.
///
/// Documents are produced fresh by every parse call and never mutated by
/// the library afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Content blocks in source order
    pub blocks: Vec<Block>,

    /// Whether the content was parsed for inline placement
    #[serde(default)]
    pub inline: bool,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self {
            blocks: Vec::new(),
            inline: false,
        }
    }

    /// Add a block to the document.
    pub fn add_block(&mut self, block: Block) {
        self.blocks.push(block);
    }

    /// Add a paragraph to the document.
    pub fn add_paragraph(&mut self, paragraph: Paragraph) {
        self.blocks.push(Block::Paragraph(paragraph));
    }

    /// Add a table to the document.
    pub fn add_table(&mut self, table: Table) {
        self.blocks.push(Block::Table(table));
    }

    /// Add a spacer to the document.
    pub fn add_spacer(&mut self) {
        self.blocks.push(Block::Spacer);
    }

    /// Check if the document has any blocks.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Get the number of blocks.
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Iterate over the tables of the document.
    pub fn tables(&self) -> impl Iterator<Item = &Table> {
        self.blocks.iter().filter_map(|block| match block {
            Block::Table(t) => Some(t),
            _ => None,
        })
    }

    /// Iterate over the paragraphs of the document.
    pub fn paragraphs(&self) -> impl Iterator<Item = &Paragraph> {
        self.blocks.iter().filter_map(|block| match block {
            Block::Paragraph(p) => Some(p),
            _ => None,
        })
    }

    /// Get plain text content of the entire document.
    pub fn plain_text(&self) -> String {
        self.blocks
            .iter()
            .map(|block| match block {
                Block::Paragraph(p) => p.plain_text(),
                Block::Table(t) => t.plain_text(),
                Block::Spacer => String::new(),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// A content block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// A line of prose with inline math
    Paragraph(Paragraph),

    /// A markdown-style table
    Table(Table),

    /// Vertical space left by a blank line
    Spacer,
}

impl Block {
    /// Check if this block is a paragraph.
    pub fn is_paragraph(&self) -> bool {
        matches!(self, Block::Paragraph(_))
    }

    /// Check if this block is a table.
    pub fn is_table(&self) -> bool {
        matches!(self, Block::Table(_))
    }

    /// Check if this block is a spacer.
    pub fn is_spacer(&self) -> bool {
        matches!(self, Block::Spacer)
    }
}
