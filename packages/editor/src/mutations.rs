//! # Block Mutations
//!
//! Edit operations on the ordered block list of a page being edited.
//!
//! ## Mutation Semantics
//!
//! ### Append
//! - Adds the block at the tail
//! - Fails if a block with the same id is already present
//!
//! ### Delete
//! - Positions are read against the order at call time
//! - All positions are removed in one pass; any out-of-range position
//!   rejects the whole call
//!
//! ### Move
//! - `to` is a position in the list before the move, `0..=len`
//! - Moved blocks stay together, keep their relative order, and land in
//!   front of the block that was at `to` (or at the tail when `to == len`)
//!
//! ### SetText / SetLabel / SetUrl
//! - Atomic replacement of one field
//! - Fails if the block kind has no such field

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use thiserror::Error;
use wow_model::{BlockId, BlockKind, ContentBlock};

/// Semantic edit operations on a page's content
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum BlockMutation {
    /// Append a block at the end of the page
    Append {
        #[serde(with = "block_wire")]
        block: ContentBlock,
    },

    /// Remove the blocks at the given positions
    Delete { indices: BTreeSet<usize> },

    /// Relocate the blocks at `from` as a group in front of position `to`
    Move { from: BTreeSet<usize>, to: usize },

    /// Replace the text of a title or paragraph
    SetText { block_id: BlockId, value: String },

    /// Replace the label of a hyperlink
    SetLabel { block_id: BlockId, label: String },

    /// Replace the target of a hyperlink
    SetUrl { block_id: BlockId, url: String },
}

/// Field addressed by a field mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockField {
    Text,
    Label,
    Url,
}

impl std::fmt::Display for BlockField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            BlockField::Text => "text",
            BlockField::Label => "label",
            BlockField::Url => "url",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EditError {
    #[error("Duplicate block id: {0}")]
    DuplicateBlockId(BlockId),

    #[error("Block not found: {0}")]
    BlockNotFound(BlockId),

    #[error("Position {index} out of bounds (len {len})")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("A {kind} block has no {field} field")]
    FieldNotSupported { kind: BlockKind, field: BlockField },
}

impl BlockMutation {
    /// Apply mutation to the content with validation
    pub fn apply(&self, content: &mut Vec<ContentBlock>) -> Result<(), EditError> {
        self.validate(content)?;

        match self {
            BlockMutation::Append { block } => {
                content.push(block.clone());
                Ok(())
            }

            BlockMutation::Delete { indices } => {
                Self::apply_delete(content, indices);
                Ok(())
            }

            BlockMutation::Move { from, to } => {
                Self::apply_move(content, from, *to);
                Ok(())
            }

            BlockMutation::SetText { block_id, value } => {
                Self::apply_set_field(content, block_id, BlockField::Text, value)
            }

            BlockMutation::SetLabel { block_id, label } => {
                Self::apply_set_field(content, block_id, BlockField::Label, label)
            }

            BlockMutation::SetUrl { block_id, url } => {
                Self::apply_set_field(content, block_id, BlockField::Url, url)
            }
        }
    }

    /// Validate without applying
    pub fn validate(&self, content: &[ContentBlock]) -> Result<(), EditError> {
        match self {
            BlockMutation::Append { block } => {
                if content.iter().any(|existing| existing.id() == block.id()) {
                    return Err(EditError::DuplicateBlockId(block.id().clone()));
                }
                Ok(())
            }

            BlockMutation::Delete { indices } => Self::check_bounds(indices, content.len()),

            BlockMutation::Move { from, to } => {
                Self::check_bounds(from, content.len())?;
                if *to > content.len() {
                    return Err(EditError::IndexOutOfBounds {
                        index: *to,
                        len: content.len(),
                    });
                }
                Ok(())
            }

            BlockMutation::SetText { block_id, .. } => {
                Self::check_field(content, block_id, BlockField::Text)
            }

            BlockMutation::SetLabel { block_id, .. } => {
                Self::check_field(content, block_id, BlockField::Label)
            }

            BlockMutation::SetUrl { block_id, .. } => {
                Self::check_field(content, block_id, BlockField::Url)
            }
        }
    }

    /// Short name for logging
    pub fn name(&self) -> &'static str {
        match self {
            BlockMutation::Append { .. } => "append",
            BlockMutation::Delete { .. } => "delete",
            BlockMutation::Move { .. } => "move",
            BlockMutation::SetText { .. } => "set_text",
            BlockMutation::SetLabel { .. } => "set_label",
            BlockMutation::SetUrl { .. } => "set_url",
        }
    }

    fn check_bounds(indices: &BTreeSet<usize>, len: usize) -> Result<(), EditError> {
        match indices.iter().next_back() {
            Some(&index) if index >= len => Err(EditError::IndexOutOfBounds { index, len }),
            Some(_) | None => Ok(()),
        }
    }

    fn check_field(
        content: &[ContentBlock],
        block_id: &BlockId,
        field: BlockField,
    ) -> Result<(), EditError> {
        let block = content
            .iter()
            .find(|block| block.id() == block_id)
            .ok_or_else(|| EditError::BlockNotFound(block_id.clone()))?;

        if Self::supports(block.kind(), field) {
            Ok(())
        } else {
            Err(EditError::FieldNotSupported {
                kind: block.kind(),
                field,
            })
        }
    }

    fn supports(kind: BlockKind, field: BlockField) -> bool {
        match kind {
            BlockKind::Title | BlockKind::Paragraph => field == BlockField::Text,
            BlockKind::Hyperlink => matches!(field, BlockField::Label | BlockField::Url),
            BlockKind::Image | BlockKind::Divider | BlockKind::Spacer => false,
        }
    }

    fn apply_delete(content: &mut Vec<ContentBlock>, indices: &BTreeSet<usize>) {
        let mut position = 0;
        content.retain(|_| {
            let keep = !indices.contains(&position);
            position += 1;
            keep
        });
    }

    fn apply_move(content: &mut Vec<ContentBlock>, from: &BTreeSet<usize>, to: usize) {
        if from.is_empty() {
            return;
        }

        let offset = to - from.range(..to).count();

        let mut moved = Vec::with_capacity(from.len());
        let mut remaining = Vec::with_capacity(content.len() - from.len());
        for (position, block) in content.drain(..).enumerate() {
            if from.contains(&position) {
                moved.push(block);
            } else {
                remaining.push(block);
            }
        }

        let tail = remaining.split_off(offset);
        remaining.extend(moved);
        remaining.extend(tail);
        *content = remaining;
    }

    fn apply_set_field(
        content: &mut [ContentBlock],
        block_id: &BlockId,
        field: BlockField,
        new_value: &str,
    ) -> Result<(), EditError> {
        let block = content
            .iter_mut()
            .find(|block| block.id() == block_id)
            .ok_or_else(|| EditError::BlockNotFound(block_id.clone()))?;

        let kind = block.kind();
        let slot = match (block, field) {
            (ContentBlock::Title { value, .. }, BlockField::Text)
            | (ContentBlock::Paragraph { value, .. }, BlockField::Text) => value,
            (ContentBlock::Hyperlink { label, .. }, BlockField::Label) => label,
            (ContentBlock::Hyperlink { url, .. }, BlockField::Url) => url,
            (
                ContentBlock::Title { .. }
                | ContentBlock::Paragraph { .. }
                | ContentBlock::Hyperlink { .. }
                | ContentBlock::Image { .. }
                | ContentBlock::Divider { .. }
                | ContentBlock::Spacer { .. },
                _,
            ) => return Err(EditError::FieldNotSupported { kind, field }),
        };

        *slot = new_value.to_string();
        Ok(())
    }
}

/// Serialises blocks in their persisted document form
mod block_wire {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use wow_model::{ContentBlock, ContentBlockDocument};

    pub fn serialize<S: Serializer>(block: &ContentBlock, serializer: S) -> Result<S::Ok, S::Error> {
        ContentBlockDocument::from(block).serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<ContentBlock, D::Error> {
        ContentBlockDocument::deserialize(deserializer).map(ContentBlock::from)
    }
}
