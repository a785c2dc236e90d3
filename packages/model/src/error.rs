//! Error types for the model

use crate::BlockId;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    #[error("Duplicate block id: {0}")]
    DuplicateBlockId(BlockId),

    #[error("Malformed page document: {0}")]
    MalformedDocument(String),
}
