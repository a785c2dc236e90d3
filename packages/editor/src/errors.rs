//! Error types for the editor

use thiserror::Error;
use wow_model::PageId;

/// Failure reported by [`PageGateway::load`](crate::PageGateway::load)
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LoadError {
    #[error("Page not found: {0}")]
    NotFound(PageId),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Decode error: {0}")]
    Decode(String),
}

/// Failure reported by [`PageGateway::save`](crate::PageGateway::save)
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SaveError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Encode error: {0}")]
    Encode(String),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EditorError {
    #[error("Load error: {0}")]
    Load(#[from] LoadError),

    #[error("Save error: {0}")]
    Save(#[from] SaveError),

    #[error("Edit error: {0}")]
    Edit(#[from] crate::mutations::EditError),

    #[error("Cannot {action} while {state}")]
    InvalidTransition {
        action: &'static str,
        state: &'static str,
    },

    #[error("Page is being edited; commit or cancel first")]
    EditInProgress,

    #[error("A save is already in flight")]
    SaveInProgress,
}
