//! # Pages
//!
//! A page is an identified, ordered sequence of content blocks. Block order is
//! render order, and block ids are unique within the sequence.

use crate::{BlockId, ContentBlock, GuidePage, ModelError};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Identifier of a page document
///
/// Known catalogue pages parse to [`PageId::Known`]; anything else is kept
/// verbatim as [`PageId::Custom`]. Both persist as the bare string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PageId {
    Known(GuidePage),
    Custom(String),
}

impl PageId {
    pub fn parse(id: &str) -> Self {
        match id.parse::<GuidePage>() {
            Ok(page) => PageId::Known(page),
            Err(_) => PageId::Custom(id.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            PageId::Known(page) => page.as_str(),
            PageId::Custom(id) => id,
        }
    }

    pub fn known(&self) -> Option<GuidePage> {
        match self {
            PageId::Known(page) => Some(*page),
            PageId::Custom(_) => None,
        }
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<GuidePage> for PageId {
    fn from(page: GuidePage) -> Self {
        PageId::Known(page)
    }
}

impl From<&str> for PageId {
    fn from(id: &str) -> Self {
        PageId::parse(id)
    }
}

impl From<String> for PageId {
    fn from(id: String) -> Self {
        PageId::parse(&id)
    }
}

impl From<PageId> for String {
    fn from(id: PageId) -> Self {
        match id {
            PageId::Known(page) => page.as_str().to_string(),
            PageId::Custom(id) => id,
        }
    }
}

/// A guide page and its content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub id: PageId,
    pub content: Vec<ContentBlock>,
}

impl Page {
    /// Empty page
    pub fn new(id: impl Into<PageId>) -> Self {
        Self {
            id: id.into(),
            content: Vec::new(),
        }
    }

    /// Page with content, rejecting repeated block ids
    pub fn with_content(
        id: impl Into<PageId>,
        content: Vec<ContentBlock>,
    ) -> Result<Self, ModelError> {
        let page = Self {
            id: id.into(),
            content,
        };
        page.check_unique_ids()?;
        Ok(page)
    }

    pub fn check_unique_ids(&self) -> Result<(), ModelError> {
        let mut seen = HashSet::with_capacity(self.content.len());
        for block in &self.content {
            if !seen.insert(block.id()) {
                return Err(ModelError::DuplicateBlockId(block.id().clone()));
            }
        }
        Ok(())
    }

    pub fn position_of(&self, id: &BlockId) -> Option<usize> {
        self.content.iter().position(|block| block.id() == id)
    }

    pub fn block(&self, id: &BlockId) -> Option<&ContentBlock> {
        self.content.iter().find(|block| block.id() == id)
    }

    pub fn block_ids(&self) -> Vec<BlockId> {
        self.content.iter().map(|block| block.id().clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}
