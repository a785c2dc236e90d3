//! # Content Blocks
//!
//! The renderable units a page is composed of. Blocks are a closed set of
//! kinds, each carrying a stable string id that is unique within its page.
//!
//! Ids are generated at creation time for every kind, images included, so two
//! images pointing at the same url remain distinct blocks.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Stable identifier of a block within a page
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockId(String);

impl BlockId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Fresh random id (UUID v4, upper-case hyphenated)
    pub fn generate() -> Self {
        Self(Uuid::new_v4().hyphenated().to_string().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BlockId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for BlockId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A single content unit of a page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentBlock {
    Title { id: BlockId, value: String },
    Paragraph { id: BlockId, value: String },
    Hyperlink { id: BlockId, label: String, url: String },
    Image { id: BlockId, url: String },
    Divider { id: BlockId },
    Spacer { id: BlockId },
}

/// Discriminant of [`ContentBlock`], without payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockKind {
    Title,
    Paragraph,
    Hyperlink,
    Image,
    Divider,
    Spacer,
}

impl BlockKind {
    pub const ALL: [BlockKind; 6] = [
        BlockKind::Title,
        BlockKind::Paragraph,
        BlockKind::Hyperlink,
        BlockKind::Image,
        BlockKind::Divider,
        BlockKind::Spacer,
    ];

    /// Name used in the persisted `type` tag
    pub fn as_str(self) -> &'static str {
        match self {
            BlockKind::Title => "title",
            BlockKind::Paragraph => "paragraph",
            BlockKind::Hyperlink => "hyperlink",
            BlockKind::Image => "image",
            BlockKind::Divider => "divider",
            BlockKind::Spacer => "spacer",
        }
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for BlockKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BlockKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| format!("unknown block kind: {}", s))
    }
}

impl ContentBlock {
    pub fn title(value: impl Into<String>) -> Self {
        ContentBlock::Title {
            id: BlockId::generate(),
            value: value.into(),
        }
    }

    pub fn paragraph(value: impl Into<String>) -> Self {
        ContentBlock::Paragraph {
            id: BlockId::generate(),
            value: value.into(),
        }
    }

    pub fn hyperlink(label: impl Into<String>, url: impl Into<String>) -> Self {
        ContentBlock::Hyperlink {
            id: BlockId::generate(),
            label: label.into(),
            url: url.into(),
        }
    }

    pub fn image(url: impl Into<String>) -> Self {
        ContentBlock::Image {
            id: BlockId::generate(),
            url: url.into(),
        }
    }

    pub fn divider() -> Self {
        ContentBlock::Divider {
            id: BlockId::generate(),
        }
    }

    pub fn spacer() -> Self {
        ContentBlock::Spacer {
            id: BlockId::generate(),
        }
    }

    pub fn id(&self) -> &BlockId {
        match self {
            ContentBlock::Title { id, .. }
            | ContentBlock::Paragraph { id, .. }
            | ContentBlock::Hyperlink { id, .. }
            | ContentBlock::Image { id, .. }
            | ContentBlock::Divider { id }
            | ContentBlock::Spacer { id } => id,
        }
    }

    pub fn kind(&self) -> BlockKind {
        match self {
            ContentBlock::Title { .. } => BlockKind::Title,
            ContentBlock::Paragraph { .. } => BlockKind::Paragraph,
            ContentBlock::Hyperlink { .. } => BlockKind::Hyperlink,
            ContentBlock::Image { .. } => BlockKind::Image,
            ContentBlock::Divider { .. } => BlockKind::Divider,
            ContentBlock::Spacer { .. } => BlockKind::Spacer,
        }
    }

    /// Text value of a title or paragraph
    pub fn text(&self) -> Option<&str> {
        match self {
            ContentBlock::Title { value, .. } | ContentBlock::Paragraph { value, .. } => {
                Some(value)
            }
            ContentBlock::Hyperlink { .. }
            | ContentBlock::Image { .. }
            | ContentBlock::Divider { .. }
            | ContentBlock::Spacer { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ids_are_distinct() {
        let a = ContentBlock::image("https://example.com/a.png");
        let b = ContentBlock::image("https://example.com/a.png");

        assert_ne!(a.id(), b.id());
        assert_ne!(a.id().as_str(), "https://example.com/a.png");
    }

    #[test]
    fn test_kind_names_round_trip() {
        for kind in BlockKind::ALL {
            assert_eq!(kind.as_str().parse::<BlockKind>().unwrap(), kind);
        }
        assert!("video".parse::<BlockKind>().is_err());
    }

    #[test]
    fn test_text_only_for_title_and_paragraph() {
        assert_eq!(ContentBlock::title("Intro").text(), Some("Intro"));
        assert_eq!(ContentBlock::paragraph("Body").text(), Some("Body"));
        assert_eq!(ContentBlock::divider().text(), None);
        assert_eq!(ContentBlock::hyperlink("TSM", "https://tsm.gg").text(), None);
    }
}
