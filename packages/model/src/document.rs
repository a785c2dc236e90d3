//! # Persisted Document Layout
//!
//! One JSON document per page in the `pages` collection:
//!
//! ```text
//! {
//!   "id": "addons",
//!   "content": [
//!     { "type": "title", "id": "…", "value": "Intro" },
//!     { "type": "hyperlink", "id": "…", "label": "TSM", "urlString": "https://…" },
//!     { "type": "image", "id": "…", "url": "https://…" },
//!     { "type": "divider", "id": "…" }
//!   ]
//! }
//! ```
//!
//! `content` falls back to an empty list when it is absent or cannot be read
//! as a list of blocks. Images written before images carried their own id
//! use the url as id.

use crate::{BlockId, ContentBlock, ModelError, Page, PageId};
use serde::{Deserialize, Deserializer, Serialize};

/// Wire form of a [`Page`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageDocument {
    pub id: String,

    #[serde(default, deserialize_with = "content_or_empty")]
    pub content: Vec<ContentBlockDocument>,
}

/// Wire form of a [`ContentBlock`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentBlockDocument {
    Title {
        id: String,
        value: String,
    },
    Paragraph {
        id: String,
        value: String,
    },
    Hyperlink {
        id: String,
        label: String,
        #[serde(rename = "urlString")]
        url_string: String,
    },
    Image {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        id: Option<String>,
        url: String,
    },
    Divider {
        id: String,
    },
    Spacer {
        id: String,
    },
}

fn content_or_empty<'de, D>(deserializer: D) -> Result<Vec<ContentBlockDocument>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw
        .and_then(|value| serde_json::from_value(value).ok())
        .unwrap_or_default())
}

impl PageDocument {
    pub fn from_json(value: serde_json::Value) -> Result<Self, ModelError> {
        serde_json::from_value(value).map_err(|e| ModelError::MalformedDocument(e.to_string()))
    }

    pub fn to_json(&self) -> Result<serde_json::Value, ModelError> {
        serde_json::to_value(self).map_err(|e| ModelError::MalformedDocument(e.to_string()))
    }
}

impl From<&ContentBlock> for ContentBlockDocument {
    fn from(block: &ContentBlock) -> Self {
        match block {
            ContentBlock::Title { id, value } => ContentBlockDocument::Title {
                id: id.to_string(),
                value: value.clone(),
            },
            ContentBlock::Paragraph { id, value } => ContentBlockDocument::Paragraph {
                id: id.to_string(),
                value: value.clone(),
            },
            ContentBlock::Hyperlink { id, label, url } => ContentBlockDocument::Hyperlink {
                id: id.to_string(),
                label: label.clone(),
                url_string: url.clone(),
            },
            ContentBlock::Image { id, url } => ContentBlockDocument::Image {
                id: Some(id.to_string()),
                url: url.clone(),
            },
            ContentBlock::Divider { id } => ContentBlockDocument::Divider { id: id.to_string() },
            ContentBlock::Spacer { id } => ContentBlockDocument::Spacer { id: id.to_string() },
        }
    }
}

impl From<ContentBlockDocument> for ContentBlock {
    fn from(doc: ContentBlockDocument) -> Self {
        match doc {
            ContentBlockDocument::Title { id, value } => ContentBlock::Title {
                id: id.into(),
                value,
            },
            ContentBlockDocument::Paragraph { id, value } => ContentBlock::Paragraph {
                id: id.into(),
                value,
            },
            ContentBlockDocument::Hyperlink {
                id,
                label,
                url_string,
            } => ContentBlock::Hyperlink {
                id: id.into(),
                label,
                url: url_string,
            },
            ContentBlockDocument::Image { id, url } => ContentBlock::Image {
                id: BlockId::new(id.unwrap_or_else(|| url.clone())),
                url,
            },
            ContentBlockDocument::Divider { id } => ContentBlock::Divider { id: id.into() },
            ContentBlockDocument::Spacer { id } => ContentBlock::Spacer { id: id.into() },
        }
    }
}

impl From<&Page> for PageDocument {
    fn from(page: &Page) -> Self {
        Self {
            id: page.id.to_string(),
            content: page.content.iter().map(ContentBlockDocument::from).collect(),
        }
    }
}

impl TryFrom<PageDocument> for Page {
    type Error = ModelError;

    fn try_from(doc: PageDocument) -> Result<Self, Self::Error> {
        Page::with_content(
            PageId::parse(&doc.id),
            doc.content.into_iter().map(ContentBlock::from).collect(),
        )
    }
}
