//! # File-backed Document Store
//!
//! Layout on disk:
//!
//! ```text
//! <root>/
//!   pages/
//!     addons.json
//!     gearing.json
//! ```
//!
//! Writes go to a sibling temp file that is renamed over the target, so a
//! reader never sees a half-written document.

use crate::{Collection, DocumentStore, StoreError};
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

const EXTENSION: &str = "json";

#[derive(Debug, Clone)]
pub struct FileDocumentStore {
    root: PathBuf,
}

impl FileDocumentStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn collection_dir(&self, collection: Collection) -> PathBuf {
        self.root.join(collection.as_str())
    }

    fn document_path(&self, collection: Collection, id: &str) -> Result<PathBuf, StoreError> {
        validate_id(id)?;
        Ok(self
            .collection_dir(collection)
            .join(format!("{}.{}", id, EXTENSION)))
    }
}

/// Ids become file names; keep them inside the collection directory
fn validate_id(id: &str) -> Result<(), StoreError> {
    let invalid = id.is_empty()
        || id.starts_with('.')
        || id.contains(['/', '\\', '\0']);

    if invalid {
        Err(StoreError::InvalidDocumentId(id.to_string()))
    } else {
        Ok(())
    }
}

#[async_trait]
impl DocumentStore for FileDocumentStore {
    async fn get_document(
        &self,
        collection: Collection,
        id: &str,
    ) -> Result<Option<serde_json::Value>, StoreError> {
        let path = self.document_path(collection, id)?;

        let bytes = match fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "document not found");
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        tracing::debug!(path = %path.display(), bytes = bytes.len(), "document read");
        Ok(Some(serde_json::from_slice(&bytes)?))
    }

    async fn put_document(
        &self,
        collection: Collection,
        id: &str,
        document: serde_json::Value,
    ) -> Result<(), StoreError> {
        let path = self.document_path(collection, id)?;
        fs::create_dir_all(self.collection_dir(collection)).await?;

        let bytes = serde_json::to_vec_pretty(&document)?;
        let tmp_path = path.with_extension(format!("{}.tmp", EXTENSION));
        fs::write(&tmp_path, &bytes).await?;
        fs::rename(&tmp_path, &path).await?;

        tracing::debug!(path = %path.display(), bytes = bytes.len(), "document written");
        Ok(())
    }

    async fn list_documents(&self, collection: Collection) -> Result<Vec<String>, StoreError> {
        let dir = self.collection_dir(collection);
        let mut entries = match fs::read_dir(&dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut ids = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == EXTENSION) {
                if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                    ids.push(stem.to_string());
                }
            }
        }

        ids.sort();
        Ok(ids)
    }
}
