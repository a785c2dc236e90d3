pub mod edit;
pub mod init;
pub mod pages;
pub mod show;

pub use edit::{
    add, move_blocks, remove, set_label, set_text, set_url, AddArgs, MoveArgs, RemoveArgs,
    SetLabelArgs, SetTextArgs, SetUrlArgs,
};
pub use init::{init, InitArgs};
pub use pages::pages;
pub use show::{show, ShowArgs};

use std::path::PathBuf;
use std::sync::Arc;
use wow_editor::PageSession;
use wow_model::PageId;
use wow_store::{FileDocumentStore, PageClient};

/// Paths resolved from the command line and config
#[derive(Debug, Clone)]
pub struct Context {
    pub cwd: PathBuf,
    pub store_dir: PathBuf,
}

impl Context {
    pub fn client(&self) -> PageClient<FileDocumentStore> {
        PageClient::new(FileDocumentStore::new(&self.store_dir))
    }

    /// Load a page into a fresh session
    pub async fn open(&self, page: &str) -> anyhow::Result<PageSession> {
        let mut session = PageSession::new(PageId::parse(page), Arc::new(self.client()));
        session.activate().await?;
        Ok(session)
    }
}
