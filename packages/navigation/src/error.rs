use thiserror::Error;
use wow_model::PageId;

use crate::Tab;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum NavigationError {
    #[error("Page '{0}' is not listed")]
    UnknownPage(PageId),

    #[error("Tab '{0}' has no page list")]
    NoPageList(Tab),
}
