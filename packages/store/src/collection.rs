use std::fmt;

/// Document collections known to the app
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Pages,
}

impl Collection {
    pub fn as_str(self) -> &'static str {
        match self {
            Collection::Pages => "pages",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
