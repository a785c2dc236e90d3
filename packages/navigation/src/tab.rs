use serde::{Deserialize, Serialize};
use std::fmt;

/// Bottom bar tabs, in display order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Tab {
    #[default]
    GetStarted,
    MakeGold,
    Community,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::GetStarted, Tab::MakeGold, Tab::Community];

    pub fn label(self) -> &'static str {
        match self {
            Tab::GetStarted => "GET STARTED",
            Tab::MakeGold => "MAKE GOLD",
            Tab::Community => "COMMUNITY",
        }
    }

    /// SF Symbol shown in the tab bar
    pub fn icon_name(self) -> &'static str {
        match self {
            Tab::GetStarted => "list.bullet.rectangle.portrait",
            Tab::MakeGold => "dollarsign.circle",
            Tab::Community => "person.2",
        }
    }

    /// Whether the tab shows a list of guide pages
    pub fn has_page_list(self) -> bool {
        match self {
            Tab::GetStarted | Tab::MakeGold => true,
            Tab::Community => false,
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_and_icons() {
        assert_eq!(Tab::GetStarted.label(), "GET STARTED");
        assert_eq!(Tab::MakeGold.icon_name(), "dollarsign.circle");
        assert_eq!(Tab::Community.icon_name(), "person.2");
        assert_eq!(Tab::default(), Tab::GetStarted);
    }

    #[test]
    fn test_only_guide_tabs_have_lists() {
        let with_lists: Vec<_> = Tab::ALL.into_iter().filter(|t| t.has_page_list()).collect();
        assert_eq!(with_lists, vec![Tab::GetStarted, Tab::MakeGold]);
    }
}
