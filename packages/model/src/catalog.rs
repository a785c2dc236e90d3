//! Catalogue of the guide's known pages

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A page the guide ships with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GuidePage {
    Addons,
    Gearing,
    Transmog,
    Professions,
    Flipping,
    Sniping,
}

impl GuidePage {
    pub const ALL: [GuidePage; 6] = [
        GuidePage::Addons,
        GuidePage::Gearing,
        GuidePage::Transmog,
        GuidePage::Professions,
        GuidePage::Flipping,
        GuidePage::Sniping,
    ];

    /// Pages listed under the "get started" tab
    pub const GET_STARTED: [GuidePage; 2] = [GuidePage::Addons, GuidePage::Gearing];

    /// Pages listed under the "make gold" tab
    pub const MAKE_GOLD: [GuidePage; 4] = [
        GuidePage::Transmog,
        GuidePage::Professions,
        GuidePage::Flipping,
        GuidePage::Sniping,
    ];

    /// Document id in the store
    pub fn as_str(self) -> &'static str {
        match self {
            GuidePage::Addons => "addons",
            GuidePage::Gearing => "gearing",
            GuidePage::Transmog => "transmog",
            GuidePage::Professions => "professions",
            GuidePage::Flipping => "flipping",
            GuidePage::Sniping => "sniping",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            GuidePage::Addons => "Addons",
            GuidePage::Gearing => "Gearing",
            GuidePage::Transmog => "Transmog",
            GuidePage::Professions => "Professions",
            GuidePage::Flipping => "Flipping",
            GuidePage::Sniping => "Sniping",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            GuidePage::Addons => "Maximize profits",
            GuidePage::Gearing => "Speed up gains",
            GuidePage::Transmog => "Target appearance collectors",
            GuidePage::Professions => "Fuel the market",
            GuidePage::Flipping => "Buy low, sell high",
            GuidePage::Sniping => "Catch rare deals",
        }
    }

    /// Accent colour name used by the page card
    pub fn accent(self) -> &'static str {
        match self {
            GuidePage::Addons => "cyan",
            GuidePage::Gearing => "yellow",
            GuidePage::Transmog => "purple",
            GuidePage::Professions => "blue",
            GuidePage::Flipping => "orange",
            GuidePage::Sniping => "red",
        }
    }

    /// Name of the bundled header image
    pub fn image_name(self) -> &'static str {
        self.title()
    }
}

impl fmt::Display for GuidePage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GuidePage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GuidePage::ALL
            .into_iter()
            .find(|page| page.as_str() == s)
            .ok_or_else(|| format!("unknown guide page: {}", s))
    }
}
