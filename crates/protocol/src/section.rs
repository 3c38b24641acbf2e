use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A navigable page region.
///
/// The declaration order is the page order and doubles as the tie-break
/// order when two regions are equally good candidates for "active".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    Mission,
    Intelligence,
    Strategy,
    Vision,
}

impl SectionId {
    /// All sections in page order.
    pub const ALL: [SectionId; 4] = [
        SectionId::Mission,
        SectionId::Intelligence,
        SectionId::Strategy,
        SectionId::Vision,
    ];

    /// The DOM id / URL fragment of the section.
    pub fn as_str(self) -> &'static str {
        match self {
            SectionId::Mission => "mission",
            SectionId::Intelligence => "intelligence",
            SectionId::Strategy => "strategy",
            SectionId::Vision => "vision",
        }
    }

    /// Label shown in the navigation bar.
    pub fn label(self) -> &'static str {
        match self {
            SectionId::Mission => "Mission",
            SectionId::Intelligence => "Intelligence",
            SectionId::Strategy => "Strategy",
            SectionId::Vision => "Vision",
        }
    }

    /// In-page link target, e.g. `#mission`.
    pub fn href(self) -> String {
        format!("#{}", self.as_str())
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown section id: {0:?}")]
pub struct UnknownSection(pub String);

impl FromStr for SectionId {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}
