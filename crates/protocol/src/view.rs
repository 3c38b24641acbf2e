use serde::{Deserialize, Serialize};

use crate::section::SectionId;
use crate::theme::ThemeToken;

/// One entry of the navigation bar (desktop and mobile share the list).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    pub id: SectionId,
    pub label: String,
    pub href: String,
    /// Marks the link as the current page section (`aria-current="page"`).
    pub current: bool,
}

/// Everything a renderer needs from the interactive state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageView {
    pub elevated: bool,
    pub menu_open: bool,
    pub active: Option<SectionId>,
    pub nav: Vec<NavLink>,
    pub menu_button_label: String,
}

impl PageView {
    /// Build the view for the given interactive state.
    pub fn new(elevated: bool, menu_open: bool, active: Option<SectionId>) -> Self {
        Self {
            elevated,
            menu_open,
            active,
            nav: SectionId::ALL
                .into_iter()
                .map(|id| NavLink {
                    id,
                    label: id.label().to_string(),
                    href: id.href(),
                    current: active == Some(id),
                })
                .collect(),
            menu_button_label: if menu_open { "Close menu" } else { "Open menu" }.to_string(),
        }
    }

    /// Background treatment of the navigation bar.
    pub fn nav_background(&self) -> ThemeToken {
        if self.elevated {
            ThemeToken::NavElevatedBackground
        } else {
            ThemeToken::NavBackground
        }
    }

    pub fn link_color(&self, id: SectionId) -> ThemeToken {
        if self.active == Some(id) {
            ThemeToken::NavLinkActive
        } else {
            ThemeToken::NavLink
        }
    }
}
