use serde::{Deserialize, Serialize};

/// Semantic color tokens resolved by each renderer's palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ThemeToken {
    // Brand
    Crimson,
    Ember,
    Oxblood,
    Amber,
    Champagne,

    Background,
    Surface,
    Border,

    TextPrimary,
    TextSecondary,
    TextMuted,

    // Navigation
    NavBackground,
    NavElevatedBackground,
    NavLink,
    NavLinkActive,

    // Call to action
    CtaBackground,
    CtaHover,
}

impl ThemeToken {
    /// Tokens emitted as CSS custom properties.
    pub const ALL: [ThemeToken; 17] = [
        ThemeToken::Crimson,
        ThemeToken::Ember,
        ThemeToken::Oxblood,
        ThemeToken::Amber,
        ThemeToken::Champagne,
        ThemeToken::Background,
        ThemeToken::Surface,
        ThemeToken::Border,
        ThemeToken::TextPrimary,
        ThemeToken::TextSecondary,
        ThemeToken::TextMuted,
        ThemeToken::NavBackground,
        ThemeToken::NavElevatedBackground,
        ThemeToken::NavLink,
        ThemeToken::NavLinkActive,
        ThemeToken::CtaBackground,
        ThemeToken::CtaHover,
    ];

    /// Kebab-case name used for the CSS custom property.
    pub fn css_name(self) -> &'static str {
        match self {
            ThemeToken::Crimson => "crimson",
            ThemeToken::Ember => "ember",
            ThemeToken::Oxblood => "oxblood",
            ThemeToken::Amber => "amber",
            ThemeToken::Champagne => "champagne",
            ThemeToken::Background => "background",
            ThemeToken::Surface => "surface",
            ThemeToken::Border => "border",
            ThemeToken::TextPrimary => "text-primary",
            ThemeToken::TextSecondary => "text-secondary",
            ThemeToken::TextMuted => "text-muted",
            ThemeToken::NavBackground => "nav-background",
            ThemeToken::NavElevatedBackground => "nav-elevated-background",
            ThemeToken::NavLink => "nav-link",
            ThemeToken::NavLinkActive => "nav-link-active",
            ThemeToken::CtaBackground => "cta-background",
            ThemeToken::CtaHover => "cta-hover",
        }
    }
}
