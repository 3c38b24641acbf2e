use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::section::SectionId;

/// Thresholds at which a visibility change triggers a new observation.
pub const DEFAULT_THRESHOLDS: [f64; 4] = [0.1, 0.25, 0.5, 0.75];

/// One region's visibility as seen in a single layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectionObservation {
    pub id: SectionId,
    /// Signed distance (px) from the viewport top to the region's top edge.
    pub top: f64,
    /// Visible fraction of the region inside the observed window.
    pub intersection_ratio: f64,
    pub is_intersecting: bool,
}

impl SectionObservation {
    pub fn new(id: SectionId, top: f64, intersection_ratio: f64, is_intersecting: bool) -> Self {
        Self {
            id,
            top,
            intersection_ratio,
            is_intersecting,
        }
    }
}

/// Observations delivered together, processed as one atomic unit.
pub type ObservationBatch = Vec<SectionObservation>;

/// A CSS length as accepted by `rootMargin`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Length {
    Px(f64),
    /// Percentage of the root's extent along the same axis.
    Percent(f64),
}

impl Length {
    /// Resolve to pixels against `basis` (the root's width or height).
    pub fn resolve(self, basis: f64) -> f64 {
        match self {
            Length::Px(px) => px,
            Length::Percent(pct) => basis * pct / 100.0,
        }
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Length::Px(px) => write!(f, "{px}px"),
            Length::Percent(pct) => write!(f, "{pct}%"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MarginParseError {
    #[error("root margin is empty")]
    Empty,
    #[error("root margin takes at most 4 values, got {0}")]
    TooManyValues(usize),
    #[error("invalid length {0:?}: expected px or %")]
    InvalidLength(String),
}

impl FromStr for Length {
    type Err = MarginParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || MarginParseError::InvalidLength(s.to_string());
        // `f64::from_str` also takes `NaN` and `inf`.
        let number = |num: &str| {
            num.parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(invalid)
        };
        if let Some(num) = s.strip_suffix("px") {
            number(num).map(Length::Px)
        } else if let Some(num) = s.strip_suffix('%') {
            number(num).map(Length::Percent)
        } else if number(s).is_ok_and(|v| v == 0.0) {
            // Unitless zero is the only unitless length CSS allows.
            Ok(Length::Px(0.0))
        } else {
            Err(invalid())
        }
    }
}

/// Grows (positive) or shrinks (negative) the observed window on each side.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RootMargin {
    pub top: Length,
    pub right: Length,
    pub bottom: Length,
    pub left: Length,
}

impl Default for RootMargin {
    /// `0px 0px -55% 0px`: only the upper 45% of the viewport counts.
    fn default() -> Self {
        Self {
            top: Length::Px(0.0),
            right: Length::Px(0.0),
            bottom: Length::Percent(-55.0),
            left: Length::Px(0.0),
        }
    }
}

impl fmt::Display for RootMargin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.top, self.right, self.bottom, self.left)
    }
}

impl FromStr for RootMargin {
    type Err = MarginParseError;

    /// Parses the CSS shorthand with one to four values.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let values = s
            .split_whitespace()
            .map(str::parse)
            .collect::<Result<Vec<Length>, _>>()?;
        let (top, right, bottom, left) = match values.as_slice() {
            [] => return Err(MarginParseError::Empty),
            [all] => (*all, *all, *all, *all),
            [v, h] => (*v, *h, *v, *h),
            [t, h, b] => (*t, *h, *b, *h),
            [t, r, b, l] => (*t, *r, *b, *l),
            more => return Err(MarginParseError::TooManyValues(more.len())),
        };
        Ok(Self {
            top,
            right,
            bottom,
            left,
        })
    }
}

impl TryFrom<String> for RootMargin {
    type Error = MarginParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<RootMargin> for String {
    fn from(margin: RootMargin) -> Self {
        margin.to_string()
    }
}

/// How regions are watched: the observed window and the ratio boundaries
/// whose crossing produces a new observation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ObserverConfig {
    pub root_margin: RootMargin,
    pub thresholds: Vec<f64>,
}

impl Default for ObserverConfig {
    fn default() -> Self {
        Self {
            root_margin: RootMargin::default(),
            thresholds: DEFAULT_THRESHOLDS.to_vec(),
        }
    }
}

impl ObserverConfig {
    /// Number of thresholds at or below `ratio`.
    ///
    /// Two samples with the same index sit between the same pair of
    /// boundaries, so no observation is due between them.
    pub fn threshold_index(&self, ratio: f64) -> usize {
        self.thresholds.iter().filter(|&&t| t <= ratio).count()
    }
}
