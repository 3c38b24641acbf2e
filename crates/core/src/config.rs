//! Site configuration: tuned constants exposed as JSON-loadable settings.

use royale_protocol::ObserverConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Scroll offset (px) above which the navigation bar is elevated.
pub const DEFAULT_ELEVATION_THRESHOLD: f64 = 50.0;

/// Approximate height (px) of the fixed navigation bar.
pub const DEFAULT_HEADER_OFFSET: f64 = 80.0;

/// Fraction of the header height a section may scroll past the viewport
/// top and still be preferred as the active section.
const HEADER_CUTOFF_FACTOR: f64 = 0.25;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("config must be a JSON object")]
    NotAnObject,
    #[error("elevation threshold must be finite, got {0}")]
    ElevationThreshold(f64),
    #[error("header offset must be positive and finite, got {0}")]
    HeaderOffset(f64),
    #[error("at least one observer threshold is required")]
    NoThresholds,
    #[error("observer threshold {0} is outside [0, 1]")]
    ThresholdOutOfRange(f64),
    #[error("observer thresholds must be in ascending order")]
    ThresholdsUnsorted,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    pub elevation_threshold: f64,
    pub header_offset: f64,
    pub observer: ObserverConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            elevation_threshold: DEFAULT_ELEVATION_THRESHOLD,
            header_offset: DEFAULT_HEADER_OFFSET,
            observer: ObserverConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Decode and validate a JSON config. Missing fields take defaults.
    pub fn from_json(data: &[u8]) -> Result<Self, ConfigError> {
        // Derived structs also accept a sequence and fill fields by position.
        let value: serde_json::Value = serde_json::from_slice(data)?;
        if !value.is_object() {
            return Err(ConfigError::NotAnObject);
        }
        let config: SiteConfig = serde_json::from_value(value)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.elevation_threshold.is_finite() {
            return Err(ConfigError::ElevationThreshold(self.elevation_threshold));
        }
        if !(self.header_offset.is_finite() && self.header_offset > 0.0) {
            return Err(ConfigError::HeaderOffset(self.header_offset));
        }
        let thresholds = &self.observer.thresholds;
        if thresholds.is_empty() {
            return Err(ConfigError::NoThresholds);
        }
        if let Some(&bad) = thresholds.iter().find(|t| !(0.0..=1.0).contains(*t)) {
            return Err(ConfigError::ThresholdOutOfRange(bad));
        }
        if thresholds.windows(2).any(|w| w[0] > w[1]) {
            return Err(ConfigError::ThresholdsUnsorted);
        }
        Ok(())
    }

    /// Lowest top offset (px) at which a section is still preferred over
    /// one with a larger visible area.
    pub fn section_cutoff(&self) -> f64 {
        -HEADER_CUTOFF_FACTOR * self.header_offset
    }
}
