//! Storefront configuration.
//!
//! Every field has a default, so an empty JSON object (or no file at all)
//! yields the stock behavior of the shop page.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Width (px) at and above which the layout is considered desktop
pub const DEFAULT_BREAKPOINT_PX: u32 = 992;
/// Trailing delay applied to window resize events
pub const DEFAULT_RESIZE_DEBOUNCE_MS: u64 = 250;

/// Navigation controller settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    pub breakpoint_px: u32,
    pub resize_debounce_ms: u64,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            breakpoint_px: DEFAULT_BREAKPOINT_PX,
            resize_debounce_ms: DEFAULT_RESIZE_DEBOUNCE_MS,
        }
    }
}

impl NavConfig {
    pub fn resize_debounce(&self) -> Duration {
        Duration::from_millis(self.resize_debounce_ms)
    }
}

/// Timings and thresholds for the visual effects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectsConfig {
    /// Number of increments a stat counter takes to reach its target
    pub counter_steps: u32,
    pub counter_tick_ms: u64,
    pub ripple_ms: u64,
    pub toast_autohide_ms: u64,
    /// Scroll offset (px) past which the navbar gets its deeper shadow
    pub shadow_scroll_threshold: u32,
    /// Scroll offset (px) past which the scroll-to-top button appears
    pub scroll_top_threshold: u32,
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self {
            counter_steps: 100,
            counter_tick_ms: 20,
            ripple_ms: 600,
            toast_autohide_ms: 5000,
            shadow_scroll_threshold: 100,
            scroll_top_threshold: 300,
        }
    }
}

impl EffectsConfig {
    pub fn counter_tick(&self) -> Duration {
        Duration::from_millis(self.counter_tick_ms)
    }

    pub fn ripple_duration(&self) -> Duration {
        Duration::from_millis(self.ripple_ms)
    }

    pub fn toast_autohide(&self) -> Duration {
        Duration::from_millis(self.toast_autohide_ms)
    }
}

/// Top-level configuration for the storefront
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ShopConfig {
    pub nav: NavConfig,
    pub effects: EffectsConfig,
}

impl ShopConfig {
    /// Parse and validate a JSON document
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: ShopConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a file path
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&raw)
    }

    /// Load from `path` if it exists, otherwise fall back to defaults
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!(?path, "No config file, using defaults");
            Ok(Self::default())
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.nav.breakpoint_px == 0 {
            return Err(ConfigError::Invalid {
                field: "nav.breakpoint_px",
                reason: "must be greater than zero",
            });
        }
        if self.effects.counter_steps == 0 {
            return Err(ConfigError::Invalid {
                field: "effects.counter_steps",
                reason: "must be greater than zero",
            });
        }
        Ok(())
    }
}
