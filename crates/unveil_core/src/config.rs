//! Tracker configuration
//!
//! Every option is optional; missing keys fall back to [`TrackerConfig::default`].
//! Keys use camelCase so a page's inline options object and a TOML file share
//! one vocabulary:
//!
//! ```toml
//! threshold = 0.2
//! activationMarginPx = "0 0 -30 0"
//! parallaxSpeed = 0.5
//! enableStaggeredAnimations = true
//! ```

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::geometry::Edges;

/// Options controlling the visibility tracker and its injected UI
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct TrackerConfig {
    /// Overlap fraction an element must exceed before it is revealed (0.0-1.0)
    pub threshold: f32,
    /// Margin applied to each viewport edge; negative values shrink the region
    pub activation_margin_px: Edges,
    /// Default parallax speed for elements without their own factor
    pub parallax_speed: f32,
    pub enable_parallax: bool,
    pub enable_progress_bar: bool,
    pub enable_scroll_to_top: bool,
    /// Stagger delays plus hide-again-when-offscreen reset
    pub enable_staggered_animations: bool,
    /// Skip initialization entirely when the platform prefers reduced motion
    pub respect_reduced_motion_preference: bool,
    /// Delay added per stagger index
    pub stagger_step_ms: u64,
    /// Upper bound on any stagger delay
    pub max_stagger_delay_ms: u64,
    /// Quiet period before a resize recomputes parallax offsets
    pub resize_debounce_ms: u64,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            threshold: 0.15,
            activation_margin_px: Edges::new(0.0, 0.0, -30.0, 0.0),
            parallax_speed: 0.3,
            enable_parallax: true,
            enable_progress_bar: true,
            enable_scroll_to_top: true,
            enable_staggered_animations: false,
            respect_reduced_motion_preference: true,
            stagger_step_ms: 100,
            max_stagger_delay_ms: 1000,
            resize_debounce_ms: 250,
        }
    }
}

impl TrackerConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: TrackerConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!("Loaded tracker config from {}", path.display());
        Self::from_toml_str(&source)
    }

    /// Check value ranges that serde can't express
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(ConfigError::InvalidThreshold(self.threshold));
        }
        if !self.parallax_speed.is_finite() {
            return Err(ConfigError::InvalidSpeed(self.parallax_speed));
        }
        Ok(())
    }

    pub fn with_threshold(mut self, threshold: f32) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_margin(mut self, margin: Edges) -> Self {
        self.activation_margin_px = margin;
        self
    }

    pub fn with_parallax_speed(mut self, speed: f32) -> Self {
        self.parallax_speed = speed;
        self
    }

    pub fn with_parallax(mut self, enabled: bool) -> Self {
        self.enable_parallax = enabled;
        self
    }

    pub fn with_progress_bar(mut self, enabled: bool) -> Self {
        self.enable_progress_bar = enabled;
        self
    }

    pub fn with_scroll_to_top(mut self, enabled: bool) -> Self {
        self.enable_scroll_to_top = enabled;
        self
    }

    pub fn with_staggered_animations(mut self, enabled: bool) -> Self {
        self.enable_staggered_animations = enabled;
        self
    }

    pub fn with_reduced_motion_respected(mut self, respected: bool) -> Self {
        self.respect_reduced_motion_preference = respected;
        self
    }

    /// Config with every injected UI element and parallax turned off
    pub fn reveal_only() -> Self {
        Self {
            enable_parallax: false,
            enable_progress_bar: false,
            enable_scroll_to_top: false,
            ..Default::default()
        }
    }

    pub fn stagger_step(&self) -> Duration {
        Duration::from_millis(self.stagger_step_ms)
    }

    pub fn max_stagger_delay(&self) -> Duration {
        Duration::from_millis(self.max_stagger_delay_ms)
    }

    pub fn resize_debounce(&self) -> Duration {
        Duration::from_millis(self.resize_debounce_ms)
    }
}
