//! Unveil Core
//!
//! Foundational types shared by every Unveil crate:
//!
//! - **Geometry**: viewport-space `Rect`, `Point`, `Size`, and CSS-style `Edges`
//! - **Configuration**: [`TrackerConfig`] with serde/TOML loading and validation
//! - **Events**: element handles, animation kinds, and reveal notifications
//! - **Classes**: the class-name vocabulary shared with page stylesheets
//!
//! # Example
//!
//! ```rust
//! use unveil_core::{Edges, TrackerConfig};
//!
//! let config = TrackerConfig::from_toml_str("threshold = 0.3").unwrap();
//! assert_eq!(config.threshold, 0.3);
//! assert_eq!(config.activation_margin_px, Edges::new(0.0, 0.0, -30.0, 0.0));
//! ```

pub mod classes;
pub mod config;
pub mod error;
pub mod events;
pub mod geometry;

pub use config::TrackerConfig;
pub use error::{ConfigError, Result};
pub use events::{AnimationKind, ElementId, RevealEvent, ScrollDirection};
pub use geometry::{Edges, Point, Rect, Size};
