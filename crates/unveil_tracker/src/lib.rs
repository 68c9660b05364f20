//! Unveil Tracker
//!
//! Scroll-driven visibility and progress tracking for a page.
//!
//! # Features
//!
//! - **Reveal tracking**: elements flip to revealed once enough of their box
//!   enters the activation region, optionally hiding again when staggered
//!   reset mode is on
//! - **Scroll metrics**: progress percentage, direction, and scroll-to-top
//!   visibility, recomputed at most once per frame
//! - **Parallax**: per-layer vertical offsets, re-applied after resizes settle
//! - **Page chrome**: injected progress indicator and scroll-to-top control
//! - **Reveal stream**: one unbounded channel per subscriber, every reveal delivered
//! - **Effects**: ripples, floating labels, and hover states
//!
//! [`Embellisher`] bundles everything behind a single event entry point;
//! [`Tracker`] can also be used on its own.

pub mod chrome;
pub mod discover;
pub mod effects;
pub mod embellisher;
pub mod observer;
pub mod parallax;
pub mod scroll;
pub mod tracker;

pub use chrome::InjectedUi;
pub use discover::{discover, Discovered, ParallaxRegistration, Registration};
pub use effects::{ripple_frame, Effects, RIPPLE_DURATION};
pub use embellisher::Embellisher;
pub use observer::{activation_region, overlap_fraction, RevealState, Transition};
pub use parallax::{ParallaxElement, ParallaxLayers};
pub use scroll::{progress_percent, ScrollChange, ScrollState, SCROLL_TO_TOP_THRESHOLD};
pub use tracker::{RevealReceiver, TrackedElement, Tracker};
