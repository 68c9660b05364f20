//! Class names shared between the tracker, the effects layer, and page CSS

/// Added to every tracked element once revealed
pub const REVEALED: &str = "revealed";
/// Toggled on the scroll-to-top control
pub const VISIBLE: &str = "visible";
/// Marks the injected progress indicator
pub const PROGRESS_BAR: &str = "scroll-progress";
/// Marks the injected scroll-to-top control
pub const SCROLL_TO_TOP: &str = "scroll-to-top";
/// Marks parallax layers
pub const PARALLAX: &str = "parallax";

// Decorative effects
pub const RIPPLE: &str = "ripple";
pub const RIPPLE_WAVE: &str = "ripple-wave";
pub const FORM_FIELD: &str = "form-field";
pub const FOCUSED: &str = "focused";
pub const HAS_VALUE: &str = "has-value";
pub const CARD: &str = "card";
pub const HOVER_ZOOM: &str = "hover-zoom";
pub const HOVER_UNDERLINE: &str = "hover-underline";
pub const HOVERED: &str = "hovered";

// Discovery attributes
pub const ATTR_ANIMATE: &str = "data-animate";
pub const ATTR_STAGGER: &str = "data-stagger";
pub const ATTR_PARALLAX: &str = "data-parallax";
