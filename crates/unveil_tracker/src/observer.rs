//! Intersection observation
//!
//! Per-element two-state machine driven by the fraction of the element's box
//! that overlaps the activation region (the viewport grown or shrunk by the
//! configured margin). No timers are involved: a transition happens only when
//! the fraction crosses the threshold.

use unveil_core::{Edges, Rect, Size};

/// Reveal state of a tracked element
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealState {
    #[default]
    Unrevealed,
    Revealed,
}

/// A state change produced by an observation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    Reveal,
    Hide,
}

impl RevealState {
    /// Feed one observation, returning the transition it causes
    ///
    /// Reveal requires a non-zero overlap at or above `threshold`. Hiding
    /// again only happens in `reset` mode and only once the element has left
    /// the region completely.
    pub fn observe(&mut self, ratio: f32, threshold: f32, reset: bool) -> Option<Transition> {
        match self {
            // An overlap exactly at the threshold reveals
            RevealState::Unrevealed if ratio > 0.0 && ratio >= threshold => {
                *self = RevealState::Revealed;
                Some(Transition::Reveal)
            }
            RevealState::Revealed if reset && ratio <= 0.0 => {
                *self = RevealState::Unrevealed;
                Some(Transition::Hide)
            }
            _ => None,
        }
    }

    pub fn is_revealed(&self) -> bool {
        matches!(self, RevealState::Revealed)
    }
}

/// Region elements must overlap, in viewport coordinates
pub fn activation_region(viewport: Size, margin: Edges) -> Rect {
    Rect::from_size(viewport).outset(margin)
}

/// Fraction of `bounds` that lies inside `region` (0.0-1.0)
///
/// Zero-area elements count as fully visible when their origin sits inside
/// the region.
pub fn overlap_fraction(bounds: Rect, region: Rect) -> f32 {
    let area = bounds.area();
    if area <= 0.0 {
        return if region.contains(bounds.origin) { 1.0 } else { 0.0 };
    }

    match bounds.intersection(&region) {
        Some(overlap) => (overlap.area() / area).clamp(0.0, 1.0),
        None => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn region() -> Rect {
        activation_region(Size::new(800.0, 600.0), Edges::new(0.0, 0.0, -30.0, 0.0))
    }

    #[test]
    fn test_region_applies_margin() {
        assert_eq!(region(), Rect::new(0.0, 0.0, 800.0, 570.0));
    }

    #[test]
    fn test_overlap_fraction() {
        // Fully inside
        assert_eq!(overlap_fraction(Rect::new(0.0, 100.0, 100.0, 100.0), region()), 1.0);
        // Half of the box below the shrunk bottom edge
        let half = overlap_fraction(Rect::new(0.0, 520.0, 100.0, 100.0), region());
        assert!((half - 0.5).abs() < 1e-6);
        // Within the margin strip only
        assert_eq!(overlap_fraction(Rect::new(0.0, 575.0, 100.0, 20.0), region()), 0.0);
        // Far below
        assert_eq!(overlap_fraction(Rect::new(0.0, 2000.0, 100.0, 100.0), region()), 0.0);
    }

    #[test]
    fn test_zero_area_element() {
        assert_eq!(overlap_fraction(Rect::new(10.0, 10.0, 0.0, 0.0), region()), 1.0);
        assert_eq!(overlap_fraction(Rect::new(10.0, 900.0, 0.0, 0.0), region()), 0.0);
    }

    #[test]
    fn test_one_shot_reveal() {
        let mut state = RevealState::default();

        assert_eq!(state.observe(0.1, 0.15, false), None);
        assert_eq!(state.observe(0.2, 0.15, false), Some(Transition::Reveal));
        assert_eq!(state.observe(0.0, 0.15, false), None);
        assert!(state.is_revealed());
    }

    #[test]
    fn test_reset_mode_hides_only_when_fully_out() {
        let mut state = RevealState::default();
        state.observe(1.0, 0.15, true);

        assert_eq!(state.observe(0.05, 0.15, true), None);
        assert_eq!(state.observe(0.0, 0.15, true), Some(Transition::Hide));
        assert_eq!(state.observe(0.5, 0.15, true), Some(Transition::Reveal));
    }

    #[test]
    fn test_exact_threshold_reveals() {
        // 25px of a 100px box inside the region: exactly 0.25
        let ratio = overlap_fraction(Rect::new(0.0, 545.0, 100.0, 100.0), region());
        assert_eq!(ratio, 0.25);

        let mut state = RevealState::default();
        assert_eq!(state.observe(ratio, 0.25, false), Some(Transition::Reveal));

        let mut below = RevealState::default();
        assert_eq!(below.observe(0.249, 0.25, false), None);
    }

    #[test]
    fn test_zero_threshold_needs_some_overlap() {
        let mut state = RevealState::default();
        assert_eq!(state.observe(0.0, 0.0, false), None);
        assert_eq!(state.observe(0.01, 0.0, false), Some(Transition::Reveal));
    }
}
