//! Scroll-derived metrics
//!
//! [`ScrollState`] is recomputed once per frame from the page's offset and
//! dimensions. It feeds the progress indicator, the scroll-to-top control,
//! and parallax layers.

use unveil_core::ScrollDirection;

/// Offset past which the scroll-to-top control shows
pub const SCROLL_TO_TOP_THRESHOLD: f32 = 300.0;

/// Scroll progress through the document as a percentage (0-100)
///
/// A document no taller than the viewport has nothing to scroll through and
/// reports 0.
pub fn progress_percent(offset: f32, document_height: f32, viewport_height: f32) -> f32 {
    let scrollable = document_height - viewport_height;
    if scrollable <= 0.0 || !scrollable.is_finite() {
        return 0.0;
    }
    (offset / scrollable * 100.0).clamp(0.0, 100.0)
}

/// What changed during a [`ScrollState::advance`]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollChange {
    pub direction_changed: bool,
    pub to_top_changed: bool,
}

/// Page-wide scroll metrics
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollState {
    pub last_known_offset: f32,
    pub direction: ScrollDirection,
    pub progress_percent: f32,
    pub to_top_visible: bool,
}

impl ScrollState {
    /// Fold in a new offset reading
    pub fn advance(
        &mut self,
        offset: f32,
        document_height: f32,
        viewport_height: f32,
    ) -> ScrollChange {
        let offset = if offset.is_finite() { offset } else { 0.0 };

        self.progress_percent = progress_percent(offset, document_height, viewport_height);

        let direction = ScrollDirection::between(self.last_known_offset, offset);
        let direction_changed = direction != self.direction;
        self.direction = direction;

        let to_top_visible = offset > SCROLL_TO_TOP_THRESHOLD;
        let to_top_changed = to_top_visible != self.to_top_visible;
        self.to_top_visible = to_top_visible;

        self.last_known_offset = offset;

        ScrollChange {
            direction_changed,
            to_top_changed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_scenario() {
        assert_eq!(progress_percent(0.0, 2000.0, 1000.0), 0.0);
        assert_eq!(progress_percent(500.0, 2000.0, 1000.0), 50.0);
        assert_eq!(progress_percent(1000.0, 2000.0, 1000.0), 100.0);
        assert_eq!(progress_percent(1500.0, 2000.0, 1000.0), 100.0);
    }

    #[test]
    fn test_progress_short_document() {
        assert_eq!(progress_percent(0.0, 800.0, 1000.0), 0.0);
        assert_eq!(progress_percent(200.0, 1000.0, 1000.0), 0.0);
    }

    #[test]
    fn test_progress_monotonic_and_bounded() {
        let mut previous = 0.0;
        for step in -10..300 {
            let offset = step as f32 * 10.0;
            let progress = progress_percent(offset, 2400.0, 900.0);
            assert!((0.0..=100.0).contains(&progress));
            assert!(progress >= previous);
            previous = progress;
        }
    }

    #[test]
    fn test_direction_scenario() {
        let mut state = ScrollState::default();
        state.advance(100.0, 2000.0, 1000.0);

        state.advance(200.0, 2000.0, 1000.0);
        assert_eq!(state.direction, ScrollDirection::Down);

        state.advance(150.0, 2000.0, 1000.0);
        assert_eq!(state.direction, ScrollDirection::Up);

        state.advance(150.0, 2000.0, 1000.0);
        assert_eq!(state.direction, ScrollDirection::Up);
        assert_eq!(state.last_known_offset, 150.0);
    }

    #[test]
    fn test_to_top_threshold() {
        let mut state = ScrollState::default();

        let change = state.advance(299.0, 4000.0, 1000.0);
        assert!(!state.to_top_visible);
        assert!(!change.to_top_changed);

        let change = state.advance(301.0, 4000.0, 1000.0);
        assert!(state.to_top_visible);
        assert!(change.to_top_changed);

        let change = state.advance(900.0, 4000.0, 1000.0);
        assert!(!change.to_top_changed);
    }

    #[test]
    fn test_non_finite_offset_reads_as_zero() {
        let mut state = ScrollState::default();
        state.advance(f32::NAN, 2000.0, 1000.0);
        assert_eq!(state.progress_percent, 0.0);
        assert_eq!(state.last_known_offset, 0.0);
    }
}
