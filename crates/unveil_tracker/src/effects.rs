//! Decorative interaction effects
//!
//! Peripheral handlers that only toggle classes or add short-lived elements:
//! click ripples, floating form labels, and hover states on cards, images,
//! and links. None of this touches tracker state.

use std::time::{Duration, Instant};

use unveil_animation::TimerQueue;
use unveil_core::{classes, ElementId, Point, Rect};
use unveil_platform::{Page, PageEvent, Style};

/// How long a ripple wave stays in the page
pub const RIPPLE_DURATION: Duration = Duration::from_millis(600);

const HOVER_TARGETS: [&str; 3] = [classes::CARD, classes::HOVER_ZOOM, classes::HOVER_UNDERLINE];

/// Square ripple placement inside `bounds`, centered on `pointer`
///
/// The wave's side is the larger of the element's dimensions so it covers
/// the element from any starting point.
pub fn ripple_frame(bounds: Rect, pointer: Point) -> Rect {
    let size = bounds.width().max(bounds.height());
    Rect::new(
        pointer.x - bounds.x() - size / 2.0,
        pointer.y - bounds.y() - size / 2.0,
        size,
        size,
    )
}

/// Handlers for the decorative effects
#[derive(Default)]
pub struct Effects {
    ripples: TimerQueue<ElementId>,
}

impl Effects {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply whatever effect `event` triggers; returns `true` if one did
    pub fn handle<P: Page + ?Sized>(&mut self, page: &mut P, event: &PageEvent, now: Instant) -> bool {
        match *event {
            PageEvent::Activate { target, pointer } => self.ripple(page, target, pointer, now),
            PageEvent::Focus(target) if page.has_class(target, classes::FORM_FIELD) => {
                page.add_class(target, classes::FOCUSED);
                true
            }
            PageEvent::Blur(target) if page.has_class(target, classes::FORM_FIELD) => {
                page.remove_class(target, classes::FOCUSED);
                sync_has_value(page, target);
                true
            }
            PageEvent::Input(target) if page.has_class(target, classes::FORM_FIELD) => {
                sync_has_value(page, target);
                true
            }
            PageEvent::PointerEnter(target) if is_hover_target(page, target) => {
                page.add_class(target, classes::HOVERED);
                true
            }
            PageEvent::PointerLeave(target) if is_hover_target(page, target) => {
                page.remove_class(target, classes::HOVERED);
                true
            }
            _ => false,
        }
    }

    fn ripple<P: Page + ?Sized>(
        &mut self,
        page: &mut P,
        target: ElementId,
        pointer: Point,
        now: Instant,
    ) -> bool {
        if !page.has_class(target, classes::RIPPLE) {
            return false;
        }
        let Some(bounds) = page.bounds(target) else {
            return false;
        };
        let Some(wave) = page.create_element(Some(target), classes::RIPPLE_WAVE) else {
            return false;
        };

        page.set_style(wave, Style::Frame(ripple_frame(bounds, pointer)));
        self.ripples.schedule(now + RIPPLE_DURATION, wave);
        tracing::trace!(?target, ?wave, "Ripple started");
        true
    }

    /// Remove ripples whose animation has finished
    pub fn poll<P: Page + ?Sized>(&mut self, page: &mut P, now: Instant) {
        for wave in self.ripples.drain_due(now) {
            page.remove_element(wave);
        }
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.ripples.next_deadline()
    }

    pub fn active_ripples(&self) -> usize {
        self.ripples.len()
    }

    /// Remove every outstanding ripple immediately
    pub fn clear<P: Page + ?Sized>(&mut self, page: &mut P) {
        for wave in self.ripples.clear() {
            page.remove_element(wave);
        }
    }
}

fn is_hover_target<P: Page + ?Sized>(page: &P, element: ElementId) -> bool {
    HOVER_TARGETS
        .iter()
        .any(|class| page.has_class(element, class))
}

fn sync_has_value<P: Page + ?Sized>(page: &mut P, field: ElementId) {
    let filled = page
        .value(field)
        .is_some_and(|value| !value.trim().is_empty());
    page.set_class(field, classes::HAS_VALUE, filled);
}

#[cfg(test)]
mod tests {
    use super::*;
    use unveil_core::Size;
    use unveil_platform::{MockElement, MockPage};

    fn page() -> MockPage {
        MockPage::new(Size::new(800.0, 600.0), 2000.0)
    }

    #[test]
    fn test_ripple_frame_centers_on_pointer() {
        let frame = ripple_frame(Rect::new(100.0, 50.0, 200.0, 40.0), Point::new(150.0, 70.0));
        assert_eq!(frame, Rect::new(-50.0, -80.0, 200.0, 200.0));
    }

    #[test]
    fn test_ripple_lifecycle() {
        let mut page = page();
        let button = page.insert(MockElement::new(Rect::new(0.0, 0.0, 120.0, 40.0)).class("ripple"));
        let mut effects = Effects::new();
        let start = Instant::now();

        let click = PageEvent::Activate {
            target: button,
            pointer: Point::new(60.0, 20.0),
        };
        assert!(effects.handle(&mut page, &click, start));

        let wave = page.children(button)[0];
        assert!(page.has_class(wave, classes::RIPPLE_WAVE));
        assert_eq!(page.frame(wave), Some(Rect::new(0.0, -40.0, 120.0, 120.0)));
        assert_eq!(effects.next_deadline(), Some(start + RIPPLE_DURATION));

        effects.poll(&mut page, start + Duration::from_millis(100));
        assert!(page.contains(wave));

        effects.poll(&mut page, start + RIPPLE_DURATION);
        assert!(!page.contains(wave));
        assert_eq!(effects.active_ripples(), 0);
    }

    #[test]
    fn test_click_without_ripple_class() {
        let mut page = page();
        let plain = page.insert(MockElement::new(Rect::new(0.0, 0.0, 10.0, 10.0)));
        let mut effects = Effects::new();

        let click = PageEvent::Activate {
            target: plain,
            pointer: Point::ZERO,
        };
        assert!(!effects.handle(&mut page, &click, Instant::now()));
        assert!(page.children(plain).is_empty());
    }

    #[test]
    fn test_floating_label() {
        let mut page = page();
        let field = page.insert(MockElement::default().class("form-field"));
        let mut effects = Effects::new();
        let now = Instant::now();

        effects.handle(&mut page, &PageEvent::Focus(field), now);
        assert!(page.has_class(field, classes::FOCUSED));

        page.set_value(field, "ada@example.com");
        effects.handle(&mut page, &PageEvent::Input(field), now);
        assert!(page.has_class(field, classes::HAS_VALUE));

        page.set_value(field, "   ");
        effects.handle(&mut page, &PageEvent::Blur(field), now);
        assert!(!page.has_class(field, classes::FOCUSED));
        assert!(!page.has_class(field, classes::HAS_VALUE));
    }

    #[test]
    fn test_hover_targets() {
        let mut page = page();
        let card = page.insert(MockElement::default().class("card"));
        let text = page.insert(MockElement::default());
        let mut effects = Effects::new();
        let now = Instant::now();

        assert!(effects.handle(&mut page, &PageEvent::PointerEnter(card), now));
        assert!(page.has_class(card, classes::HOVERED));
        assert!(effects.handle(&mut page, &PageEvent::PointerLeave(card), now));
        assert!(!page.has_class(card, classes::HOVERED));

        assert!(!effects.handle(&mut page, &PageEvent::PointerEnter(text), now));
    }

    #[test]
    fn test_clear_removes_waves() {
        let mut page = page();
        let button = page.insert(MockElement::new(Rect::new(0.0, 0.0, 50.0, 50.0)).class("ripple"));
        let mut effects = Effects::new();
        let click = PageEvent::Activate {
            target: button,
            pointer: Point::new(10.0, 10.0),
        };
        effects.handle(&mut page, &click, Instant::now());
        effects.handle(&mut page, &click, Instant::now());
        assert_eq!(page.children(button).len(), 2);

        effects.clear(&mut page);
        assert!(page.children(button).is_empty());
    }
}
