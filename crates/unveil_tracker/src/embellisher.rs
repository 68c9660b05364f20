//! Page-level event routing
//!
//! [`Embellisher`] is what a host wires up: it owns the [`Tracker`] plus the
//! decorative [`Effects`] and routes every [`PageEvent`] to whichever of them
//! cares. Hosts call [`Embellisher::handle_event`] from their event listeners
//! and [`Embellisher::on_frame`] from their animation-frame callback.

use std::time::Instant;

use unveil_core::TrackerConfig;
use unveil_platform::{Page, PageEvent};

use crate::effects::Effects;
use crate::tracker::{RevealReceiver, Tracker};

pub struct Embellisher<P: Page> {
    tracker: Tracker<P>,
    effects: Effects,
}

impl<P: Page> Embellisher<P> {
    /// Set up tracker and effects; `None` under the reduced-motion gate
    pub fn init(page: P, config: TrackerConfig) -> Option<Self> {
        Some(Self {
            tracker: Tracker::init(page, config)?,
            effects: Effects::new(),
        })
    }

    /// Route one raw page event
    pub fn handle_event(&mut self, event: PageEvent, now: Instant) {
        if self.tracker.is_torn_down() {
            return;
        }

        match event {
            PageEvent::Scroll => {
                self.tracker.handle_scroll();
            }
            PageEvent::Resize => self.tracker.handle_resize(now),
            PageEvent::Activate { target, .. } => {
                self.tracker.activate(target);
                self.effects.handle(self.tracker.page_mut(), &event, now);
            }
            _ => {
                self.effects.handle(self.tracker.page_mut(), &event, now);
            }
        }
    }

    /// The host's animation-frame callback
    pub fn on_frame(&mut self, now: Instant) {
        if self.tracker.is_torn_down() {
            return;
        }
        self.effects.poll(self.tracker.page_mut(), now);
        self.tracker.on_frame(now);
    }

    /// Fire expired timers without running a frame
    pub fn poll(&mut self, now: Instant) {
        if self.tracker.is_torn_down() {
            return;
        }
        self.effects.poll(self.tracker.page_mut(), now);
        self.tracker.poll(now);
    }

    /// Whether the host should request another frame callback
    pub fn wants_frame(&self) -> bool {
        self.tracker.wants_frame()
    }

    /// Earliest pending timer across tracker and effects
    pub fn next_deadline(&self) -> Option<Instant> {
        if self.tracker.is_torn_down() {
            return None;
        }
        [self.tracker.next_deadline(), self.effects.next_deadline()]
            .into_iter()
            .flatten()
            .min()
    }

    pub fn subscribe(&mut self) -> Option<RevealReceiver> {
        self.tracker.subscribe()
    }

    /// Tear down tracker and effects; idempotent
    pub fn teardown(&mut self) {
        if self.tracker.is_torn_down() {
            return;
        }
        self.effects.clear(self.tracker.page_mut());
        self.tracker.teardown();
    }

    pub fn tracker(&self) -> &Tracker<P> {
        &self.tracker
    }

    pub fn tracker_mut(&mut self) -> &mut Tracker<P> {
        &mut self.tracker
    }

    pub fn effects(&self) -> &Effects {
        &self.effects
    }
}

impl<P: Page> Drop for Embellisher<P> {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use unveil_core::{classes, Point, Rect, Size};
    use unveil_platform::{MockElement, MockPage, ScrollBehavior};

    use crate::effects::RIPPLE_DURATION;

    fn page() -> MockPage {
        MockPage::new(Size::new(1000.0, 1000.0), 4000.0)
    }

    #[test]
    fn test_routes_scroll_through_frames() {
        let page = page();
        let section = page.insert(MockElement::new(Rect::new(0.0, 2000.0, 800.0, 400.0)).class("fade-in"));
        let mut app = Embellisher::init(page.clone(), TrackerConfig::default()).unwrap();
        let now = Instant::now();
        app.on_frame(now);

        page.set_scroll_offset(1500.0);
        for _ in 0..5 {
            app.handle_event(PageEvent::Scroll, now);
        }
        assert!(app.wants_frame());
        app.on_frame(now);

        assert!(app.tracker().is_revealed(section));
        assert!(!app.wants_frame());
        assert_eq!(app.tracker().state().last_known_offset, 1500.0);
    }

    #[test]
    fn test_scroll_to_top_click_also_ripples() {
        let page = page();
        let mut app = Embellisher::init(page.clone(), TrackerConfig::default()).unwrap();
        let button = app.tracker().ui().scroll_to_top().unwrap();
        let mut page_handle = page.clone();
        page_handle.add_class(button, classes::RIPPLE);

        let now = Instant::now();
        app.handle_event(
            PageEvent::Activate {
                target: button,
                pointer: Point::ZERO,
            },
            now,
        );
        assert_eq!(page.scroll_requests(), vec![(0.0, ScrollBehavior::Smooth)]);
        assert_eq!(app.effects().active_ripples(), 1);
        assert_eq!(app.next_deadline(), Some(now + RIPPLE_DURATION));

        app.on_frame(now + RIPPLE_DURATION);
        assert_eq!(app.effects().active_ripples(), 0);
        assert!(page.children(button).is_empty());
    }

    #[test]
    fn test_next_deadline_takes_earliest() {
        let page = page();
        let button = page.insert(MockElement::new(Rect::new(0.0, 0.0, 40.0, 40.0)).class("ripple"));
        let mut app = Embellisher::init(page.clone(), TrackerConfig::default()).unwrap();
        let now = Instant::now();

        app.handle_event(
            PageEvent::Activate {
                target: button,
                pointer: Point::new(5.0, 5.0),
            },
            now,
        );
        app.handle_event(PageEvent::Resize, now);
        assert_eq!(app.next_deadline(), Some(now + Duration::from_millis(250)));

        app.poll(now + Duration::from_millis(250));
        assert_eq!(app.next_deadline(), Some(now + RIPPLE_DURATION));
    }

    #[test]
    fn test_focus_and_hover_effects() {
        let page = page();
        let field = page.insert(MockElement::default().class("form-field").value("prefilled"));
        let card = page.insert(MockElement::default().class("card"));
        let mut app = Embellisher::init(page.clone(), TrackerConfig::default()).unwrap();
        let now = Instant::now();

        app.handle_event(PageEvent::Focus(field), now);
        app.handle_event(PageEvent::Blur(field), now);
        assert!(page.has_class(field, classes::HAS_VALUE));
        assert!(!page.has_class(field, classes::FOCUSED));

        app.handle_event(PageEvent::PointerEnter(card), now);
        assert!(page.has_class(card, classes::HOVERED));
    }

    #[test]
    fn test_teardown_clears_effects_and_ignores_events() {
        let page = page();
        let button = page.insert(MockElement::new(Rect::new(0.0, 0.0, 40.0, 40.0)).class("ripple"));
        let card = page.insert(MockElement::default().class("card"));
        let mut app = Embellisher::init(page.clone(), TrackerConfig::default()).unwrap();
        let now = Instant::now();

        app.handle_event(
            PageEvent::Activate {
                target: button,
                pointer: Point::ZERO,
            },
            now,
        );
        app.teardown();
        assert!(page.children(button).is_empty());
        // Only the page's own elements remain
        assert_eq!(page.len(), 2);

        let mutations = page.mutation_count();
        app.handle_event(PageEvent::PointerEnter(card), now);
        app.handle_event(PageEvent::Scroll, now);
        app.on_frame(now);
        app.teardown();
        assert_eq!(page.mutation_count(), mutations);
        assert!(app.next_deadline().is_none());
    }

    #[test]
    fn test_drop_removes_ripples() {
        let page = page();
        let button = page.insert(MockElement::new(Rect::new(0.0, 0.0, 40.0, 40.0)).class("ripple"));
        let mut app = Embellisher::init(page.clone(), TrackerConfig::default()).unwrap();

        app.handle_event(
            PageEvent::Activate {
                target: button,
                pointer: Point::new(10.0, 10.0),
            },
            Instant::now(),
        );
        assert_eq!(page.children(button).len(), 1);

        drop(app);
        assert!(page.children(button).is_empty());
        // Chrome is gone too
        assert_eq!(page.len(), 1);
    }

    #[test]
    fn test_reduced_motion_disables_effects_too() {
        let page = page();
        page.set_reduced_motion(true);
        assert!(Embellisher::init(page, TrackerConfig::default()).is_none());
    }
}
