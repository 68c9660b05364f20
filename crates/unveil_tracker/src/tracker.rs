//! Visibility tracker & scroll reporter
//!
//! The [`Tracker`] is the one context object that owns everything the engine
//! mutates: the tracked set, parallax layers, scroll metrics, and the chrome
//! it injected into the page. It holds no global state; construct one per
//! page and pass it to whatever needs it.
//!
//! # Driving the tracker
//!
//! The host forwards raw events and fires frames:
//!
//! ```rust
//! use std::time::Instant;
//! use unveil_core::{Rect, Size, TrackerConfig};
//! use unveil_platform::{MockElement, MockPage, Page};
//! use unveil_tracker::Tracker;
//!
//! let page = MockPage::new(Size::new(800.0, 600.0), 3000.0);
//! let card = page.insert(MockElement::new(Rect::new(0.0, 1200.0, 400.0, 200.0)).class("fade-up"));
//!
//! let mut tracker = Tracker::init(page.clone(), TrackerConfig::default()).unwrap();
//! let mut reveals = tracker.subscribe().unwrap();
//!
//! page.set_scroll_offset(900.0);
//! tracker.handle_scroll();
//! tracker.handle_scroll(); // coalesced
//! tracker.on_frame(Instant::now());
//!
//! assert!(tracker.is_revealed(card));
//! assert_eq!(reveals.try_recv().unwrap().element, card);
//! ```
//!
//! Scroll events only mark the next frame dirty; all recomputation happens in
//! [`Tracker::on_frame`], at most once per frame. Resize events start a
//! trailing debounce that re-applies parallax offsets once the viewport stops
//! changing.

use std::time::{Duration, Instant};

use indexmap::IndexMap;
use tokio::sync::mpsc;
use unveil_animation::{Debouncer, FrameScheduler, Stagger};
use unveil_core::{classes, AnimationKind, ElementId, RevealEvent, TrackerConfig};
use unveil_platform::{Page, Style};

use crate::chrome::InjectedUi;
use crate::discover::discover;
use crate::observer::{activation_region, overlap_fraction, RevealState, Transition};
use crate::parallax::ParallaxLayers;
use crate::scroll::ScrollState;

/// Subscriber end of the reveal stream
///
/// Unbounded, so a frame that reveals a whole page at once reaches every
/// subscriber intact.
pub type RevealReceiver = mpsc::UnboundedReceiver<RevealEvent>;

/// Registration entry for a tracked element
#[derive(Clone, Debug, PartialEq)]
pub struct TrackedElement {
    pub kind: AnimationKind,
    pub stagger_index: Option<usize>,
    pub state: RevealState,
}

/// Scroll-driven visibility tracker for one page
pub struct Tracker<P: Page> {
    page: P,
    config: TrackerConfig,
    tracked: IndexMap<ElementId, TrackedElement>,
    parallax: ParallaxLayers,
    scroll: ScrollState,
    ui: InjectedUi,
    frames: FrameScheduler,
    resize: Debouncer,
    stagger: Stagger,
    subscribers: Vec<mpsc::UnboundedSender<RevealEvent>>,
    torn_down: bool,
}

impl<P: Page> Tracker<P> {
    /// Set up tracking on `page`
    ///
    /// Returns `None` without touching the page when the configuration
    /// respects the platform's reduced-motion preference and the user has
    /// asked for it. Otherwise injects the enabled chrome, discovers marked
    /// elements, and schedules the first frame so initial visibility is
    /// evaluated.
    pub fn init(mut page: P, config: TrackerConfig) -> Option<Self> {
        if config.respect_reduced_motion_preference && page.prefers_reduced_motion() {
            tracing::info!("Reduced motion preferred; tracker disabled");
            return None;
        }

        if let Err(err) = config.validate() {
            tracing::warn!("Tracker config out of range, continuing anyway: {}", err);
        }

        let ui = InjectedUi::install(
            &mut page,
            config.enable_progress_bar,
            config.enable_scroll_to_top,
        );
        let mut tracker = Self {
            page,
            resize: Debouncer::new(config.resize_debounce()),
            stagger: Stagger::new(config.stagger_step(), config.max_stagger_delay()),
            config,
            tracked: IndexMap::new(),
            parallax: ParallaxLayers::new(),
            scroll: ScrollState::default(),
            ui,
            frames: FrameScheduler::new(),
            subscribers: Vec::new(),
            torn_down: false,
        };

        tracker.refresh();
        tracker.frames.request();
        tracing::debug!(
            tracked = tracker.tracked.len(),
            parallax = tracker.parallax.len(),
            "Tracker initialized"
        );
        Some(tracker)
    }

    // ------------------------------------------------------------------------
    // Registration
    // ------------------------------------------------------------------------

    /// Start tracking an element; no-op if it is already tracked
    pub fn register(&mut self, element: ElementId, kind: AnimationKind) {
        self.register_with_stagger(element, kind, None);
    }

    /// Start tracking an element with a stagger position
    pub fn register_with_stagger(
        &mut self,
        element: ElementId,
        kind: AnimationKind,
        stagger_index: Option<usize>,
    ) {
        if self.torn_down || self.tracked.contains_key(&element) {
            return;
        }

        // Entries re-registered by a refresh keep the reveal the page already shows
        let state = if self.page.has_class(element, classes::REVEALED) {
            RevealState::Revealed
        } else {
            RevealState::Unrevealed
        };

        tracing::debug!(?element, %kind, ?stagger_index, "Tracking element");
        self.tracked.insert(
            element,
            TrackedElement {
                kind,
                stagger_index,
                state,
            },
        );
        // First observation happens on the next frame
        self.frames.request();
    }

    /// Stop tracking an element; no-op if it isn't tracked
    pub fn unregister(&mut self, element: ElementId) {
        if self.tracked.shift_remove(&element).is_some() {
            tracing::debug!(?element, "Untracked element");
        }
    }

    /// Add a parallax layer; `speed` of `None` follows the configured default
    pub fn register_parallax(&mut self, element: ElementId, speed: Option<f32>) {
        if self.torn_down {
            return;
        }
        if !self.config.enable_parallax {
            tracing::debug!(?element, "Parallax disabled; ignoring layer");
            return;
        }
        if self.parallax.insert(element, speed) {
            self.frames.request();
        }
    }

    pub fn unregister_parallax(&mut self, element: ElementId) {
        self.parallax.remove(element);
    }

    /// Drop every registration and rediscover marked elements
    ///
    /// Use after the page content changed.
    pub fn refresh(&mut self) {
        if self.torn_down {
            return;
        }

        self.tracked.clear();
        self.parallax.clear();

        let found = discover(&self.page);
        for registration in found.reveals {
            self.register_with_stagger(
                registration.element,
                registration.kind,
                registration.stagger_index,
            );
        }
        for layer in found.parallax {
            self.register_parallax(layer.element, layer.speed);
        }
        tracing::debug!(
            tracked = self.tracked.len(),
            parallax = self.parallax.len(),
            "Refreshed registrations"
        );
    }

    // ------------------------------------------------------------------------
    // Events & frames
    // ------------------------------------------------------------------------

    /// A raw scroll event arrived; schedule work for the next frame
    ///
    /// Returns `true` when the host should request a frame callback.
    pub fn handle_scroll(&mut self) -> bool {
        if self.torn_down {
            return false;
        }
        self.frames.request()
    }

    /// A raw resize event arrived; (re)start the quiet-period timer
    pub fn handle_resize(&mut self, now: Instant) {
        if self.torn_down {
            return;
        }
        self.resize.trigger(now);
    }

    /// Activation of an element; returns `true` if it was the scroll-to-top control
    pub fn activate(&mut self, element: ElementId) -> bool {
        if self.torn_down || !self.ui.is_scroll_to_top(element) {
            return false;
        }
        tracing::debug!("Scroll-to-top activated");
        self.ui.activate_scroll_to_top(&mut self.page);
        self.frames.request();
        true
    }

    /// Fire expired timers
    pub fn poll(&mut self, now: Instant) {
        if self.torn_down {
            return;
        }
        if self.resize.poll(now) {
            tracing::trace!("Resize settled; re-applying parallax");
            self.apply_parallax(self.page.scroll_offset());
        }
    }

    /// The host's animation-frame callback
    ///
    /// Runs timers, then, if anything was scheduled since the last frame,
    /// one scroll tick followed by one intersection pass.
    pub fn on_frame(&mut self, now: Instant) {
        self.poll(now);
        if self.torn_down || !self.frames.begin_frame() {
            return;
        }
        self.report_scroll_tick();
        self.observe();
    }

    /// Whether the host needs to keep delivering frames
    pub fn wants_frame(&self) -> bool {
        !self.torn_down && self.frames.is_pending()
    }

    /// Earliest timer deadline, for hosts that sleep between frames
    pub fn next_deadline(&self) -> Option<Instant> {
        if self.torn_down {
            return None;
        }
        self.resize.deadline()
    }

    /// Recompute scroll metrics and push them to parallax layers and chrome
    ///
    /// Meant to run at most once per frame; [`Tracker::on_frame`] does that.
    pub fn report_scroll_tick(&mut self) {
        if self.torn_down {
            return;
        }

        let offset = self.page.scroll_offset();
        let viewport = self.page.viewport_size();
        let change =
            self.scroll
                .advance(offset, self.page.document_height(), viewport.height);

        self.apply_parallax(self.scroll.last_known_offset);
        self.ui.update(&mut self.page, &self.scroll, change.to_top_changed);

        tracing::trace!(
            offset = self.scroll.last_known_offset,
            progress = self.scroll.progress_percent,
            direction = ?self.scroll.direction,
            "Scroll tick"
        );
    }

    fn apply_parallax(&mut self, offset: f32) {
        if self.parallax.is_empty() {
            return;
        }
        self.parallax
            .apply(&mut self.page, offset, self.config.parallax_speed);
    }

    /// Test every tracked element against the activation region
    fn observe(&mut self) {
        if self.tracked.is_empty() {
            return;
        }

        let region = activation_region(
            self.page.viewport_size(),
            self.config.activation_margin_px,
        );
        let threshold = self.config.threshold;
        let staggered = self.config.enable_staggered_animations;

        for (&element, entry) in self.tracked.iter_mut() {
            let Some(bounds) = self.page.bounds(element) else {
                continue;
            };
            let ratio = overlap_fraction(bounds, region);

            match entry.state.observe(ratio, threshold, staggered) {
                Some(Transition::Reveal) => {
                    let delay = match (staggered, entry.stagger_index) {
                        (true, Some(index)) => self.stagger.delay(index),
                        _ => Duration::ZERO,
                    };
                    if !delay.is_zero() {
                        self.page.set_style(element, Style::TransitionDelay(delay));
                    }
                    self.page.add_class(element, &entry.kind.active_class());
                    self.page.add_class(element, classes::REVEALED);

                    tracing::debug!(?element, kind = %entry.kind, ratio, "Revealed");
                    let event = RevealEvent {
                        element,
                        kind: entry.kind.clone(),
                        delay,
                    };
                    // Dropped receivers fall out of the list
                    self.subscribers.retain(|tx| tx.send(event.clone()).is_ok());
                }
                Some(Transition::Hide) => {
                    self.page.remove_class(element, classes::REVEALED);
                    self.page.remove_class(element, &entry.kind.active_class());
                    tracing::debug!(?element, "Hidden again");
                }
                None => {}
            }
        }
    }

    // ------------------------------------------------------------------------
    // Subscription & teardown
    // ------------------------------------------------------------------------

    /// Subscribe to reveal notifications
    ///
    /// Returns `None` once the tracker is torn down. Receivers see
    /// `Disconnected` after teardown once they've drained what was already
    /// sent.
    pub fn subscribe(&mut self) -> Option<RevealReceiver> {
        if self.torn_down {
            return None;
        }
        let (tx, rx) = mpsc::unbounded_channel();
        self.subscribers.push(tx);
        Some(rx)
    }

    /// Stop all observation, remove injected chrome, and drop every registration
    ///
    /// Idempotent. Afterwards no method touches the page again.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.torn_down = true;

        self.frames.cancel();
        self.resize.cancel();
        self.tracked.clear();
        self.parallax.clear();
        self.ui.remove(&mut self.page);
        self.subscribers.clear();
        tracing::info!("Tracker torn down");
    }

    // ------------------------------------------------------------------------
    // Inspection
    // ------------------------------------------------------------------------

    pub fn state(&self) -> &ScrollState {
        &self.scroll
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    pub fn page(&self) -> &P {
        &self.page
    }

    pub fn page_mut(&mut self) -> &mut P {
        &mut self.page
    }

    pub fn ui(&self) -> &InjectedUi {
        &self.ui
    }

    pub fn is_tracked(&self, element: ElementId) -> bool {
        self.tracked.contains_key(&element)
    }

    pub fn tracked(&self, element: ElementId) -> Option<&TrackedElement> {
        self.tracked.get(&element)
    }

    pub fn tracked_len(&self) -> usize {
        self.tracked.len()
    }

    pub fn is_revealed(&self, element: ElementId) -> bool {
        self.tracked
            .get(&element)
            .is_some_and(|entry| entry.state.is_revealed())
    }

    pub fn is_parallax(&self, element: ElementId) -> bool {
        self.parallax.contains(element)
    }

    pub fn parallax_len(&self) -> usize {
        self.parallax.len()
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }
}

impl<P: Page> Drop for Tracker<P> {
    fn drop(&mut self) {
        self.teardown();
    }
}
