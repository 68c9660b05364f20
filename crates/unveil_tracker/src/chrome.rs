//! Injected page chrome: progress indicator and scroll-to-top control

use unveil_core::{classes, ElementId};
use unveil_platform::{Page, ScrollBehavior, Style};

use crate::scroll::ScrollState;

/// Elements the tracker adds to the page and removes at teardown
#[derive(Debug, Default)]
pub struct InjectedUi {
    progress_bar: Option<ElementId>,
    scroll_to_top: Option<ElementId>,
}

impl InjectedUi {
    /// Create whichever controls are enabled
    ///
    /// A page that refuses to create an element just goes without it.
    pub fn install<P: Page + ?Sized>(page: &mut P, progress_bar: bool, scroll_to_top: bool) -> Self {
        let progress_bar = if progress_bar {
            page.create_element(None, classes::PROGRESS_BAR)
        } else {
            None
        };
        if let Some(bar) = progress_bar {
            page.set_style(bar, Style::WidthPercent(0.0));
        }

        let scroll_to_top = if scroll_to_top {
            page.create_element(None, classes::SCROLL_TO_TOP)
        } else {
            None
        };

        tracing::debug!(?progress_bar, ?scroll_to_top, "Installed page chrome");
        Self {
            progress_bar,
            scroll_to_top,
        }
    }

    pub fn progress_bar(&self) -> Option<ElementId> {
        self.progress_bar
    }

    pub fn scroll_to_top(&self) -> Option<ElementId> {
        self.scroll_to_top
    }

    pub fn is_scroll_to_top(&self, element: ElementId) -> bool {
        self.scroll_to_top == Some(element)
    }

    /// Push the latest scroll state into the controls
    pub fn update<P: Page + ?Sized>(&self, page: &mut P, state: &ScrollState, to_top_changed: bool) {
        if let Some(bar) = self.progress_bar {
            page.set_style(bar, Style::WidthPercent(state.progress_percent));
        }
        if let (Some(button), true) = (self.scroll_to_top, to_top_changed) {
            page.set_class(button, classes::VISIBLE, state.to_top_visible);
        }
    }

    /// Smooth-scroll the document back to its origin
    pub fn activate_scroll_to_top<P: Page + ?Sized>(&self, page: &mut P) {
        page.scroll_to(0.0, ScrollBehavior::Smooth);
    }

    /// Remove every injected element
    pub fn remove<P: Page + ?Sized>(&mut self, page: &mut P) {
        for element in [self.progress_bar.take(), self.scroll_to_top.take()]
            .into_iter()
            .flatten()
        {
            page.remove_element(element);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use unveil_core::Size;
    use unveil_platform::MockPage;

    #[test]
    fn test_install_and_remove() {
        let mut page = MockPage::new(Size::new(800.0, 600.0), 3000.0);
        let mut ui = InjectedUi::install(&mut page, true, true);

        let bar = ui.progress_bar().unwrap();
        let button = ui.scroll_to_top().unwrap();
        assert!(page.has_class(bar, classes::PROGRESS_BAR));
        assert_eq!(page.width_percent(bar), Some(0.0));
        assert!(ui.is_scroll_to_top(button));

        ui.remove(&mut page);
        assert!(page.is_empty());
        assert!(ui.progress_bar().is_none());

        // Second removal is a no-op
        ui.remove(&mut page);
    }

    #[test]
    fn test_disabled_controls_are_not_created() {
        let mut page = MockPage::new(Size::new(800.0, 600.0), 3000.0);
        let ui = InjectedUi::install(&mut page, false, false);
        assert!(ui.progress_bar().is_none());
        assert!(ui.scroll_to_top().is_none());
        assert!(page.is_empty());
    }

    #[test]
    fn test_update_toggles_visibility_on_change_only() {
        let mut page = MockPage::new(Size::new(800.0, 600.0), 3000.0);
        let ui = InjectedUi::install(&mut page, true, true);
        let button = ui.scroll_to_top().unwrap();

        let mut state = ScrollState::default();
        let change = state.advance(500.0, 3000.0, 600.0);
        ui.update(&mut page, &state, change.to_top_changed);

        assert!(page.has_class(button, classes::VISIBLE));
        assert_eq!(page.width_percent(ui.progress_bar().unwrap()), Some(500.0 / 2400.0 * 100.0));

        ui.activate_scroll_to_top(&mut page);
        assert_eq!(page.scroll_requests(), vec![(0.0, ScrollBehavior::Smooth)]);
    }
}
