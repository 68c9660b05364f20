//! Page events delivered by the host

use unveil_core::{ElementId, Point};

/// Raw events forwarded from the host page
///
/// Scroll and resize carry no payload: the page is queried for current
/// metrics when the coalesced work actually runs, so only the latest state
/// matters.
#[derive(Clone, Debug, PartialEq)]
pub enum PageEvent {
    /// The document scrolled
    Scroll,
    /// The viewport changed size
    Resize,
    /// Element was clicked or otherwise activated
    Activate {
        target: ElementId,
        /// Pointer position in viewport coordinates
        pointer: Point,
    },
    /// Element gained focus
    Focus(ElementId),
    /// Element lost focus
    Blur(ElementId),
    /// A form control's value changed
    Input(ElementId),
    /// Pointer entered the element
    PointerEnter(ElementId),
    /// Pointer left the element
    PointerLeave(ElementId),
}

impl PageEvent {
    /// Element the event targets, if any
    pub fn target(&self) -> Option<ElementId> {
        match self {
            PageEvent::Scroll | PageEvent::Resize => None,
            PageEvent::Activate { target, .. } => Some(*target),
            PageEvent::Focus(id)
            | PageEvent::Blur(id)
            | PageEvent::Input(id)
            | PageEvent::PointerEnter(id)
            | PageEvent::PointerLeave(id) => Some(*id),
        }
    }
}

/// How a programmatic scroll should move
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScrollBehavior {
    /// Jump straight to the target offset
    #[default]
    Instant,
    /// Let the host animate toward the target
    Smooth,
}
