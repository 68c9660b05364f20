//! Page trait

use std::time::Duration;

use unveil_core::{ElementId, Rect, Size};

use crate::event::ScrollBehavior;

/// Presentation property written onto an element
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Style {
    /// Vertical translation in pixels
    TranslateY(f32),
    /// Width as a percentage of the containing block (0-100)
    WidthPercent(f32),
    /// Delay before the element's transition starts
    TransitionDelay(Duration),
    /// Absolute placement within the parent element
    Frame(Rect),
}

/// Host page abstraction
///
/// Implemented by each host binding (a browser bridge, a native web view, or
/// [`MockPage`](crate::MockPage) in tests). Every method is total: unknown or
/// stale element ids read as empty and writes to them are ignored.
pub trait Page {
    // Metrics

    /// Absolute vertical scroll offset of the document in pixels
    fn scroll_offset(&self) -> f32;

    /// Full scrollable height of the document
    fn document_height(&self) -> f32;

    /// Size of the visible viewport
    fn viewport_size(&self) -> Size;

    /// Whether the user asked the platform to minimize motion
    fn prefers_reduced_motion(&self) -> bool;

    // Queries

    /// Bounding box of an element in viewport coordinates
    fn bounds(&self, element: ElementId) -> Option<Rect>;

    /// Elements carrying the given class, in document order
    fn query_class(&self, class: &str) -> Vec<ElementId>;

    /// Elements carrying the given attribute, in document order
    fn query_attribute(&self, name: &str) -> Vec<ElementId>;

    fn attribute(&self, element: ElementId, name: &str) -> Option<String>;

    fn has_class(&self, element: ElementId, class: &str) -> bool;

    /// Direct children, in document order
    fn children(&self, element: ElementId) -> Vec<ElementId>;

    /// Current value of a form control
    fn value(&self, element: ElementId) -> Option<String>;

    // Mutation

    fn add_class(&mut self, element: ElementId, class: &str);

    fn remove_class(&mut self, element: ElementId, class: &str);

    fn set_style(&mut self, element: ElementId, style: Style);

    /// Create an element with a class, appended to `parent` or to the body
    fn create_element(&mut self, parent: Option<ElementId>, class: &str) -> Option<ElementId>;

    /// Detach and drop an element created by [`Page::create_element`]
    fn remove_element(&mut self, element: ElementId);

    /// Request a programmatic scroll to an absolute offset
    fn scroll_to(&mut self, offset: f32, behavior: ScrollBehavior);

    // Provided

    fn set_class(&mut self, element: ElementId, class: &str, enabled: bool) {
        if enabled {
            self.add_class(element, class);
        } else {
            self.remove_class(element, class);
        }
    }
}
