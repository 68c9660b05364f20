//! Unveil Page Abstraction Layer
//!
//! Platform-agnostic view of the host page the tracker decorates.
//!
//! # Architecture
//!
//! - [`Page`] - metrics, element queries, and presentation writes
//! - [`PageEvent`] - raw events the host forwards (scroll, resize, pointer, focus)
//! - [`MockPage`] - in-memory page used by tests and the `unveil` simulator
//!
//! Host bindings implement [`Page`] over their element tree; nothing in the
//! tracker reaches past this trait.

mod event;
mod mock;
mod page;

pub use event::{PageEvent, ScrollBehavior};
pub use mock::{MockElement, MockPage};
pub use page::{Page, Style};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::event::{PageEvent, ScrollBehavior};
    pub use crate::page::{Page, Style};
    pub use unveil_core::{ElementId, Point, Rect, Size};
}
