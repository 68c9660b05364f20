//! Declarative element discovery
//!
//! Scans a page for the marking convention and produces registrations. The
//! tracker itself never queries selectors; [`Tracker::refresh`] feeds these
//! registrations through the same `register` calls a page script would make.
//!
//! | marker | result |
//! |---|---|
//! | `data-animate="<kind>"` | reveal with that kind |
//! | class `fade-in`, `fade-up`, ... `zoom-in` | reveal with the matching kind |
//! | class `stagger-children` | each child revealed with its sibling index |
//! | `data-stagger="<n>"` | explicit stagger index |
//! | `data-parallax[="<speed>"]` or class `parallax` | parallax layer |
//!
//! [`Tracker::refresh`]: crate::Tracker::refresh

use indexmap::IndexMap;
use unveil_core::{classes, AnimationKind, ElementId};
use unveil_platform::Page;

/// An element to track for reveal
#[derive(Clone, Debug, PartialEq)]
pub struct Registration {
    pub element: ElementId,
    pub kind: AnimationKind,
    pub stagger_index: Option<usize>,
}

/// An element to offset with scrolling
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParallaxRegistration {
    pub element: ElementId,
    pub speed: Option<f32>,
}

/// Everything found in one scan, in document order
#[derive(Clone, Debug, Default)]
pub struct Discovered {
    pub reveals: Vec<Registration>,
    pub parallax: Vec<ParallaxRegistration>,
}

/// Scan `page` for marked elements
///
/// An element matched by several markers is registered once; the explicit
/// `data-animate` attribute wins over class names.
pub fn discover<P: Page + ?Sized>(page: &P) -> Discovered {
    let mut reveals: IndexMap<ElementId, Registration> = IndexMap::new();

    for element in page.query_attribute(classes::ATTR_ANIMATE) {
        let kind = page
            .attribute(element, classes::ATTR_ANIMATE)
            .and_then(|tag| tag.parse().ok())
            .unwrap_or_default();
        reveals.entry(element).or_insert(Registration {
            element,
            kind,
            stagger_index: None,
        });
    }

    for kind in AnimationKind::BUILTIN {
        if kind == AnimationKind::Stagger {
            continue;
        }
        for element in page.query_class(kind.as_str()) {
            reveals.entry(element).or_insert_with(|| Registration {
                element,
                kind: kind.clone(),
                stagger_index: None,
            });
        }
    }

    for container in page.query_class(AnimationKind::Stagger.as_str()) {
        for (index, child) in page.children(container).into_iter().enumerate() {
            let entry = reveals.entry(child).or_insert(Registration {
                element: child,
                kind: AnimationKind::Stagger,
                stagger_index: None,
            });
            entry.stagger_index.get_or_insert(index);
        }
    }

    for element in page.query_attribute(classes::ATTR_STAGGER) {
        let index = page
            .attribute(element, classes::ATTR_STAGGER)
            .and_then(|raw| raw.trim().parse::<usize>().ok());
        match (reveals.get_mut(&element), index) {
            (Some(entry), Some(index)) => entry.stagger_index = Some(index),
            (None, _) => {
                tracing::trace!(?element, "data-stagger on an element with no reveal marker")
            }
            (Some(_), None) => tracing::warn!(?element, "ignoring unparsable data-stagger"),
        }
    }

    let mut parallax: IndexMap<ElementId, ParallaxRegistration> = IndexMap::new();
    let marked = page
        .query_attribute(classes::ATTR_PARALLAX)
        .into_iter()
        .chain(page.query_class(classes::PARALLAX));
    for element in marked {
        let speed = page
            .attribute(element, classes::ATTR_PARALLAX)
            .and_then(|raw| raw.trim().parse::<f32>().ok())
            .filter(|speed| speed.is_finite());
        parallax
            .entry(element)
            .or_insert(ParallaxRegistration { element, speed });
    }

    Discovered {
        reveals: reveals.into_values().collect(),
        parallax: parallax.into_values().collect(),
    }
}
