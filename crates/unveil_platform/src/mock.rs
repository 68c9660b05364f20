//! In-memory page for tests and simulation
//!
//! `MockPage` is a cheap-to-clone handle to shared page state: hand one clone
//! to the tracker and keep another to drive scrolling and inspect the
//! resulting classes and styles.
//!
//! ```rust
//! use unveil_core::{Rect, Size};
//! use unveil_platform::{MockElement, MockPage, Page};
//!
//! let page = MockPage::new(Size::new(800.0, 600.0), 2400.0);
//! let hero = page.insert(MockElement::new(Rect::new(0.0, 900.0, 800.0, 300.0)).class("fade-up"));
//!
//! page.set_scroll_offset(600.0);
//! assert_eq!(page.bounds(hero), Some(Rect::new(0.0, 300.0, 800.0, 300.0)));
//! ```

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use rustc_hash::FxHashMap;
use slotmap::SlotMap;
use smallvec::SmallVec;
use unveil_core::{ElementId, Rect, Size};

use crate::event::ScrollBehavior;
use crate::page::{Page, Style};

/// Description of an element to insert into a [`MockPage`]
#[derive(Clone, Debug, Default)]
pub struct MockElement {
    /// Layout box in document coordinates
    pub layout: Rect,
    pub classes: SmallVec<[String; 4]>,
    pub attributes: FxHashMap<String, String>,
    pub value: String,
}

impl MockElement {
    pub fn new(layout: Rect) -> Self {
        Self {
            layout,
            ..Default::default()
        }
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }
}

/// Element state held by the page
#[derive(Clone, Debug, Default)]
struct Node {
    spec: MockElement,
    parent: Option<ElementId>,
    children: Vec<ElementId>,
    translate_y: Option<f32>,
    width_percent: Option<f32>,
    transition_delay: Option<Duration>,
    frame: Option<Rect>,
}

struct PageState {
    nodes: SlotMap<ElementId, Node>,
    /// Insertion order, standing in for document order
    order: Vec<ElementId>,
    viewport: Size,
    document_height: f32,
    scroll_offset: f32,
    reduced_motion: bool,
    scroll_requests: Vec<(f32, ScrollBehavior)>,
    mutations: usize,
}

impl PageState {
    fn max_offset(&self) -> f32 {
        (self.document_height - self.viewport.height).max(0.0)
    }

    fn node_mut(&mut self, element: ElementId) -> Option<&mut Node> {
        let node = self.nodes.get_mut(element)?;
        self.mutations += 1;
        Some(node)
    }
}

/// Shared in-memory page
#[derive(Clone)]
pub struct MockPage {
    inner: Rc<RefCell<PageState>>,
}

impl MockPage {
    pub fn new(viewport: Size, document_height: f32) -> Self {
        Self {
            inner: Rc::new(RefCell::new(PageState {
                nodes: SlotMap::with_key(),
                order: Vec::new(),
                viewport,
                document_height,
                scroll_offset: 0.0,
                reduced_motion: false,
                scroll_requests: Vec::new(),
                mutations: 0,
            })),
        }
    }

    /// Insert a top-level element
    pub fn insert(&self, element: MockElement) -> ElementId {
        self.insert_node(None, element)
    }

    /// Insert an element as the last child of `parent`
    pub fn insert_child(&self, parent: ElementId, element: MockElement) -> ElementId {
        self.insert_node(Some(parent), element)
    }

    fn insert_node(&self, parent: Option<ElementId>, spec: MockElement) -> ElementId {
        let mut state = self.inner.borrow_mut();
        let id = state.nodes.insert(Node {
            spec,
            parent,
            ..Default::default()
        });
        if let Some(parent_node) = parent.and_then(|p| state.nodes.get_mut(p)) {
            parent_node.children.push(id);
        }
        state.order.push(id);
        id
    }

    /// Set the scroll offset as a user scroll would, clamped to the document
    pub fn set_scroll_offset(&self, offset: f32) {
        let mut state = self.inner.borrow_mut();
        state.scroll_offset = offset.clamp(0.0, state.max_offset());
    }

    pub fn set_viewport(&self, viewport: Size) {
        let mut state = self.inner.borrow_mut();
        state.viewport = viewport;
        state.scroll_offset = state.scroll_offset.min(state.max_offset());
    }

    pub fn set_document_height(&self, height: f32) {
        self.inner.borrow_mut().document_height = height;
    }

    pub fn set_reduced_motion(&self, reduced: bool) {
        self.inner.borrow_mut().reduced_motion = reduced;
    }

    pub fn set_value(&self, element: ElementId, value: impl Into<String>) {
        if let Some(node) = self.inner.borrow_mut().nodes.get_mut(element) {
            node.spec.value = value.into();
        }
    }

    // Inspection

    pub fn contains(&self, element: ElementId) -> bool {
        self.inner.borrow().nodes.contains_key(element)
    }

    pub fn len(&self) -> usize {
        self.inner.borrow().nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.borrow().nodes.is_empty()
    }

    pub fn classes(&self, element: ElementId) -> Vec<String> {
        self.inner
            .borrow()
            .nodes
            .get(element)
            .map(|node| node.spec.classes.to_vec())
            .unwrap_or_default()
    }

    pub fn translate_y(&self, element: ElementId) -> Option<f32> {
        self.inner.borrow().nodes.get(element)?.translate_y
    }

    pub fn width_percent(&self, element: ElementId) -> Option<f32> {
        self.inner.borrow().nodes.get(element)?.width_percent
    }

    pub fn transition_delay(&self, element: ElementId) -> Option<Duration> {
        self.inner.borrow().nodes.get(element)?.transition_delay
    }

    pub fn frame(&self, element: ElementId) -> Option<Rect> {
        self.inner.borrow().nodes.get(element)?.frame
    }

    pub fn parent(&self, element: ElementId) -> Option<ElementId> {
        self.inner.borrow().nodes.get(element)?.parent
    }

    /// Every programmatic scroll requested so far
    pub fn scroll_requests(&self) -> Vec<(f32, ScrollBehavior)> {
        self.inner.borrow().scroll_requests.clone()
    }

    /// Count of class, style, and tree writes performed by page clients
    pub fn mutation_count(&self) -> usize {
        self.inner.borrow().mutations
    }
}

impl Page for MockPage {
    fn scroll_offset(&self) -> f32 {
        self.inner.borrow().scroll_offset
    }

    fn document_height(&self) -> f32 {
        self.inner.borrow().document_height
    }

    fn viewport_size(&self) -> Size {
        self.inner.borrow().viewport
    }

    fn prefers_reduced_motion(&self) -> bool {
        self.inner.borrow().reduced_motion
    }

    fn bounds(&self, element: ElementId) -> Option<Rect> {
        let state = self.inner.borrow();
        let node = state.nodes.get(element)?;
        Some(node.spec.layout.offset(0.0, -state.scroll_offset))
    }

    fn query_class(&self, class: &str) -> Vec<ElementId> {
        let state = self.inner.borrow();
        state
            .order
            .iter()
            .copied()
            .filter(|id| state.nodes[*id].spec.classes.iter().any(|c| c == class))
            .collect()
    }

    fn query_attribute(&self, name: &str) -> Vec<ElementId> {
        let state = self.inner.borrow();
        state
            .order
            .iter()
            .copied()
            .filter(|id| state.nodes[*id].spec.attributes.contains_key(name))
            .collect()
    }

    fn attribute(&self, element: ElementId, name: &str) -> Option<String> {
        self.inner
            .borrow()
            .nodes
            .get(element)?
            .spec
            .attributes
            .get(name)
            .cloned()
    }

    fn has_class(&self, element: ElementId, class: &str) -> bool {
        self.inner
            .borrow()
            .nodes
            .get(element)
            .is_some_and(|node| node.spec.classes.iter().any(|c| c == class))
    }

    fn children(&self, element: ElementId) -> Vec<ElementId> {
        self.inner
            .borrow()
            .nodes
            .get(element)
            .map(|node| node.children.clone())
            .unwrap_or_default()
    }

    fn value(&self, element: ElementId) -> Option<String> {
        Some(self.inner.borrow().nodes.get(element)?.spec.value.clone())
    }

    fn add_class(&mut self, element: ElementId, class: &str) {
        let mut state = self.inner.borrow_mut();
        if let Some(node) = state.node_mut(element) {
            if !node.spec.classes.iter().any(|c| c == class) {
                node.spec.classes.push(class.to_string());
            }
        }
    }

    fn remove_class(&mut self, element: ElementId, class: &str) {
        let mut state = self.inner.borrow_mut();
        if let Some(node) = state.node_mut(element) {
            node.spec.classes.retain(|c| c != class);
        }
    }

    fn set_style(&mut self, element: ElementId, style: Style) {
        let mut state = self.inner.borrow_mut();
        let Some(node) = state.node_mut(element) else {
            return;
        };
        match style {
            Style::TranslateY(y) => node.translate_y = Some(y),
            Style::WidthPercent(pct) => node.width_percent = Some(pct),
            Style::TransitionDelay(delay) => node.transition_delay = Some(delay),
            Style::Frame(rect) => node.frame = Some(rect),
        }
    }

    fn create_element(&mut self, parent: Option<ElementId>, class: &str) -> Option<ElementId> {
        if let Some(parent) = parent {
            if !self.contains(parent) {
                return None;
            }
        }
        let layout = parent
            .and_then(|p| self.inner.borrow().nodes.get(p).map(|n| n.spec.layout))
            .unwrap_or_default();
        let id = self.insert_node(parent, MockElement::new(layout).class(class));
        self.inner.borrow_mut().mutations += 1;
        Some(id)
    }

    fn remove_element(&mut self, element: ElementId) {
        let children = {
            let mut state = self.inner.borrow_mut();
            let Some(node) = state.nodes.remove(element) else {
                return;
            };
            state.mutations += 1;
            state.order.retain(|id| *id != element);
            if let Some(parent) = node.parent.and_then(|p| state.nodes.get_mut(p)) {
                parent.children.retain(|id| *id != element);
            }
            node.children
        };

        // Descendants go with it
        for child in children {
            self.remove_element(child);
        }
    }

    fn scroll_to(&mut self, offset: f32, behavior: ScrollBehavior) {
        tracing::trace!(offset, ?behavior, "MockPage: scroll requested");
        let mut state = self.inner.borrow_mut();
        state.scroll_requests.push((offset, behavior));
        state.scroll_offset = offset.clamp(0.0, state.max_offset());
    }
}
