//! Parallax layers

use indexmap::IndexMap;
use unveil_core::ElementId;
use unveil_platform::{Page, Style};

/// Vertical translation for a layer at the given scroll offset
pub fn translation(offset: f32, speed: f32) -> f32 {
    -(offset * speed)
}

/// An element offset against scrolling
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParallaxElement {
    pub element: ElementId,
    /// Own speed factor; `None` follows the configured default
    pub speed: Option<f32>,
}

impl ParallaxElement {
    pub fn speed_or(&self, default_speed: f32) -> f32 {
        self.speed.unwrap_or(default_speed)
    }
}

/// Registered parallax layers in registration order
#[derive(Debug, Default)]
pub struct ParallaxLayers {
    layers: IndexMap<ElementId, ParallaxElement>,
}

impl ParallaxLayers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` when the element was already registered
    pub fn insert(&mut self, element: ElementId, speed: Option<f32>) -> bool {
        if self.layers.contains_key(&element) {
            return false;
        }
        let speed = speed.filter(|s| s.is_finite());
        self.layers.insert(element, ParallaxElement { element, speed });
        true
    }

    pub fn remove(&mut self, element: ElementId) -> bool {
        self.layers.shift_remove(&element).is_some()
    }

    pub fn contains(&self, element: ElementId) -> bool {
        self.layers.contains_key(&element)
    }

    pub fn get(&self, element: ElementId) -> Option<&ParallaxElement> {
        self.layers.get(&element)
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    pub fn clear(&mut self) {
        self.layers.clear();
    }

    /// Write every layer's translation for `offset`
    pub fn apply<P: Page + ?Sized>(&self, page: &mut P, offset: f32, default_speed: f32) {
        for layer in self.layers.values() {
            let y = translation(offset, layer.speed_or(default_speed));
            page.set_style(layer.element, Style::TranslateY(y));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use unveil_core::{Rect, Size};
    use unveil_platform::{MockElement, MockPage};

    #[test]
    fn test_translation() {
        assert_eq!(translation(100.0, 0.25), -25.0);
        assert!((translation(100.0, 0.3) + 30.0).abs() < 1e-4);
        assert_eq!(translation(0.0, 0.5), 0.0);
        assert_eq!(translation(200.0, -0.5), 100.0);
    }

    #[test]
    fn test_apply_uses_own_or_default_speed() {
        let mut page = MockPage::new(Size::new(800.0, 600.0), 3000.0);
        let slow = page.insert(MockElement::new(Rect::new(0.0, 0.0, 800.0, 400.0)));
        let fast = page.insert(MockElement::new(Rect::new(0.0, 400.0, 800.0, 400.0)));

        let mut layers = ParallaxLayers::new();
        assert!(layers.insert(slow, None));
        assert!(layers.insert(fast, Some(0.8)));
        assert!(!layers.insert(fast, Some(0.1)));

        layers.apply(&mut page, 500.0, 0.3);
        assert_eq!(page.translate_y(slow), Some(-150.0));
        assert_eq!(page.translate_y(fast), Some(-400.0));
    }

    #[test]
    fn test_non_finite_speed_falls_back() {
        let mut layers = ParallaxLayers::new();
        let page = MockPage::new(Size::new(800.0, 600.0), 3000.0);
        let el = page.insert(MockElement::default());

        layers.insert(el, Some(f32::INFINITY));
        assert_eq!(layers.get(el).unwrap().speed_or(0.3), 0.3);
    }
}
