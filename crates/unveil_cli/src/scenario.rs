//! Scripted scroll sessions for `unveil simulate`
//!
//! A scenario describes a page (viewport, document height, marked elements)
//! and the scroll offsets to visit:
//!
//! ```toml
//! viewport = [1280.0, 800.0]
//! document_height = 4000.0
//! offsets = [0.0, 600.0, 1200.0, 300.0]
//!
//! [[elements]]
//! name = "hero"
//! y = 900.0
//! height = 300.0
//! animate = "fade-up"
//! ```

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use unveil_core::{classes, ElementId, Rect, Size};
use unveil_platform::{MockElement, MockPage};

/// A page plus a scroll script
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Scenario {
    #[serde(default = "default_viewport")]
    pub viewport: [f32; 2],
    #[serde(default = "default_document_height")]
    pub document_height: f32,
    #[serde(default)]
    pub reduced_motion: bool,
    #[serde(default)]
    pub elements: Vec<ElementSpec>,
    #[serde(default)]
    pub offsets: Vec<f32>,
}

fn default_viewport() -> [f32; 2] {
    [1280.0, 800.0]
}

fn default_document_height() -> f32 {
    4000.0
}

/// One marked element on the simulated page
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ElementSpec {
    pub name: String,
    pub y: f32,
    #[serde(default = "default_height")]
    pub height: f32,
    /// Value for `data-animate`
    #[serde(default)]
    pub animate: Option<String>,
    #[serde(default)]
    pub stagger: Option<usize>,
    /// Value for `data-parallax`
    #[serde(default)]
    pub parallax: Option<f32>,
    #[serde(default)]
    pub classes: Vec<String>,
}

fn default_height() -> f32 {
    200.0
}

impl Scenario {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read scenario {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse scenario {}", path.display()))
    }

    /// Built-in demo: a hero, a staggered feature row, a parallax band
    pub fn demo() -> Self {
        let mut elements = vec![ElementSpec {
            name: "hero".into(),
            y: 200.0,
            height: 400.0,
            animate: Some("fade-in".into()),
            stagger: None,
            parallax: None,
            classes: Vec::new(),
        }];
        elements.extend((0..3).map(|i| ElementSpec {
            name: format!("feature-{}", i + 1),
            y: 1100.0,
            height: 300.0,
            animate: Some("fade-up".into()),
            stagger: Some(i),
            parallax: None,
            classes: vec!["card".into()],
        }));
        elements.push(ElementSpec {
            name: "backdrop".into(),
            y: 1800.0,
            height: 600.0,
            animate: None,
            stagger: None,
            parallax: Some(0.5),
            classes: Vec::new(),
        });
        elements.push(ElementSpec {
            name: "footer".into(),
            y: 3600.0,
            height: 400.0,
            animate: Some("zoom-in".into()),
            stagger: None,
            parallax: None,
            classes: Vec::new(),
        });

        Self {
            viewport: default_viewport(),
            document_height: default_document_height(),
            reduced_motion: false,
            elements,
            offsets: vec![0.0, 400.0, 900.0, 1600.0, 2400.0, 3200.0, 1200.0, 0.0],
        }
    }

    /// Build the mock page, returning element ids alongside their names
    pub fn build_page(&self) -> (MockPage, Vec<(String, ElementId)>) {
        let [width, height] = self.viewport;
        let page = MockPage::new(Size::new(width, height), self.document_height);
        page.set_reduced_motion(self.reduced_motion);

        let names = self
            .elements
            .iter()
            .map(|spec| {
                let mut element = MockElement::new(Rect::new(0.0, spec.y, width, spec.height));
                if let Some(animate) = &spec.animate {
                    element = element.attr(classes::ATTR_ANIMATE, animate.as_str());
                }
                if let Some(stagger) = spec.stagger {
                    element = element.attr(classes::ATTR_STAGGER, stagger.to_string());
                }
                if let Some(speed) = spec.parallax {
                    element = element.attr(classes::ATTR_PARALLAX, speed.to_string());
                }
                for class in &spec.classes {
                    element = element.class(class.as_str());
                }
                (spec.name.clone(), page.insert(element))
            })
            .collect();

        (page, names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use unveil_platform::Page;

    #[test]
    fn test_demo_builds() {
        let scenario = Scenario::demo();
        let (page, names) = scenario.build_page();
        assert_eq!(names.len(), scenario.elements.len());

        let (_, backdrop) = names.iter().find(|(name, _)| name == "backdrop").unwrap();
        assert_eq!(page.attribute(*backdrop, "data-parallax").as_deref(), Some("0.5"));
    }

    #[test]
    fn test_parse_minimal() {
        let scenario: Scenario = toml::from_str(
            r#"
            offsets = [0.0, 100.0]

            [[elements]]
            name = "a"
            y = 50.0
            "#,
        )
        .unwrap();

        assert_eq!(scenario.viewport, [1280.0, 800.0]);
        assert_eq!(scenario.elements[0].height, 200.0);
        assert!(scenario.elements[0].animate.is_none());
    }
}
