//! Element handles, animation kinds, and reveal notifications

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use slotmap::new_key_type;

new_key_type! {
    /// Opaque handle to a page element
    ///
    /// Issued by the page; the element itself stays owned by the page. A
    /// handle whose element has been removed resolves to nothing.
    pub struct ElementId;
}

/// Visual treatment applied when an element is revealed
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum AnimationKind {
    #[default]
    FadeIn,
    FadeUp,
    FadeDown,
    FadeLeft,
    FadeRight,
    ZoomIn,
    /// Children revealed one after another
    Stagger,
    /// Page-defined tag, passed through untouched
    Custom(String),
}

impl AnimationKind {
    /// Built-in kinds, in the order discovery checks their class names
    pub const BUILTIN: [AnimationKind; 7] = [
        AnimationKind::FadeIn,
        AnimationKind::FadeUp,
        AnimationKind::FadeDown,
        AnimationKind::FadeLeft,
        AnimationKind::FadeRight,
        AnimationKind::ZoomIn,
        AnimationKind::Stagger,
    ];

    /// Tag used both as attribute value and marker class name
    pub fn as_str(&self) -> &str {
        match self {
            AnimationKind::FadeIn => "fade-in",
            AnimationKind::FadeUp => "fade-up",
            AnimationKind::FadeDown => "fade-down",
            AnimationKind::FadeLeft => "fade-left",
            AnimationKind::FadeRight => "fade-right",
            AnimationKind::ZoomIn => "zoom-in",
            AnimationKind::Stagger => "stagger-children",
            AnimationKind::Custom(tag) => tag,
        }
    }

    /// Class added to the element once it is revealed
    pub fn active_class(&self) -> String {
        format!("{}-active", self.as_str())
    }

    /// Match a marker class name against the built-in kinds
    pub fn from_class(class: &str) -> Option<AnimationKind> {
        Self::BUILTIN.into_iter().find(|kind| kind.as_str() == class)
    }
}

impl FromStr for AnimationKind {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim();
        Ok(Self::from_class(tag).unwrap_or_else(|| match tag {
            "" => AnimationKind::FadeIn,
            "stagger" => AnimationKind::Stagger,
            other => AnimationKind::Custom(other.to_string()),
        }))
    }
}

impl fmt::Display for AnimationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Vertical scroll direction
///
/// There is no "unchanged" state: an unchanged offset reports `Up`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScrollDirection {
    #[default]
    Up,
    Down,
}

impl ScrollDirection {
    /// Direction of travel from `previous` to `current`
    pub fn between(previous: f32, current: f32) -> Self {
        if current > previous {
            ScrollDirection::Down
        } else {
            ScrollDirection::Up
        }
    }
}

/// Emitted once per Unrevealed -> Revealed transition
#[derive(Clone, Debug, PartialEq)]
pub struct RevealEvent {
    pub element: ElementId,
    pub kind: AnimationKind,
    /// Presentation delay from the element's stagger position
    pub delay: Duration,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_parsing() {
        assert_eq!("fade-up".parse::<AnimationKind>(), Ok(AnimationKind::FadeUp));
        assert_eq!("".parse::<AnimationKind>(), Ok(AnimationKind::FadeIn));
        assert_eq!("stagger".parse::<AnimationKind>(), Ok(AnimationKind::Stagger));
        assert_eq!(
            "flip-x".parse::<AnimationKind>(),
            Ok(AnimationKind::Custom("flip-x".into()))
        );
    }

    #[test]
    fn test_kind_classes() {
        assert_eq!(AnimationKind::ZoomIn.active_class(), "zoom-in-active");
        assert_eq!(AnimationKind::from_class("fade-left"), Some(AnimationKind::FadeLeft));
        assert_eq!(AnimationKind::from_class("card"), None);
    }

    #[test]
    fn test_direction_tie_is_up() {
        assert_eq!(ScrollDirection::between(100.0, 200.0), ScrollDirection::Down);
        assert_eq!(ScrollDirection::between(200.0, 150.0), ScrollDirection::Up);
        assert_eq!(ScrollDirection::between(150.0, 150.0), ScrollDirection::Up);
    }
}
