//! Stagger delay computation

use std::time::Duration;

/// Linear per-index delay with an upper bound
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stagger {
    pub step: Duration,
    pub max: Duration,
}

impl Default for Stagger {
    fn default() -> Self {
        Self {
            step: Duration::from_millis(100),
            max: Duration::from_secs(1),
        }
    }
}

impl Stagger {
    pub fn new(step: Duration, max: Duration) -> Self {
        Self { step, max }
    }

    /// Delay for the element at `index` (0-based)
    pub fn delay(&self, index: usize) -> Duration {
        let index = u32::try_from(index).unwrap_or(u32::MAX);
        self.step.saturating_mul(index).min(self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delay_grows_then_caps() {
        let stagger = Stagger::default();
        assert_eq!(stagger.delay(0), Duration::ZERO);
        assert_eq!(stagger.delay(3), Duration::from_millis(300));
        assert_eq!(stagger.delay(50), Duration::from_secs(1));
        assert_eq!(stagger.delay(usize::MAX), Duration::from_secs(1));
    }
}
