//! Trailing-edge debouncer
//!
//! Fires once after a quiet period with no further triggers. Used for resize
//! handling, which is rarer and less latency-sensitive than scrolling.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct Debouncer {
    quiet: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            deadline: None,
        }
    }

    /// Record a trigger, pushing the deadline out by the quiet period
    pub fn trigger(&mut self, now: Instant) {
        self.deadline = Some(now + self.quiet);
    }

    /// Returns `true` exactly once when the quiet period has elapsed
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn quiet_period(&self) -> Duration {
        self.quiet
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const QUIET: Duration = Duration::from_millis(250);

    #[test]
    fn test_fires_after_quiet_period() {
        let start = Instant::now();
        let mut debounce = Debouncer::new(QUIET);

        debounce.trigger(start);
        assert!(!debounce.poll(start + Duration::from_millis(100)));
        assert!(debounce.poll(start + QUIET));
        // Only once
        assert!(!debounce.poll(start + QUIET * 2));
    }

    #[test]
    fn test_retrigger_extends_deadline() {
        let start = Instant::now();
        let mut debounce = Debouncer::new(QUIET);

        debounce.trigger(start);
        debounce.trigger(start + Duration::from_millis(200));

        assert!(!debounce.poll(start + Duration::from_millis(300)));
        assert!(debounce.poll(start + Duration::from_millis(450)));
    }

    #[test]
    fn test_cancel() {
        let start = Instant::now();
        let mut debounce = Debouncer::new(QUIET);
        debounce.trigger(start);
        debounce.cancel();
        assert!(!debounce.is_pending());
        assert!(!debounce.poll(start + QUIET));
    }
}
