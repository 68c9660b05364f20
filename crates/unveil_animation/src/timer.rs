//! Deadline queue for delayed cleanup work

use std::time::Instant;

use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Handle to a scheduled timer
    pub struct TimerId;
}

struct Timer<T> {
    deadline: Instant,
    payload: T,
}

/// Timers polled from the frame loop rather than a background thread
pub struct TimerQueue<T> {
    timers: SlotMap<TimerId, Timer<T>>,
}

impl<T> TimerQueue<T> {
    pub fn new() -> Self {
        Self {
            timers: SlotMap::with_key(),
        }
    }

    pub fn schedule(&mut self, deadline: Instant, payload: T) -> TimerId {
        self.timers.insert(Timer { deadline, payload })
    }

    pub fn cancel(&mut self, id: TimerId) -> Option<T> {
        self.timers.remove(id).map(|timer| timer.payload)
    }

    /// Remove and return every payload whose deadline has passed, earliest first
    pub fn drain_due(&mut self, now: Instant) -> Vec<T> {
        let mut due: Vec<(Instant, TimerId)> = self
            .timers
            .iter()
            .filter(|(_, timer)| timer.deadline <= now)
            .map(|(id, timer)| (timer.deadline, id))
            .collect();
        due.sort_by_key(|(deadline, _)| *deadline);

        due.into_iter()
            .filter_map(|(_, id)| self.timers.remove(id))
            .map(|timer| timer.payload)
            .collect()
    }

    /// Earliest outstanding deadline
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.values().map(|timer| timer.deadline).min()
    }

    /// Remove everything, returning the payloads
    pub fn clear(&mut self) -> Vec<T> {
        self.timers.drain().map(|(_, timer)| timer.payload).collect()
    }

    pub fn len(&self) -> usize {
        self.timers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_drain_due_in_deadline_order() {
        let start = Instant::now();
        let mut timers = TimerQueue::new();
        timers.schedule(start + Duration::from_millis(300), "late");
        timers.schedule(start + Duration::from_millis(100), "early");
        timers.schedule(start + Duration::from_millis(900), "pending");

        assert_eq!(timers.drain_due(start + Duration::from_millis(500)), vec!["early", "late"]);
        assert_eq!(timers.len(), 1);
        assert_eq!(timers.next_deadline(), Some(start + Duration::from_millis(900)));
    }

    #[test]
    fn test_cancel_and_clear() {
        let start = Instant::now();
        let mut timers = TimerQueue::new();
        let id = timers.schedule(start, 1);
        timers.schedule(start, 2);

        assert_eq!(timers.cancel(id), Some(1));
        assert_eq!(timers.cancel(id), None);
        assert_eq!(timers.clear(), vec![2]);
        assert!(timers.is_empty());
    }
}
