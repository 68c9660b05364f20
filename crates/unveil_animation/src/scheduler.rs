//! Frame scheduler
//!
//! Coalesces any number of work requests into at most one run per display
//! frame. Raw scroll events can arrive far faster than the display refreshes;
//! each one only marks work as pending, and the host's frame callback drains
//! the flag once. Intermediate requests are discarded, not queued.
//!
//! The scheduler never talks to a clock or a display itself. The host calls
//! [`FrameScheduler::begin_frame`] from its animation-frame callback, and a
//! test harness calls it by hand to step frames deterministically.

/// Counters describing how much work was coalesced away
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Frames that ran pending work
    pub frames_run: u64,
    /// Requests folded into an already pending frame
    pub requests_coalesced: u64,
}

/// "At most once per frame" work gate
#[derive(Debug, Default)]
pub struct FrameScheduler {
    pending: bool,
    stats: FrameStats,
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark work as pending for the next frame
    ///
    /// Returns `true` when this call is the one that scheduled the frame, so
    /// the caller knows it must ask the host for a frame callback. Further
    /// requests before the frame runs return `false`.
    pub fn request(&mut self) -> bool {
        if self.pending {
            self.stats.requests_coalesced += 1;
            return false;
        }
        self.pending = true;
        true
    }

    /// Check whether a frame callback is outstanding
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Called from the frame callback: returns whether work should run now
    ///
    /// This is an atomic check-and-clear; work requested while the frame
    /// runs lands in the next frame.
    pub fn begin_frame(&mut self) -> bool {
        if !std::mem::take(&mut self.pending) {
            return false;
        }
        self.stats.frames_run += 1;
        tracing::trace!(frame = self.stats.frames_run, "FrameScheduler: running frame");
        true
    }

    /// Drop any pending request without running it
    pub fn cancel(&mut self) {
        self.pending = false;
    }

    pub fn stats(&self) -> FrameStats {
        self.stats
    }
}
