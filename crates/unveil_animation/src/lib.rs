//! Unveil Scheduling
//!
//! Timing primitives for the tracker. None of them own a thread or a clock;
//! the host passes the current [`Instant`](std::time::Instant) and drives
//! frames, which keeps every primitive deterministic under test.
//!
//! # Features
//!
//! - **FrameScheduler**: at most one unit of work per display frame
//! - **Debouncer**: trailing-edge quiet-period trigger
//! - **Stagger**: per-index presentation delays with a cap
//! - **TimerQueue**: deadline-ordered delayed work, polled per frame

pub mod debounce;
pub mod scheduler;
pub mod stagger;
pub mod timer;

pub use debounce::Debouncer;
pub use scheduler::{FrameScheduler, FrameStats};
pub use stagger::Stagger;
pub use timer::{TimerId, TimerQueue};
