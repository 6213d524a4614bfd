//! One-shot deadline timers.
//!
//! A timer is a period plus an optional deadline. Restarting overwrites the
//! deadline and cancelling clears it, so neither can race with an expiry:
//! expiry is only observed when the owner polls with [`OneShot::take_expired`].

use embassy_time::{Duration, Instant};

/// Restartable one-shot timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct OneShot {
    period: Duration,
    deadline: Option<Instant>,
}

impl OneShot {
    /// Create a disarmed timer.
    pub const fn new(period: Duration) -> Self {
        Self {
            period,
            deadline: None,
        }
    }

    /// Arm the timer to expire one period after `now`, replacing any
    /// pending deadline.
    pub fn restart(&mut self, now: Instant) {
        self.deadline = Some(now.checked_add(self.period).unwrap_or(Instant::MAX));
    }

    /// Disarm the timer. No-op when already idle.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Pending deadline, if armed.
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Whether a deadline is pending.
    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Disarm and report `true` if the deadline is at or before `now`.
    pub fn take_expired(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if deadline <= now => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
