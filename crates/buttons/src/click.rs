//! Per-button debounce and click classification.
//!
//! ```text
//!            press (count += 1)             release
//!   Idle ─────────────────────▶ Held ───────────────────▶ Settling
//!    ▲                          │  ▲                        │   │
//!    │     long-press expiry    │  │  press (count += 1)    │   │
//!    ├──────────────────────────┘  └────────────────────────┘   │
//!    │                                                          │
//!    └─────────── settle expiry: 1 → single, ≥2 → double ───────┘
//! ```
//!
//! The tracker owns no clock. Callers pass `now` into every method and poll
//! for expiries, which keeps it fully deterministic under test.

use embassy_time::{Duration, Instant};
use platform::{ButtonEvent, EdgeKind};

use crate::config::ButtonConfig;
use crate::timer::OneShot;

/// Result of feeding one raw edge to a [`ClickTracker`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EdgeOutcome {
    /// The edge passed the debounce gate and updated the state.
    Accepted,
    /// The edge arrived inside the debounce window and was ignored.
    Debounced,
}

/// Debounce gate, click counter and the two one-shot timers of one button.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClickTracker {
    debounce: Duration,
    click_count: u8,
    last_event: Option<Instant>,
    last_press: Option<Instant>,
    settle: OneShot,
    long_press: OneShot,
}

impl ClickTracker {
    /// Fresh tracker with zeroed counters and idle timers.
    pub const fn new(config: &ButtonConfig) -> Self {
        Self {
            debounce: config.debounce,
            click_count: 0,
            last_event: None,
            last_press: None,
            settle: OneShot::new(config.settle),
            long_press: OneShot::new(config.long_press),
        }
    }

    /// Feed one raw edge observed at `now`.
    pub fn on_edge(&mut self, kind: EdgeKind, now: Instant) -> EdgeOutcome {
        if let Some(last) = self.last_event {
            if now.saturating_duration_since(last) < self.debounce {
                return EdgeOutcome::Debounced;
            }
        }
        self.last_event = Some(now);

        match kind {
            EdgeKind::Press => {
                self.click_count = self.click_count.saturating_add(1);
                self.last_press = Some(now);
                self.settle.cancel();
                self.long_press.restart(now);
            }
            EdgeKind::Release => {
                self.long_press.cancel();
                self.settle.restart(now);
            }
        }
        EdgeOutcome::Accepted
    }

    /// Classify whatever expired at or before `now`.
    ///
    /// Returns at most one event per call; call again until `None` to drain.
    pub fn poll(&mut self, now: Instant) -> Option<ButtonEvent> {
        if self.long_press.take_expired(now) {
            self.click_count = 0;
            self.settle.cancel();
            return Some(ButtonEvent::LongPress);
        }
        if self.settle.take_expired(now) {
            let event = match self.click_count {
                0 => None,
                1 => Some(ButtonEvent::SingleClick),
                _ => Some(ButtonEvent::DoubleClick),
            };
            self.click_count = 0;
            return event;
        }
        None
    }

    /// Earliest pending deadline of either timer.
    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.long_press.deadline(), self.settle.deadline()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Presses counted in the current sequence.
    pub fn click_count(&self) -> u8 {
        self.click_count
    }

    /// How long the button has been held, if the long-press timer is running.
    pub fn held_for(&self, now: Instant) -> Option<Duration> {
        if !self.long_press.is_armed() {
            return None;
        }
        self.last_press
            .map(|pressed| now.saturating_duration_since(pressed))
    }
}

#[cfg(test)]
#[allow(clippy::arithmetic_side_effects)] // millisecond offsets in tests stay tiny
mod tests {
    use super::*;
    use EdgeKind::{Press, Release};

    fn at(ms: u64) -> Instant {
        Instant::from_millis(ms)
    }

    fn tracker() -> ClickTracker {
        ClickTracker::new(&ButtonConfig::default())
    }

    #[test]
    fn first_edge_is_always_accepted() {
        let mut t = tracker();
        assert_eq!(t.on_edge(Press, at(0)), EdgeOutcome::Accepted);
        assert_eq!(t.click_count(), 1);
    }

    #[test]
    fn bounce_inside_window_is_ignored() {
        let mut t = tracker();
        t.on_edge(Press, at(100));
        assert_eq!(t.on_edge(Release, at(105)), EdgeOutcome::Debounced);
        assert_eq!(t.on_edge(Press, at(110)), EdgeOutcome::Debounced);
        assert_eq!(t.click_count(), 1);
        assert_eq!(t.on_edge(Release, at(120)), EdgeOutcome::Accepted);
    }

    #[test]
    fn single_click_after_settle() {
        let mut t = tracker();
        t.on_edge(Press, at(0));
        t.on_edge(Release, at(50));
        assert_eq!(t.poll(at(149)), None);
        assert_eq!(t.poll(at(150)), Some(ButtonEvent::SingleClick));
        assert_eq!(t.click_count(), 0);
        assert_eq!(t.next_deadline(), None);
    }

    #[test]
    fn double_click_inside_settle() {
        let mut t = tracker();
        t.on_edge(Press, at(0));
        t.on_edge(Release, at(50));
        t.on_edge(Press, at(120));
        assert_eq!(t.poll(at(150)), None);
        t.on_edge(Release, at(170));
        assert_eq!(t.poll(at(269)), None);
        assert_eq!(t.poll(at(270)), Some(ButtonEvent::DoubleClick));
    }

    #[test]
    fn triple_click_reports_double() {
        let mut t = tracker();
        for base in [0, 80, 160] {
            t.on_edge(Press, at(base));
            t.on_edge(Release, at(base + 40));
        }
        assert_eq!(t.click_count(), 3);
        assert_eq!(t.poll(at(300)), Some(ButtonEvent::DoubleClick));
    }

    #[test]
    fn long_press_suppresses_click() {
        let mut t = tracker();
        t.on_edge(Press, at(0));
        assert_eq!(t.held_for(at(300)), Some(Duration::from_millis(300)));
        assert_eq!(t.poll(at(500)), Some(ButtonEvent::LongPress));
        assert_eq!(t.click_count(), 0);
        t.on_edge(Release, at(600));
        assert_eq!(t.poll(at(700)), None);
        assert_eq!(t.next_deadline(), None);
    }

    #[test]
    fn release_cancels_long_press() {
        let mut t = tracker();
        t.on_edge(Press, at(0));
        t.on_edge(Release, at(499));
        assert_eq!(t.held_for(at(499)), None);
        assert_eq!(t.next_deadline(), Some(at(599)));
        assert_eq!(t.poll(at(599)), Some(ButtonEvent::SingleClick));
    }

    #[test]
    fn press_count_saturates() {
        let config = ButtonConfig::new().debounce_ms(0);
        let mut t = ClickTracker::new(&config);
        for ms in 0..300 {
            t.on_edge(Press, at(ms));
        }
        assert_eq!(t.click_count(), u8::MAX);
    }
}
