//! Interrupt-side edge capture.
//!
//! An [`EdgeCapture`] is bound to one line. The platform calls it from the
//! line's edge interrupt (or the task standing in for one). It samples the
//! level, maps it to a press or release and queues the record without
//! blocking. Nothing here allocates, logs or waits.

use embedded_hal::digital::InputPin;
use platform::{ActiveLevel, LineId, PinState};

use crate::channel::{EdgeSender, RawEdge};
use crate::config::CHANNEL_DEPTH;

/// Per-line producer handle.
///
/// `Copy`, so the platform can hand one to every interrupt source that
/// services the line.
#[derive(Clone, Copy)]
pub struct EdgeCapture<'d, const DEPTH: usize = CHANNEL_DEPTH> {
    line: LineId,
    active: ActiveLevel,
    tx: EdgeSender<'d, DEPTH>,
}

impl<'d, const DEPTH: usize> EdgeCapture<'d, DEPTH> {
    pub(crate) fn new(line: LineId, active: ActiveLevel, tx: EdgeSender<'d, DEPTH>) -> Self {
        Self { line, active, tx }
    }

    /// Line this handle reports for.
    pub fn line(&self) -> LineId {
        self.line
    }

    /// Level at which the line reads as pressed.
    pub fn active_level(&self) -> ActiveLevel {
        self.active
    }

    /// Report the level sampled right after an edge.
    ///
    /// Dropped silently when the channel is full.
    pub fn on_level(&self, level: PinState) {
        let edge = RawEdge {
            line: self.line,
            kind: self.active.edge_for(level),
        };
        let _ = self.tx.try_send(edge);
    }

    /// Sample `pin` and report its level.
    ///
    /// A failed read drops the edge.
    pub fn on_edge<P: InputPin>(&self, pin: &mut P) {
        if let Ok(high) = pin.is_high() {
            self.on_level(PinState::from(high));
        }
    }
}

impl<const DEPTH: usize> core::fmt::Debug for EdgeCapture<'_, DEPTH> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("EdgeCapture")
            .field("line", &self.line)
            .field("active", &self.active)
            .finish_non_exhaustive()
    }
}
