//! Raw edge channel between interrupt context and the worker.
//!
//! Bounded MPSC queue of fixed-size records. Producers use `try_send` and
//! never block; the single consumer awaits `receive` while idle.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::{Channel, Receiver, Sender};
use platform::{EdgeKind, LineId};

use crate::config::CHANNEL_DEPTH;

/// One raw edge as captured in interrupt context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RawEdge {
    /// Line the edge was observed on
    pub line: LineId,
    /// Press or release, already mapped through the line's active level
    pub kind: EdgeKind,
}

/// Producer half, copied into every [`EdgeCapture`](crate::EdgeCapture).
pub type EdgeSender<'d, const DEPTH: usize> =
    Sender<'d, CriticalSectionRawMutex, RawEdge, DEPTH>;

/// Consumer half, owned by the [`Worker`](crate::Worker).
pub type EdgeReceiver<'d, const DEPTH: usize> =
    Receiver<'d, CriticalSectionRawMutex, RawEdge, DEPTH>;

/// Process-wide raw edge queue.
pub struct EventChannel<const DEPTH: usize = CHANNEL_DEPTH> {
    inner: Channel<CriticalSectionRawMutex, RawEdge, DEPTH>,
}

impl<const DEPTH: usize> EventChannel<DEPTH> {
    /// Empty channel, usable in a `static`.
    pub const fn new() -> Self {
        Self {
            inner: Channel::new(),
        }
    }

    /// Producer handle.
    pub fn sender(&self) -> EdgeSender<'_, DEPTH> {
        self.inner.sender()
    }

    /// Consumer handle.
    pub fn receiver(&self) -> EdgeReceiver<'_, DEPTH> {
        self.inner.receiver()
    }

    /// Number of queued edges.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Whether no edge is queued.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Total number of slots.
    pub const fn capacity(&self) -> usize {
        DEPTH
    }
}

impl<const DEPTH: usize> Default for EventChannel<DEPTH> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edge(line: u8, kind: EdgeKind) -> RawEdge {
        RawEdge {
            line: LineId::new(line),
            kind,
        }
    }

    #[test]
    fn preserves_fifo_order() {
        let channel: EventChannel<4> = EventChannel::new();
        let tx = channel.sender();
        let rx = channel.receiver();
        assert!(tx.try_send(edge(1, EdgeKind::Press)).is_ok());
        assert!(tx.try_send(edge(2, EdgeKind::Press)).is_ok());
        assert!(tx.try_send(edge(1, EdgeKind::Release)).is_ok());
        assert_eq!(channel.len(), 3);
        assert_eq!(rx.try_receive().ok(), Some(edge(1, EdgeKind::Press)));
        assert_eq!(rx.try_receive().ok(), Some(edge(2, EdgeKind::Press)));
        assert_eq!(rx.try_receive().ok(), Some(edge(1, EdgeKind::Release)));
        assert!(channel.is_empty());
    }

    #[test]
    fn full_channel_fails_fast() {
        let channel: EventChannel<2> = EventChannel::new();
        let tx = channel.sender();
        assert!(tx.try_send(edge(0, EdgeKind::Press)).is_ok());
        assert!(tx.try_send(edge(0, EdgeKind::Release)).is_ok());
        assert!(tx.try_send(edge(0, EdgeKind::Press)).is_err());
        assert_eq!(channel.len(), channel.capacity());
    }
}
