//! Classification worker.
//!
//! The single consumer of the edge channel. It also owns every timer
//! expiry: instead of a separate timer service, the loop waits on whichever
//! comes first, the next edge or the earliest pending deadline, and handles
//! both in this one context.

use embassy_futures::select::{select, Either};
use embassy_time::{Instant, Timer};
use platform::{ButtonEvent, ButtonHandler, LineId};

use crate::channel::{EdgeReceiver, RawEdge};
use crate::click::EdgeOutcome;
use crate::config::{CHANNEL_DEPTH, MAX_BUTTONS};
use crate::registry::Registry;

/// Owner of the consumer side of the pipeline.
///
/// Handed out exactly once by [`ButtonDriver::init`](crate::ButtonDriver::init).
pub struct Worker<'d, const N: usize = MAX_BUTTONS, const DEPTH: usize = CHANNEL_DEPTH> {
    rx: EdgeReceiver<'d, DEPTH>,
    registry: &'d Registry<N>,
}

impl<'d, const N: usize, const DEPTH: usize> Worker<'d, N, DEPTH> {
    pub(crate) fn new(rx: EdgeReceiver<'d, DEPTH>, registry: &'d Registry<N>) -> Self {
        Self { rx, registry }
    }

    /// Process edges and expiries forever.
    ///
    /// Blocks on the channel while no timer is pending.
    pub async fn run(&mut self) -> ! {
        loop {
            let edge = match self.next_deadline() {
                Some(deadline) => match select(self.rx.receive(), Timer::at(deadline)).await {
                    Either::First(edge) => Some(edge),
                    Either::Second(()) => None,
                },
                None => Some(self.rx.receive().await),
            };
            let now = Instant::now();
            self.fire_expired(now);
            if let Some(edge) = edge {
                self.handle_edge(edge, now);
            }
        }
    }

    /// Handle every queued edge as if it arrived at `now`, without waiting.
    ///
    /// Expiries due at `now` are fired first. Returns the number of edges
    /// taken off the channel.
    pub fn drain(&mut self, now: Instant) -> usize {
        self.fire_expired(now);
        let mut handled = 0_usize;
        while let Ok(edge) = self.rx.try_receive() {
            self.handle_edge(edge, now);
            handled = handled.saturating_add(1);
        }
        handled
    }

    /// Fire every timer whose deadline is at or before `now`.
    ///
    /// Returns the number of events dispatched.
    pub fn fire_expired(&mut self, now: Instant) -> usize {
        let mut fired = 0_usize;
        for id in self.registry.ids() {
            loop {
                let expired = self.registry.with_button(id, |button| {
                    button
                        .clicks
                        .poll(now)
                        .map(|event| (event, button.line, button.handler))
                });
                let Some(Some((event, line, handler))) = expired else {
                    break;
                };
                dispatch(handler, event, line);
                fired = fired.saturating_add(1);
            }
        }
        fired
    }

    /// Earliest deadline across all buttons.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.registry
            .ids()
            .filter_map(|id| {
                self.registry
                    .with_button(id, |button| button.clicks.next_deadline())
                    .flatten()
            })
            .min()
    }

    fn handle_edge(&mut self, edge: RawEdge, now: Instant) {
        let Some(id) = self.registry.find(edge.line) else {
            trace!("edge on unregistered {}", edge.line);
            return;
        };
        let outcome = self
            .registry
            .with_button(id, |button| button.clicks.on_edge(edge.kind, now));
        if outcome == Some(EdgeOutcome::Debounced) {
            trace!("debounced edge on {}", edge.line);
        }
    }
}

fn dispatch(handler: Option<&'static dyn ButtonHandler>, event: ButtonEvent, line: LineId) {
    match handler {
        Some(handler) => {
            debug!("{} on {}", event, line);
            handler.on_event(event, line);
        }
        None => warn!("no handler for {} on {}", event, line),
    }
}
