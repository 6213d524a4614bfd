//! Application wiring: the driver instance and the handler behind each line.

use core::sync::atomic::{AtomicU32, Ordering};

use buttons::{ButtonConfig, ButtonDriver, EdgeCapture, RegisterError};
use platform::{ButtonEvent, ButtonHandler, EdgeInterrupts, LineId};

use crate::input::{BUTTON_COUNT, BUTTON_LINES, NEXT, PLAY_PAUSE, USER};

/// Timings used on the board.
pub const BUTTON_CONFIG: ButtonConfig = ButtonConfig::new();

/// The board's button pipeline.
pub static BUTTONS: ButtonDriver = ButtonDriver::new(BUTTON_CONFIG);

/// Logs every event for one button and keeps per-kind totals.
pub struct EventCounter {
    name: &'static str,
    single: AtomicU32,
    double: AtomicU32,
    long: AtomicU32,
}

impl EventCounter {
    /// Zeroed counter labelled `name` in log output.
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            single: AtomicU32::new(0),
            double: AtomicU32::new(0),
            long: AtomicU32::new(0),
        }
    }

    /// Label used in log output.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// How many `event`s were delivered so far.
    pub fn count(&self, event: ButtonEvent) -> u32 {
        self.slot(event).load(Ordering::Relaxed)
    }

    fn slot(&self, event: ButtonEvent) -> &AtomicU32 {
        match event {
            ButtonEvent::SingleClick => &self.single,
            ButtonEvent::DoubleClick => &self.double,
            ButtonEvent::LongPress => &self.long,
        }
    }
}

impl ButtonHandler for EventCounter {
    fn on_event(&self, event: ButtonEvent, line: LineId) {
        let total = self.slot(event).fetch_add(1, Ordering::Relaxed).wrapping_add(1);
        #[cfg(feature = "hardware")]
        defmt::info!("{=str}: {} on {} (#{=u32})", self.name, event, line, total);
        #[cfg(feature = "emulator")]
        tracing::info!(button = self.name, %line, total, "{event}");
        #[cfg(not(any(feature = "hardware", feature = "emulator")))]
        let _ = (line, total);
    }
}

/// Play/Pause button events.
pub static PLAY_PAUSE_EVENTS: EventCounter = EventCounter::new("play/pause");
/// Next-track button events.
pub static NEXT_EVENTS: EventCounter = EventCounter::new("next");
/// User button events.
pub static USER_EVENTS: EventCounter = EventCounter::new("user");

/// Handler serving `line`, if the board assigns one.
pub fn handler_for(line: LineId) -> Option<&'static dyn ButtonHandler> {
    match line {
        PLAY_PAUSE => Some(&PLAY_PAUSE_EVENTS),
        NEXT => Some(&NEXT_EVENTS),
        USER => Some(&USER_EVENTS),
        _ => None,
    }
}

/// Register every line in [`BUTTON_LINES`] with its handler and polarity.
///
/// Capture handles come back in the same order as [`BUTTON_LINES`]. Stops
/// at the first failure; lines registered before it stay registered.
pub fn register_buttons<'d, I, const N: usize, const DEPTH: usize>(
    driver: &'d ButtonDriver<N, DEPTH>,
    irq: &mut I,
) -> Result<heapless::Vec<EdgeCapture<'d, DEPTH>, BUTTON_COUNT>, RegisterError<I::Error>>
where
    I: EdgeInterrupts,
{
    let mut captures = heapless::Vec::new();
    for (line, active) in BUTTON_LINES {
        let capture = driver.register_with(irq, line, active, handler_for(line))?;
        captures
            .push(capture)
            .map_err(|_| RegisterError::RegistryFull { capacity: BUTTON_COUNT })?;
    }
    Ok(captures)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::input::EmulatedLines;

    #[test]
    fn counter_tallies_per_kind() {
        let counter = EventCounter::new("test");
        counter.on_event(ButtonEvent::DoubleClick, LineId::new(1));
        counter.on_event(ButtonEvent::DoubleClick, LineId::new(1));
        counter.on_event(ButtonEvent::LongPress, LineId::new(1));
        assert_eq!(counter.count(ButtonEvent::DoubleClick), 2);
        assert_eq!(counter.count(ButtonEvent::LongPress), 1);
        assert_eq!(counter.count(ButtonEvent::SingleClick), 0);
    }

    #[test]
    fn every_board_line_has_a_handler() {
        for (line, _) in BUTTON_LINES {
            assert!(handler_for(line).is_some(), "{line} has no handler");
        }
        assert!(handler_for(LineId::new(7)).is_none());
    }

    #[test]
    fn registration_stops_at_the_first_failure() {
        let driver: ButtonDriver<2> = ButtonDriver::new(BUTTON_CONFIG);
        let mut lines = EmulatedLines::new();
        let _worker = driver.init(&mut lines).unwrap();

        let result = register_buttons(&driver, &mut lines);
        assert_eq!(result.err(), Some(RegisterError::RegistryFull { capacity: 2 }));
        assert_eq!(driver.len(), 2);
        assert!(driver.find(PLAY_PAUSE).is_some());
        assert!(driver.find(NEXT).is_some());
        assert!(driver.find(USER).is_none());
        assert!(lines.config(USER).is_none());
    }
}
