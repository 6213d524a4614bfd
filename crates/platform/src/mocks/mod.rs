//! Mock implementations for testing
//!
//! This module provides mock implementations of the platform traits
//! for use in unit and integration tests.

#![cfg(any(test, feature = "std"))]

use core::cell::RefCell;
use core::convert::Infallible;

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;

use crate::*;

/// Most events a [`RecordingHandler`] keeps; later events are discarded.
pub const RECORDED_EVENTS: usize = 32;

/// Mock input pin with a settable level
pub struct MockPin {
    high: bool,
}

impl MockPin {
    /// Create a pin resting at `level`
    pub fn new(level: PinState) -> Self {
        Self { high: level.into() }
    }

    /// Drive the pin to `level`
    pub fn set(&mut self, level: PinState) {
        self.high = level.into();
    }
}

impl embedded_hal::digital::ErrorType for MockPin {
    type Error = Infallible;
}

impl embedded_hal::digital::InputPin for MockPin {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.high)
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.high)
    }
}

/// Error injected by [`MockInterrupts`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockInterruptError {
    /// `install` was told to fail
    InstallRejected,
    /// `configure` was told to fail for this line
    LineRejected(LineId),
}

/// Mock pin-configuration collaborator
///
/// Records every call so tests can assert on what the driver asked for.
pub struct MockInterrupts {
    installs: u32,
    configured: heapless::Vec<(LineId, LineConfig), 16>,
    fail_install: bool,
    reject_line: Option<LineId>,
}

impl MockInterrupts {
    /// Create a collaborator that accepts every request
    pub fn new() -> Self {
        Self {
            installs: 0,
            configured: heapless::Vec::new(),
            fail_install: false,
            reject_line: None,
        }
    }

    /// Make the next `install` calls fail
    pub fn fail_install(&mut self, fail: bool) {
        self.fail_install = fail;
    }

    /// Make `configure` fail for `line`
    pub fn reject_line(&mut self, line: Option<LineId>) {
        self.reject_line = line;
    }

    /// How many times the interrupt service was installed
    pub fn installs(&self) -> u32 {
        self.installs
    }

    /// Lines configured so far, in call order
    pub fn configured(&self) -> &[(LineId, LineConfig)] {
        &self.configured
    }
}

impl Default for MockInterrupts {
    fn default() -> Self {
        Self::new()
    }
}

impl EdgeInterrupts for MockInterrupts {
    type Error = MockInterruptError;

    fn install(&mut self) -> Result<(), Self::Error> {
        if self.fail_install {
            return Err(MockInterruptError::InstallRejected);
        }
        self.installs = self.installs.saturating_add(1);
        Ok(())
    }

    fn configure(&mut self, line: LineId, config: LineConfig) -> Result<(), Self::Error> {
        if self.reject_line == Some(line) {
            return Err(MockInterruptError::LineRejected(line));
        }
        // Capacity overflow only loses history, not behaviour.
        let _ = self.configured.push((line, config));
        Ok(())
    }
}

/// Handler that stores every event it receives
///
/// `const`-constructible so tests can place it in a `static` and hand out
/// `&'static` references to the driver.
pub struct RecordingHandler {
    events: Mutex<CriticalSectionRawMutex, RefCell<heapless::Vec<(ButtonEvent, LineId), RECORDED_EVENTS>>>,
}

impl RecordingHandler {
    /// Create an empty recorder
    pub const fn new() -> Self {
        Self {
            events: Mutex::new(RefCell::new(heapless::Vec::new())),
        }
    }

    /// Copy of everything recorded so far
    pub fn events(&self) -> heapless::Vec<(ButtonEvent, LineId), RECORDED_EVENTS> {
        self.events.lock(|events| events.borrow().clone())
    }

    /// Number of recorded occurrences of `event`
    pub fn count(&self, event: ButtonEvent) -> usize {
        self.events
            .lock(|events| events.borrow().iter().filter(|(e, _)| *e == event).count())
    }

    /// Forget everything recorded so far
    pub fn clear(&self) {
        self.events.lock(|events| events.borrow_mut().clear());
    }
}

impl Default for RecordingHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl ButtonHandler for RecordingHandler {
    fn on_event(&self, event: ButtonEvent, line: LineId) {
        self.events.lock(|events| {
            let _ = events.borrow_mut().push((event, line));
        });
    }
}
