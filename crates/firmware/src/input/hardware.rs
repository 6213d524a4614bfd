//! STM32 EXTI button lines.
//!
//! # Architecture
//!
//! [`ExtiLines`] owns the not-yet-configured button pins. The button driver
//! asks it to configure a line, which turns the pin into an [`ExtiInput`]
//! with the requested pull. [`spawn_edge_task`] then moves that input into
//! its own task, which waits for either edge and hands the sampled level to
//! the line's [`EdgeCapture`].
//!
//! Edge tasks never block on the driver: [`EdgeCapture::on_edge`] uses
//! `try_send`, so a stalled worker loses edges instead of stalling EXTI.
//!
//! `embassy_stm32::init` binds the EXTI interrupt handlers when the `exti`
//! feature is enabled, so [`EdgeInterrupts::install`] only has to record that
//! the service is up.

use embassy_executor::{SpawnError, Spawner};
use embassy_stm32::exti::{AnyChannel, ExtiInput};
use embassy_stm32::gpio::{AnyPin, Input};
use platform::{EdgeInterrupts, LineConfig, LineId, Pull};

use buttons::{EdgeCapture, Worker};

/// Most EXTI lines handed to the button driver.
pub const MAX_LINES: usize = 4;

/// Pin-configuration failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, defmt::Format)]
pub enum ExtiError {
    /// `configure` was called before `install`
    NotInstalled,
    /// No pin was attached for this line
    UnknownLine(LineId),
    /// The line's pin was already turned into an input
    AlreadyConfigured(LineId),
}

/// One EXTI-capable pin, before and after configuration.
enum Slot {
    Pending(AnyPin, AnyChannel),
    Ready(ExtiInput<'static, AnyPin>),
    Taken,
}

/// EXTI-backed pin-configuration collaborator.
pub struct ExtiLines {
    installed: bool,
    slots: heapless::Vec<(LineId, Slot), MAX_LINES>,
}

impl ExtiLines {
    /// No pins attached yet.
    pub const fn new() -> Self {
        Self {
            installed: false,
            slots: heapless::Vec::new(),
        }
    }

    /// Attach the pin and EXTI channel that serve `line`.
    ///
    /// Returns the pair back if no slot is free.
    pub fn attach(
        &mut self,
        line: LineId,
        pin: AnyPin,
        channel: AnyChannel,
    ) -> Result<(), (AnyPin, AnyChannel)> {
        if self.slots.is_full() {
            return Err((pin, channel));
        }
        let _ = self.slots.push((line, Slot::Pending(pin, channel)));
        Ok(())
    }

    /// Take the configured input for `line`, leaving the slot empty.
    pub fn take(&mut self, line: LineId) -> Option<ExtiInput<'static, AnyPin>> {
        let (_, slot) = self.slots.iter_mut().find(|(id, _)| *id == line)?;
        match core::mem::replace(slot, Slot::Taken) {
            Slot::Ready(input) => Some(input),
            other => {
                *slot = other;
                None
            }
        }
    }
}

impl Default for ExtiLines {
    fn default() -> Self {
        Self::new()
    }
}

impl EdgeInterrupts for ExtiLines {
    type Error = ExtiError;

    fn install(&mut self) -> Result<(), Self::Error> {
        self.installed = true;
        Ok(())
    }

    fn configure(&mut self, line: LineId, config: LineConfig) -> Result<(), Self::Error> {
        if !self.installed {
            return Err(ExtiError::NotInstalled);
        }
        let (_, slot) = self
            .slots
            .iter_mut()
            .find(|(id, _)| *id == line)
            .ok_or(ExtiError::UnknownLine(line))?;

        let Slot::Pending(pin, channel) = core::mem::replace(slot, Slot::Taken) else {
            return Err(ExtiError::AlreadyConfigured(line));
        };
        let pull = match config.pull {
            Pull::None => embassy_stm32::gpio::Pull::None,
            Pull::Up => embassy_stm32::gpio::Pull::Up,
            Pull::Down => embassy_stm32::gpio::Pull::Down,
        };
        *slot = Slot::Ready(ExtiInput::new(Input::new(pin, pull), channel));
        defmt::debug!("EXTI {} configured, pull={}", line, config.pull);
        Ok(())
    }
}

/// Spawn the classification worker.
pub fn spawn_worker(spawner: &Spawner, worker: Worker<'static>) -> Result<(), SpawnError> {
    spawner.spawn(worker_task(worker))
}

/// Spawn the edge task serving one configured line.
pub fn spawn_edge_task(
    spawner: &Spawner,
    pin: ExtiInput<'static, AnyPin>,
    capture: EdgeCapture<'static>,
) -> Result<(), SpawnError> {
    spawner.spawn(edge_task(pin, capture))
}

#[embassy_executor::task]
async fn worker_task(mut worker: Worker<'static>) {
    worker.run().await
}

/// Forwards every edge of `pin` to `capture`.
#[embassy_executor::task(pool_size = 4)]
async fn edge_task(mut pin: ExtiInput<'static, AnyPin>, capture: EdgeCapture<'static>) {
    loop {
        pin.wait_for_any_edge().await;
        capture.on_edge(&mut pin);
    }
}
