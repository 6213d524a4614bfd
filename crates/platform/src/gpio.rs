//! GPIO and edge-interrupt abstraction layer
//!
//! Describes how a button line is wired and what the pin-configuration
//! collaborator must do to turn it into an edge-interrupt source.

use crate::input::{EdgeKind, LineId};

/// Pin state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinState {
    /// High (logic 1)
    High,
    /// Low (logic 0)
    Low,
}

impl From<bool> for PinState {
    fn from(value: bool) -> Self {
        if value {
            Self::High
        } else {
            Self::Low
        }
    }
}

impl From<PinState> for bool {
    fn from(value: PinState) -> Self {
        matches!(value, PinState::High)
    }
}

/// External interrupt configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InterruptMode {
    /// Trigger on rising edge
    RisingEdge,
    /// Trigger on falling edge
    FallingEdge,
    /// Trigger on both edges
    BothEdges,
}

/// Internal pull resistor selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Pull {
    /// No pull resistor
    None,
    /// Pull towards VCC
    Up,
    /// Pull towards ground
    Down,
}

/// Logic level at which a button reads as pressed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ActiveLevel {
    /// Button shorts the line to ground; idle level held high by a pull-up.
    #[default]
    Low,
    /// Button connects the line to VCC; idle level held low by a pull-down.
    High,
}

impl ActiveLevel {
    /// Map a sampled level to the raw edge it represents.
    #[must_use]
    pub const fn edge_for(self, level: PinState) -> EdgeKind {
        match (self, level) {
            (Self::Low, PinState::Low) | (Self::High, PinState::High) => EdgeKind::Press,
            (Self::Low, PinState::High) | (Self::High, PinState::Low) => EdgeKind::Release,
        }
    }

    /// Pull resistor that keeps the line at its idle (released) level.
    #[must_use]
    pub const fn idle_pull(self) -> Pull {
        match self {
            Self::Low => Pull::Up,
            Self::High => Pull::Down,
        }
    }
}

/// What the collaborator is asked to do for one button line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LineConfig {
    /// Edges that must raise an interrupt
    pub interrupt: InterruptMode,
    /// Pull resistor to enable
    pub pull: Pull,
}

impl LineConfig {
    /// Input with both-edge interrupts and the pull matching `active`.
    #[must_use]
    pub const fn button(active: ActiveLevel) -> Self {
        Self {
            interrupt: InterruptMode::BothEdges,
            pull: active.idle_pull(),
        }
    }
}

/// Pin-configuration collaborator.
///
/// Implemented by the board layer. The button driver calls [`install`] once
/// during initialization and [`configure`] once per registered line; after a
/// successful `configure` the implementation is expected to route every edge
/// of that line to the line's edge-capture handle.
///
/// [`install`]: EdgeInterrupts::install
/// [`configure`]: EdgeInterrupts::configure
pub trait EdgeInterrupts {
    /// Error type
    type Error: core::fmt::Debug;

    /// Install the shared edge-interrupt service.
    fn install(&mut self) -> Result<(), Self::Error>;

    /// Configure `line` as an input with the requested pull and interrupt
    /// edges.
    fn configure(&mut self, line: LineId, config: LineConfig) -> Result<(), Self::Error>;
}
