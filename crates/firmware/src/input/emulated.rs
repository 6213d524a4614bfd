//! Scripted button lines for desktop runs and host tests.
//!
//! [`EmulatedLines`] stands in for the EXTI peripheral: it accepts the
//! driver's line configuration, keeps a level per line starting at the idle
//! level implied by the pull resistor, and forwards a level to the line's
//! capture handle only when it actually changes, as an edge interrupt would.

use core::fmt;

use buttons::EdgeCapture;
use platform::{EdgeInterrupts, LineConfig, LineId, PinState, Pull};

/// Most lines an [`EmulatedLines`] can track.
pub const MAX_LINES: usize = 8;

/// Configuration refused by [`EmulatedLines`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "hardware", derive(defmt::Format))]
pub enum EmulatedLineError {
    /// `configure` was called before `install`
    NotInstalled,
    /// Every emulated line is in use
    NoFreeLine,
}

impl fmt::Display for EmulatedLineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotInstalled => write!(f, "edge interrupt service not installed"),
            Self::NoFreeLine => write!(f, "no free emulated line"),
        }
    }
}

/// Emulated state of one configured line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Line {
    id: LineId,
    config: LineConfig,
    level: PinState,
}

/// Host-side pin-configuration collaborator.
#[derive(Debug, Default)]
pub struct EmulatedLines {
    installed: bool,
    lines: heapless::Vec<Line, MAX_LINES>,
}

impl EmulatedLines {
    /// No lines, service not installed.
    pub const fn new() -> Self {
        Self {
            installed: false,
            lines: heapless::Vec::new(),
        }
    }

    /// Whether `install` has run.
    pub fn is_installed(&self) -> bool {
        self.installed
    }

    /// Configuration last applied to `line`.
    pub fn config(&self, line: LineId) -> Option<LineConfig> {
        self.lines.iter().find(|l| l.id == line).map(|l| l.config)
    }

    /// Current level of `line`.
    pub fn level(&self, line: LineId) -> Option<PinState> {
        self.lines.iter().find(|l| l.id == line).map(|l| l.level)
    }

    /// Drive the capture's line to `level`.
    ///
    /// Returns `true` if the level changed and an edge was reported.
    pub fn drive<const DEPTH: usize>(
        &mut self,
        capture: &EdgeCapture<'_, DEPTH>,
        level: PinState,
    ) -> bool {
        let Some(line) = self.lines.iter_mut().find(|l| l.id == capture.line()) else {
            return false;
        };
        if line.level == level {
            return false;
        }
        line.level = level;
        capture.on_level(level);
        true
    }

    /// Close the contact on the capture's line.
    pub fn press<const DEPTH: usize>(&mut self, capture: &EdgeCapture<'_, DEPTH>) -> bool {
        let level = pressed_level(capture);
        self.drive(capture, level)
    }

    /// Open the contact on the capture's line.
    pub fn release<const DEPTH: usize>(&mut self, capture: &EdgeCapture<'_, DEPTH>) -> bool {
        let level = match pressed_level(capture) {
            PinState::High => PinState::Low,
            PinState::Low => PinState::High,
        };
        self.drive(capture, level)
    }
}

fn pressed_level<const DEPTH: usize>(capture: &EdgeCapture<'_, DEPTH>) -> PinState {
    match capture.active_level() {
        platform::ActiveLevel::Low => PinState::Low,
        platform::ActiveLevel::High => PinState::High,
    }
}

impl EdgeInterrupts for EmulatedLines {
    type Error = EmulatedLineError;

    fn install(&mut self) -> Result<(), Self::Error> {
        self.installed = true;
        Ok(())
    }

    fn configure(&mut self, line: LineId, config: LineConfig) -> Result<(), Self::Error> {
        if !self.installed {
            return Err(EmulatedLineError::NotInstalled);
        }
        let level = match config.pull {
            Pull::Down => PinState::Low,
            Pull::Up | Pull::None => PinState::High,
        };
        if let Some(existing) = self.lines.iter_mut().find(|l| l.id == line) {
            *existing = Line { id: line, config, level };
            return Ok(());
        }
        self.lines
            .push(Line { id: line, config, level })
            .map_err(|_| EmulatedLineError::NoFreeLine)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use platform::ActiveLevel;

    #[test]
    fn configure_requires_install() {
        let mut lines = EmulatedLines::new();
        let config = LineConfig::button(ActiveLevel::Low);
        assert_eq!(
            lines.configure(LineId::new(0), config),
            Err(EmulatedLineError::NotInstalled)
        );
        lines.install().unwrap();
        assert!(lines.configure(LineId::new(0), config).is_ok());
        assert_eq!(lines.level(LineId::new(0)), Some(PinState::High));
    }

    #[test]
    fn idle_level_follows_pull() {
        let mut lines = EmulatedLines::new();
        lines.install().unwrap();
        lines
            .configure(LineId::new(13), LineConfig::button(ActiveLevel::High))
            .unwrap();
        assert_eq!(lines.level(LineId::new(13)), Some(PinState::Low));
        assert_eq!(
            lines.config(LineId::new(13)).map(|c| c.pull),
            Some(Pull::Down)
        );
    }

    #[test]
    fn runs_out_of_lines() {
        let mut lines = EmulatedLines::new();
        lines.install().unwrap();
        for raw in 0..MAX_LINES {
            let id = LineId::new(u8::try_from(raw).unwrap());
            lines.configure(id, LineConfig::button(ActiveLevel::Low)).unwrap();
        }
        assert_eq!(
            lines.configure(LineId::new(99), LineConfig::button(ActiveLevel::Low)),
            Err(EmulatedLineError::NoFreeLine)
        );
    }
}
