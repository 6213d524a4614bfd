//! Button input abstraction
//!
//! Shared vocabulary between the edge-capture path, the classification
//! engine and application code: which line an edge came from, what kind of
//! raw edge it was, and which semantic event the engine reports.

use core::fmt;

/// Stable identifier of a physical input line (e.g. a GPIO number).
///
/// Opaque to the pipeline: it is only compared for equality and echoed back
/// to the application handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(transparent)]
pub struct LineId(u8);

impl LineId {
    /// Wrap a raw line number.
    #[must_use]
    pub const fn new(raw: u8) -> Self {
        Self(raw)
    }

    /// Return the raw line number.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl From<u8> for LineId {
    fn from(raw: u8) -> Self {
        Self(raw)
    }
}

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}", self.0)
    }
}

/// Raw transition seen at interrupt time, already mapped through the line's
/// active level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EdgeKind {
    /// Contact closed
    Press,
    /// Contact opened
    Release,
}

/// Classified button events delivered to the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonEvent {
    /// One press/release with no follow-up inside the settle window
    SingleClick,
    /// Two or more press/release cycles inside the settle window
    DoubleClick,
    /// Button held past the long-press threshold
    LongPress,
}

impl ButtonEvent {
    /// Short lowercase name, suitable for log lines.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SingleClick => "single_click",
            Self::DoubleClick => "double_click",
            Self::LongPress => "long_press",
        }
    }
}

impl fmt::Display for ButtonEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Application-side receiver of classified events.
///
/// The handler is invoked from the classification worker, never from the
/// context that registered it. Implementations must return promptly: while a
/// handler runs, no further edges are processed for any button.
pub trait ButtonHandler: Sync {
    /// Called once per classified interaction on `line`.
    fn on_event(&self, event: ButtonEvent, line: LineId);
}

impl<F> ButtonHandler for F
where
    F: Fn(ButtonEvent, LineId) + Sync,
{
    fn on_event(&self, event: ButtonEvent, line: LineId) {
        self(event, line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::sync::atomic::{AtomicU8, Ordering};

    #[test]
    fn closures_are_handlers() {
        static SEEN: AtomicU8 = AtomicU8::new(0);
        let handler = |event: ButtonEvent, line: LineId| {
            if event == ButtonEvent::DoubleClick {
                SEEN.store(line.get(), Ordering::SeqCst);
            }
        };
        handler.on_event(ButtonEvent::DoubleClick, LineId::new(7));
        assert_eq!(SEEN.load(Ordering::SeqCst), 7);
    }

    #[test]
    fn event_names_match_display() {
        assert_eq!(ButtonEvent::SingleClick.to_string(), "single_click");
        assert_eq!(ButtonEvent::LongPress.as_str(), "long_press");
        assert_eq!(LineId::from(10).to_string(), "line 10");
    }
}
