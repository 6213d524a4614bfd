//! Timing and polarity configuration.
//!
//! The defaults match a mechanical tactile switch wired to ground:
//!
//! | Parameter      | Default | Meaning                                      |
//! |----------------|---------|----------------------------------------------|
//! | `debounce`     | 20 ms   | Minimum spacing between accepted edges       |
//! | `settle`       | 100 ms  | Multi-click window after a release           |
//! | `long_press`   | 500 ms  | Hold time that reports a long press          |
//! | `active_level` | Low     | Level at which the button reads as pressed   |

use core::fmt;

use embassy_time::Duration;
use platform::ActiveLevel;

/// Depth of the raw edge channel between interrupt and worker context.
pub const CHANNEL_DEPTH: usize = 16;

/// Default number of button slots in a [`ButtonDriver`](crate::ButtonDriver).
pub const MAX_BUTTONS: usize = 8;

/// Default debounce window in milliseconds.
pub const DEBOUNCE_MS: u64 = 20;

/// Default click-settle window in milliseconds.
pub const SETTLE_MS: u64 = 100;

/// Default long-press threshold in milliseconds.
pub const LONG_PRESS_MS: u64 = 500;

/// Rejected timing combinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// A zero settle window would classify every click before the next press.
    ZeroSettleWindow,
    /// A zero long-press threshold would fire on every press.
    ZeroLongPress,
    /// The debounce window must be shorter than both classification windows.
    DebounceTooLong,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroSettleWindow => write!(f, "settle window must be non-zero"),
            Self::ZeroLongPress => write!(f, "long-press threshold must be non-zero"),
            Self::DebounceTooLong => write!(
                f,
                "debounce window must be shorter than the settle window and the long-press threshold"
            ),
        }
    }
}

impl core::error::Error for ConfigError {}

/// Driver-wide classification parameters.
///
/// Built with chained `const` setters so it can initialize a `static`:
///
/// ```
/// use buttons::ButtonConfig;
/// use platform::ActiveLevel;
///
/// const CONFIG: ButtonConfig = ButtonConfig::new()
///     .debounce_ms(30)
///     .long_press_ms(800)
///     .active_level(ActiveLevel::High);
///
/// assert!(CONFIG.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonConfig {
    /// Edges closer than this to the last accepted edge are contact bounce.
    pub debounce: Duration,
    /// Time after a release during which another press continues the
    /// multi-click sequence.
    pub settle: Duration,
    /// Hold time after which a press reports [`ButtonEvent::LongPress`](platform::ButtonEvent::LongPress).
    pub long_press: Duration,
    /// Default polarity for lines registered without an explicit one.
    pub active_level: ActiveLevel,
}

impl ButtonConfig {
    /// Reference timings, active-low.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            debounce: Duration::from_millis(DEBOUNCE_MS),
            settle: Duration::from_millis(SETTLE_MS),
            long_press: Duration::from_millis(LONG_PRESS_MS),
            active_level: ActiveLevel::Low,
        }
    }

    /// Set the debounce window.
    #[must_use]
    pub const fn debounce_ms(mut self, ms: u64) -> Self {
        self.debounce = Duration::from_millis(ms);
        self
    }

    /// Set the click-settle window.
    #[must_use]
    pub const fn settle_ms(mut self, ms: u64) -> Self {
        self.settle = Duration::from_millis(ms);
        self
    }

    /// Set the long-press threshold.
    #[must_use]
    pub const fn long_press_ms(mut self, ms: u64) -> Self {
        self.long_press = Duration::from_millis(ms);
        self
    }

    /// Set the default press polarity.
    #[must_use]
    pub const fn active_level(mut self, level: ActiveLevel) -> Self {
        self.active_level = level;
        self
    }

    /// Check that the windows can be told apart.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.settle.as_ticks() == 0 {
            return Err(ConfigError::ZeroSettleWindow);
        }
        if self.long_press.as_ticks() == 0 {
            return Err(ConfigError::ZeroLongPress);
        }
        if self.debounce >= self.settle || self.debounce >= self.long_press {
            return Err(ConfigError::DebounceTooLong);
        }
        Ok(())
    }
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_timings() {
        let config = ButtonConfig::default();
        assert_eq!(config.debounce.as_millis(), 20);
        assert_eq!(config.settle.as_millis(), 100);
        assert_eq!(config.long_press.as_millis(), 500);
        assert_eq!(config.active_level, ActiveLevel::Low);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn setters_chain() {
        let config = ButtonConfig::new()
            .debounce_ms(5)
            .settle_ms(250)
            .long_press_ms(1_000)
            .active_level(ActiveLevel::High);
        assert_eq!(config.debounce.as_millis(), 5);
        assert_eq!(config.settle.as_millis(), 250);
        assert_eq!(config.long_press.as_millis(), 1_000);
        assert_eq!(config.active_level, ActiveLevel::High);
    }

    #[test]
    fn zero_windows_are_rejected() {
        assert_eq!(
            ButtonConfig::new().settle_ms(0).validate(),
            Err(ConfigError::ZeroSettleWindow)
        );
        assert_eq!(
            ButtonConfig::new().long_press_ms(0).validate(),
            Err(ConfigError::ZeroLongPress)
        );
    }

    #[test]
    fn debounce_must_be_shorter_than_windows() {
        assert_eq!(
            ButtonConfig::new().debounce_ms(100).validate(),
            Err(ConfigError::DebounceTooLong)
        );
        assert_eq!(
            ButtonConfig::new().settle_ms(1_000).debounce_ms(600).validate(),
            Err(ConfigError::DebounceTooLong)
        );
    }
}
