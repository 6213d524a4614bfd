//! Driver error types.

use core::fmt;

use platform::LineId;

pub use crate::config::ConfigError;

/// Failure of [`ButtonDriver::init`](crate::ButtonDriver::init).
///
/// `E` is the error type of the pin-configuration collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InitError<E> {
    /// The driver is already running; the worker was handed out earlier.
    AlreadyInitialized,
    /// The timing configuration cannot classify anything.
    InvalidConfig(ConfigError),
    /// Installing the edge-interrupt service failed.
    Interrupts(E),
}

#[allow(clippy::use_debug)] // collaborator errors are only required to be Debug
impl<E: fmt::Debug> fmt::Display for InitError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyInitialized => write!(f, "button driver already initialized"),
            Self::InvalidConfig(e) => write!(f, "invalid button configuration: {e}"),
            Self::Interrupts(e) => write!(f, "edge interrupt service install failed: {e:?}"),
        }
    }
}

impl<E: fmt::Debug> core::error::Error for InitError<E> {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::InvalidConfig(e) => Some(e),
            _ => None,
        }
    }
}

impl<E> From<ConfigError> for InitError<E> {
    fn from(e: ConfigError) -> Self {
        Self::InvalidConfig(e)
    }
}

/// Failure of [`ButtonDriver::register`](crate::ButtonDriver::register).
///
/// None of these leave a partially registered button behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RegisterError<E> {
    /// `init` has not succeeded yet.
    NotInitialized,
    /// The line already has a button; the original stays in place.
    AlreadyRegistered(LineId),
    /// Every slot is taken.
    RegistryFull {
        /// Number of slots in the registry
        capacity: usize,
    },
    /// The collaborator refused to configure the line.
    Interrupts(E),
}

#[allow(clippy::use_debug)] // collaborator errors are only required to be Debug
impl<E: fmt::Debug> fmt::Display for RegisterError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotInitialized => write!(f, "button driver not initialized"),
            Self::AlreadyRegistered(line) => write!(f, "{line} is already registered"),
            Self::RegistryFull { capacity } => {
                write!(f, "button registry full ({capacity} slots)")
            }
            Self::Interrupts(e) => write!(f, "line configuration failed: {e:?}"),
        }
    }
}

impl<E: fmt::Debug> core::error::Error for RegisterError<E> {}
