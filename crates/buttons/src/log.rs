//! Logging shims.
//!
//! Forward to `defmt` on hardware and to `tracing` on desktop. With neither
//! feature enabled the arguments are still type-checked through
//! `format_args!` but nothing is emitted.
//!
//! Format strings must stay within the `{}` subset both backends accept.
//! Loaded with `#[macro_use]` ahead of every other module; `warn` cannot be
//! re-exported by path as it collides with the built-in lint attribute.

macro_rules! trace {
    ( $($arg:tt)+ ) => {{
        #[cfg(feature = "defmt")]
        defmt::trace!($($arg)+);
        #[cfg(feature = "tracing")]
        tracing::trace!($($arg)+);
        #[cfg(not(any(feature = "defmt", feature = "tracing")))]
        let _ = core::format_args!($($arg)+);
    }};
}

macro_rules! debug {
    ( $($arg:tt)+ ) => {{
        #[cfg(feature = "defmt")]
        defmt::debug!($($arg)+);
        #[cfg(feature = "tracing")]
        tracing::debug!($($arg)+);
        #[cfg(not(any(feature = "defmt", feature = "tracing")))]
        let _ = core::format_args!($($arg)+);
    }};
}

macro_rules! info {
    ( $($arg:tt)+ ) => {{
        #[cfg(feature = "defmt")]
        defmt::info!($($arg)+);
        #[cfg(feature = "tracing")]
        tracing::info!($($arg)+);
        #[cfg(not(any(feature = "defmt", feature = "tracing")))]
        let _ = core::format_args!($($arg)+);
    }};
}

macro_rules! warn {
    ( $($arg:tt)+ ) => {{
        #[cfg(feature = "defmt")]
        defmt::warn!($($arg)+);
        #[cfg(feature = "tracing")]
        tracing::warn!($($arg)+);
        #[cfg(not(any(feature = "defmt", feature = "tracing")))]
        let _ = core::format_args!($($arg)+);
    }};
}

macro_rules! error {
    ( $($arg:tt)+ ) => {{
        #[cfg(feature = "defmt")]
        defmt::error!($($arg)+);
        #[cfg(feature = "tracing")]
        tracing::error!($($arg)+);
        #[cfg(not(any(feature = "defmt", feature = "tracing")))]
        let _ = core::format_args!($($arg)+);
    }};
}
