//! Button event pipeline
//!
//! Turns raw GPIO edges into single-click, double-click and long-press
//! events delivered to per-line handlers.
//!
//! # Pipeline
//!
//! ```text
//! edge IRQ ──▶ EdgeCapture ──try_send──▶ EventChannel ──▶ Worker ──▶ ButtonHandler
//!   (per line, never blocks)          (bounded FIFO)   (debounce, timers,
//!                                                       classification)
//! ```
//!
//! Edges are captured in interrupt context and queued without blocking; a
//! full queue drops the edge. One [`Worker`] consumes the queue, debounces
//! each line, runs the settle and long-press timers and calls the handler.
//!
//! # Timing
//!
//! | Parameter       | Default | Effect                                   |
//! |-----------------|---------|------------------------------------------|
//! | debounce        | 20 ms   | closer edges are ignored                 |
//! | settle          | 100 ms  | window for a further click after release |
//! | long press      | 500 ms  | hold time for [`ButtonEvent::LongPress`] |
//!
//! Two or more clicks in one sequence report [`ButtonEvent::DoubleClick`].
//!
//! # Features
//!
//! - `defmt`: log through defmt and derive `defmt::Format`
//! - `tracing`: log through tracing (desktop builds)

// ── Lint policy ─────────────────────────────────────────────────────────────
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::unreachable)]
#![deny(unused_must_use)]
// ────────────────────────────────────────────────────────────────────────────
#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::print_stdout)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

#[macro_use]
mod log;

pub mod capture;
pub mod channel;
pub mod click;
pub mod config;
pub mod driver;
pub mod engine;
pub mod error;
mod registry;
pub mod timer;

pub use capture::EdgeCapture;
pub use channel::{EventChannel, RawEdge};
pub use click::{ClickTracker, EdgeOutcome};
pub use config::{ButtonConfig, CHANNEL_DEPTH, MAX_BUTTONS};
pub use driver::ButtonDriver;
pub use engine::Worker;
pub use error::{ConfigError, InitError, RegisterError};
pub use registry::ButtonId;
pub use timer::OneShot;

pub use platform::{ActiveLevel, ButtonEvent, ButtonHandler, EdgeKind, LineId, PinState};
