//! Hardware Abstraction Layer (HAL) for the button event pipeline
//!
//! This crate provides the trait-based seam between board code and the
//! button driver, enabling development and testing without physical
//! hardware.
//!
//! # Architecture Layers
//!
//! ```text
//! Application Layer (firmware crate, ButtonHandler impls)
//!         ↓
//! Button Pipeline (buttons crate)
//!         ↓
//! Platform HAL (this crate - trait abstractions)
//!         ↓
//! Hardware Layer (Embassy HAL + PAC)
//! ```
//!
//! # Abstractions
//!
//! - [`EdgeInterrupts`] - Pin configuration collaborator (pull, edge IRQs)
//! - [`ButtonHandler`] - Application callback capability
//! - [`LineId`], [`EdgeKind`], [`ButtonEvent`] - Shared vocabulary
//! - [`ActiveLevel`] - Press polarity of a line
//!
//! # Features
//!
//! - `std`: Enable the [`mocks`] module outside of this crate's own tests
//! - `defmt`: Enable defmt logging derives
//!
//! # Example
//!
//! ```no_run
//! use platform::{ButtonEvent, ButtonHandler, LineId};
//!
//! struct Toggle;
//!
//! impl ButtonHandler for Toggle {
//!     fn on_event(&self, event: ButtonEvent, line: LineId) {
//!         if event == ButtonEvent::DoubleClick {
//!             let _ = line;
//!         }
//!     }
//! }
//! ```

// ── Lint policy ─────────────────────────────────────────────────────────────
#![deny(clippy::unwrap_used)] // no .unwrap() in production code
#![deny(clippy::expect_used)] // no .expect() in production code
#![deny(clippy::panic)] // no panic!() in production code
#![deny(clippy::unreachable)] // no unreachable!() that isn't documented
#![deny(unused_must_use)]
// all Results must be handled
// ────────────────────────────────────────────────────────────────────────────
#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(unsafe_op_in_unsafe_fn)] // unsafe fn body is not implicitly unsafe block
#![warn(clippy::print_stdout)] // prefer tracing/defmt over println! in lib code
#![allow(clippy::doc_markdown)]
#![allow(clippy::must_use_candidate)] // callers decide
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

pub mod gpio;
pub mod input;
pub mod mocks;

pub use input::{ButtonEvent, ButtonHandler, EdgeKind, LineId};

pub use gpio::{ActiveLevel, EdgeInterrupts, InterruptMode, LineConfig, PinState, Pull};
