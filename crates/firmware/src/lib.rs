//! Button demo firmware
//!
//! Board application for the button event pipeline on an STM32H743ZI
//! (Nucleo-144). Three buttons are classified into single clicks, double
//! clicks and long presses, and every event is logged and counted.
//!
//! # Architecture
//!
//! ```text
//! Application Layer (app: handlers, driver instance)
//!         ↓
//! Button Pipeline (buttons crate)
//!         ↓
//! Line Collaborators (input: EXTI on hardware, emulated on desktop)
//!         ↓
//! Platform HAL (Embassy, STM32)
//! ```
//!
//! # Features
//!
//! - `hardware` - Build for STM32H7 target (embassy, defmt)
//! - `emulator` - Build the desktop emulator (tokio, tracing)
//! - `std` - Enable standard library (for emulator and testing)
//!
//! # Examples
//!
//! ## Hardware Target
//!
//! ```bash
//! cargo build --release --target thumbv7em-none-eabihf --features hardware
//! ```
//!
//! ## Emulator Target
//!
//! ```bash
//! cargo run --example button_emulator --features emulator
//! ```

#![cfg_attr(all(not(test), not(feature = "std")), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
// Critical correctness: deny these
#![deny(clippy::await_holding_lock)] // holding a blocking Mutex across .await is a bug
#![deny(unsafe_op_in_unsafe_fn)]
// Logging discipline
#![warn(clippy::print_stdout)] // prefer tracing/defmt over println! in lib code
#![warn(clippy::dbg_macro)]
// Intentional allows for this codebase:
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]

pub mod app;
pub mod input;

pub use app::{register_buttons, EventCounter, BUTTONS, BUTTON_CONFIG};
pub use input::{EmulatedLines, BUTTON_LINES};

#[cfg(feature = "hardware")]
pub use input::ExtiLines;
