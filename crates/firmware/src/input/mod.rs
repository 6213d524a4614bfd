//! Button line wiring.
//!
//! | Button     | MCU pin | EXTI line | Wiring                          |
//! |------------|---------|-----------|---------------------------------|
//! | Play/Pause | PA0     | 0         | Active-low, internal pull-up    |
//! | Next       | PA1     | 1         | Active-low, internal pull-up    |
//! | User (B1)  | PC13    | 13        | Active-high, on-board pull-down |
//!
//! The line number doubles as the [`LineId`] handed to the button driver,
//! so handler output can be matched back to a pin.
//!
//! At compile time exactly one pin-configuration collaborator is selected:
//!
//! | Feature    | Collaborator              | Source          |
//! |------------|---------------------------|-----------------|
//! | `hardware` | [`hardware::ExtiLines`]   | STM32 EXTI      |
//! | (any)      | [`EmulatedLines`]         | scripted levels |

use platform::{ActiveLevel, LineId};

/// Play/Pause button (PA0, EXTI0).
pub const PLAY_PAUSE: LineId = LineId::new(0);

/// Next-track button (PA1, EXTI1).
pub const NEXT: LineId = LineId::new(1);

/// Nucleo user button B1 (PC13, EXTI13).
pub const USER: LineId = LineId::new(13);

/// Number of button lines on the board.
pub const BUTTON_COUNT: usize = 3;

/// Every button line with its press polarity, in registration order.
pub const BUTTON_LINES: [(LineId, ActiveLevel); BUTTON_COUNT] = [
    (PLAY_PAUSE, ActiveLevel::Low),
    (NEXT, ActiveLevel::Low),
    (USER, ActiveLevel::High),
];

pub mod emulated;
pub use emulated::EmulatedLines;

/// STM32 EXTI collaborator and per-line edge tasks.
#[cfg(feature = "hardware")]
pub mod hardware;
#[cfg(feature = "hardware")]
pub use hardware::ExtiLines;
