//! Button demo firmware - Main Entry Point
//!
//! Hardware-only entry point for STM32H743ZI.

#![no_std]
#![no_main]

use defmt_rtt as _;
use embassy_executor::Spawner;
use embassy_stm32::exti::Channel;
use embassy_stm32::gpio::Pin;
use embassy_time::{Duration, Timer};

use firmware::input::hardware::{spawn_edge_task, spawn_worker};
use firmware::input::{NEXT, PLAY_PAUSE, USER};
use firmware::{register_buttons, ExtiLines, BUTTONS};

// Panic handler
use panic_probe as _;

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    defmt::info!("Button demo firmware v{=str}", env!("CARGO_PKG_VERSION"));
    let p = embassy_stm32::init(embassy_stm32::Config::default());

    // -----------------------------------------------------------------------
    // Button lines
    //
    //   PA0  = Play/Pause, active-low, internal pull-up (EXTI0)
    //   PA1  = Next      , active-low, internal pull-up (EXTI1)
    //   PC13 = User (B1) , active-high, pull-down (EXTI13)
    // -----------------------------------------------------------------------
    let mut lines = ExtiLines::new();
    let attached = [
        lines.attach(PLAY_PAUSE, p.PA0.degrade(), p.EXTI0.degrade()),
        lines.attach(NEXT, p.PA1.degrade(), p.EXTI1.degrade()),
        lines.attach(USER, p.PC13.degrade(), p.EXTI13.degrade()),
    ];
    if attached.iter().any(Result::is_err) {
        defmt::error!("Not enough EXTI slots for the button lines");
    }

    let worker = match BUTTONS.init(&mut lines) {
        Ok(worker) => worker,
        Err(e) => {
            defmt::error!("Button driver init failed: {}", e);
            halt().await
        }
    };
    if spawn_worker(&spawner, worker).is_err() {
        defmt::error!("Failed to spawn button worker");
        halt().await
    }

    let captures = match register_buttons(&BUTTONS, &mut lines) {
        Ok(captures) => captures,
        Err(e) => {
            defmt::error!("Button registration failed: {}", e);
            halt().await
        }
    };

    for capture in captures {
        let Some(pin) = lines.take(capture.line()) else {
            defmt::warn!("No EXTI input for {}", capture.line());
            continue;
        };
        if spawn_edge_task(&spawner, pin, capture).is_err() {
            defmt::error!("Failed to spawn edge task for {}", capture.line());
        }
    }
    defmt::info!(
        "{=usize} buttons live, channel depth={=usize}",
        BUTTONS.len(),
        buttons::CHANNEL_DEPTH
    );

    // Main loop - heartbeat
    let mut counter = 0u32;
    loop {
        Timer::after(Duration::from_secs(10)).await;
        counter = counter.wrapping_add(1);
        defmt::debug!(
            "Heartbeat tick={=u32} pending edges={=usize}",
            counter,
            BUTTONS.pending_edges()
        );
    }
}

async fn halt() -> ! {
    loop {
        Timer::after(Duration::from_secs(1)).await;
    }
}
