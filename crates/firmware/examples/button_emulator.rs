//! Button Emulator
//!
//! Runs the board's button pipeline on the desktop and plays a scripted
//! sequence of presses against the emulated lines.
//! Run with: cargo run --example button_emulator --features emulator
//!
//! Set `RUST_LOG=trace` to also see debounced and discarded edges.

use std::time::Duration;

use embassy_futures::select::select;
use firmware::app::{NEXT_EVENTS, PLAY_PAUSE_EVENTS, USER_EVENTS};
use firmware::{register_buttons, EmulatedLines, EventCounter, BUTTONS};
use platform::ButtonEvent;
use tokio::time::sleep;
use tracing_subscriber::EnvFilter;

fn ms(ms: u64) -> Duration {
    Duration::from_millis(ms)
}

fn summary(counter: &EventCounter) {
    println!(
        "  {:<10} single={} double={} long={}",
        counter.name(),
        counter.count(ButtonEvent::SingleClick),
        counter.count(ButtonEvent::DoubleClick),
        counter.count(ButtonEvent::LongPress),
    );
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .init();

    println!("Button Emulator");
    println!(
        "debounce={}ms settle={}ms long-press={}ms\n",
        BUTTONS.config().debounce.as_millis(),
        BUTTONS.config().settle.as_millis(),
        BUTTONS.config().long_press.as_millis(),
    );

    let mut lines = EmulatedLines::new();
    let mut worker = BUTTONS.init(&mut lines)?;
    let captures = register_buttons(&BUTTONS, &mut lines)?;
    let [play, next, user] = captures.as_slice() else {
        return Err("expected three button lines".into());
    };

    let script = async {
        // Single click with contact bounce on press.
        lines.press(play);
        sleep(ms(3)).await;
        lines.release(play);
        sleep(ms(2)).await;
        lines.press(play);
        sleep(ms(80)).await;
        lines.release(play);
        sleep(ms(300)).await;

        // Double click.
        for _ in 0..2 {
            lines.press(next);
            sleep(ms(50)).await;
            lines.release(next);
            sleep(ms(50)).await;
        }
        sleep(ms(300)).await;

        // Long press, released well after the threshold.
        lines.press(user);
        sleep(ms(800)).await;
        lines.release(user);
        sleep(ms(300)).await;
    };
    let _ = select(worker.run(), script).await;

    println!("\nEvents:");
    summary(&PLAY_PAUSE_EVENTS);
    summary(&NEXT_EVENTS);
    summary(&USER_EVENTS);
    Ok(())
}
