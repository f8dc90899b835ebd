//! Inject a single left click at the center of the primary monitor.
//!
//! Run with: cargo run --example click_once
//!
//! Gives you three seconds to move your hands away first.

use clickbeat::worker::InputInjector;
use clickbeat::{Button, SystemInjector, coords, ensure_dpi_awareness, primary_monitor};
use std::time::Duration;

fn main() {
    let dpi = ensure_dpi_awareness();
    println!("DPI mode: {dpi}");

    let monitor = primary_monitor().expect("no primary monitor");
    let (abs_x, abs_y) = coords::to_absolute(&monitor, monitor.width / 2, monitor.height / 2);
    println!("Clicking center of {} = ({abs_x}, {abs_y}) in 3s...", monitor.name);
    std::thread::sleep(Duration::from_secs(3));

    match SystemInjector.click_at(Button::Left, abs_x, abs_y) {
        Ok(()) => println!("Clicked."),
        Err(err) => eprintln!("Injection failed: {err}"),
    }
}
