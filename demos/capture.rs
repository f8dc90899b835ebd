//! Capture the cursor position as a reusable click configuration.
//!
//! Run with: cargo run --example capture --features serde
//!
//! Prints the containing monitor and a JSON `ClickConfig` aimed at the
//! cursor, ready to paste into a shell's saved settings.

use clickbeat::{ClickConfig, coords, monitors};
use std::time::Duration;

fn main() {
    let all = monitors().expect("failed to enumerate monitors");

    let captured = coords::capture_cursor(&all).expect("cursor query failed");
    let Some((monitor, rel_x, rel_y)) = captured else {
        eprintln!("cursor is outside every detected monitor");
        std::process::exit(1);
    };

    println!("Cursor on {} at relative ({rel_x}, {rel_y})", monitor.name);

    let (abs_x, abs_y) = coords::to_absolute(monitor, rel_x, rel_y);
    let config = ClickConfig::new(abs_x, abs_y, Duration::from_millis(1000)).unwrap();
    println!("{}", serde_json::to_string_pretty(&config).unwrap());
}
