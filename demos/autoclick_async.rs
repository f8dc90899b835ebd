//! Async auto-clicker: same as `autoclick`, driven from a tokio runtime.
//!
//! Run with: cargo run --example autoclick_async --features tokio

use clickbeat::channel::{AppEvent, app_channel_async};
use clickbeat::{
    ClickConfig, ClickWorker, HotkeyListener, SystemInjector, coords, ensure_dpi_awareness,
    primary_monitor,
};
use std::time::Duration;

#[tokio::main]
async fn main() {
    let dpi = ensure_dpi_awareness();
    println!("DPI mode: {dpi}");

    let monitor = primary_monitor().expect("no primary monitor");
    let (rel_x, rel_y) = (monitor.width / 2, monitor.height / 2);
    coords::validate_bounds(&monitor, rel_x, rel_y).expect("target out of range");
    let (abs_x, abs_y) = coords::to_absolute(&monitor, rel_x, rel_y);
    let config = ClickConfig::new(abs_x, abs_y, Duration::from_millis(1000)).unwrap();

    let (sink, mut rx) = app_channel_async(16);

    let listener = HotkeyListener::default();
    listener
        .start(sink.toggle_callback())
        .expect("hotkey unavailable");
    println!(
        "Target: {} center, every 1000 ms. Press {:?} to toggle; Ctrl+C to exit.",
        monitor.name,
        listener.key()
    );

    let worker = ClickWorker::new();
    loop {
        tokio::select! {
            event = rx.recv() => match event {
                Some(AppEvent::HotkeyToggled) => {
                    if worker.is_running() {
                        worker.stop().unwrap();
                        println!("Stopping...");
                    } else if let Err(err) =
                        worker.start(config.clone(), SystemInjector, sink.run_end_callback())
                    {
                        eprintln!("Not started: {err}");
                    } else {
                        println!("Running.");
                    }
                }
                Some(AppEvent::RunEnded(outcome)) => println!("Run ended: {outcome:?}"),
                None => break,
            },
            _ = tokio::signal::ctrl_c() => break,
        }
    }

    let _ = worker.stop();
    let _ = listener.stop();
    println!("Bye.");
}
