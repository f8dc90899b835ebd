//! Headless auto-clicker: periodic clicks toggled by the F8 hotkey.
//!
//! Run with: cargo run --example autoclick -- [monitor] [rel_x] [rel_y] [interval_ms]
//!
//! Defaults to the center of the primary monitor every 1000 ms.
//! Press F8 anywhere to start/stop clicking; Ctrl+C to exit.

use clickbeat::channel::{AppEvent, app_channel};
use clickbeat::{
    ClickConfig, ClickWorker, HotkeyListener, SystemInjector, coords, ensure_dpi_awareness,
    monitors,
};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

fn main() {
    let dpi = ensure_dpi_awareness();

    let all = monitors().expect("failed to enumerate monitors");
    if all.is_empty() {
        eprintln!("no monitors detected");
        std::process::exit(1);
    }

    let args: Vec<String> = std::env::args().skip(1).collect();
    let monitor_index: usize = args.first().map_or(0, |s| s.parse().expect("bad monitor"));
    let monitor = all.get(monitor_index).expect("monitor index out of range");
    let rel_x: i32 = args
        .get(1)
        .map_or(monitor.width / 2, |s| s.parse().expect("bad rel_x"));
    let rel_y: i32 = args
        .get(2)
        .map_or(monitor.height / 2, |s| s.parse().expect("bad rel_y"));
    let interval_ms: u64 = args.get(3).map_or(1000, |s| s.parse().expect("bad interval"));

    coords::validate_bounds(monitor, rel_x, rel_y).expect("target out of range");
    let (abs_x, abs_y) = coords::to_absolute(monitor, rel_x, rel_y);
    let config = ClickConfig::new(abs_x, abs_y, Duration::from_millis(interval_ms))
        .expect("bad interval");

    println!("DPI mode: {dpi}");
    println!(
        "Target: {} at ({rel_x}, {rel_y}) = absolute ({abs_x}, {abs_y}), every {interval_ms} ms",
        monitor.name
    );

    let (sink, rx) = app_channel(16);

    let listener = HotkeyListener::default();
    match listener.start(sink.toggle_callback()) {
        Ok(()) => println!("Press {:?} to toggle clicking, Ctrl+C to exit.", listener.key()),
        // Degrade to manual operation rather than exiting: without the
        // hook this demo can still be driven by Ctrl+C.
        Err(err) => eprintln!("Hotkey unavailable ({err}); Ctrl+C to exit."),
    }

    let exit = Arc::new(AtomicBool::new(false));
    let exit_flag = exit.clone();
    ctrlc::set_handler(move || {
        exit_flag.store(true, Ordering::SeqCst);
    })
    .expect("failed to set Ctrl+C handler");

    let worker = ClickWorker::new();
    while !exit.load(Ordering::SeqCst) {
        match rx.recv_timeout(Duration::from_millis(100)) {
            Ok(AppEvent::HotkeyToggled) => {
                if worker.is_running() {
                    worker.stop().unwrap();
                    println!("Stopping...");
                } else {
                    match worker.start(config.clone(), SystemInjector, sink.run_end_callback()) {
                        Ok(()) => println!("Running."),
                        // A second press can race the previous run's
                        // wind-down; drop it.
                        Err(err) => eprintln!("Not started: {err}"),
                    }
                }
            }
            Ok(AppEvent::RunEnded(outcome)) => println!("Run ended: {outcome:?}"),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    let _ = worker.stop();
    if listener.is_running() {
        let _ = listener.stop();
    }
    println!("Bye.");
}
