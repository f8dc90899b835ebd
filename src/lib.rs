//! # clickbeat
//!
//! Cross-platform periodic click injection with monitor-relative targeting
//! and a global hotkey toggle.
//!
//! ## Features
//!
//! - Monitor enumeration with absolute desktop geometry (macOS, Windows,
//!   Linux/X11)
//! - Pure monitor-relative ↔ absolute coordinate conversion with strict
//!   bounds validation (out-of-range is an error, never a clamp)
//! - A cancellable background click worker: one click per interval until
//!   stopped, with a single injection failure treated as fatal to the run
//! - A global hotkey listener with auto-repeat debouncing and fail-fast
//!   install (a missing permission surfaces at start, not as a dead key)
//! - Channel-based handoff to a single-threaded presentation loop
//!
//! ## Quick Start
//!
//! ```no_run
//! use clickbeat::{coords, monitors, ClickConfig, ClickWorker, SystemInjector};
//! use std::time::Duration;
//!
//! let all = monitors().expect("failed to enumerate monitors");
//! let monitor = &all[0];
//!
//! let (rel_x, rel_y) = (960, 540);
//! coords::validate_bounds(monitor, rel_x, rel_y).expect("target out of range");
//! let (abs_x, abs_y) = coords::to_absolute(monitor, rel_x, rel_y);
//!
//! let worker = ClickWorker::new();
//! let config = ClickConfig::new(abs_x, abs_y, Duration::from_millis(500)).unwrap();
//! worker
//!     .start(config, SystemInjector, |outcome| {
//!         println!("run ended: {outcome:?}");
//!     })
//!     .expect("failed to start");
//!
//! // ... later, from any thread:
//! worker.stop().unwrap();
//! ```
//!
//! ## Architecture
//!
//! The worker and the hotkey listener each run on their own background
//! thread and communicate with the foreground only through thread-safe
//! signals: an atomic running flag, a stop channel the worker waits on
//! between clicks (the interval wait doubles as the cancellation point),
//! and the [`channel`] module's event queue for run-ended and toggle
//! notifications. Platform specifics live behind [`worker::InputInjector`]
//! and the `platform` module, so the state machines are testable with fakes.

pub mod channel;
pub mod config;
pub mod coords;
pub mod dpi;
pub mod error;
pub mod hotkey;
pub mod keycode;
pub mod monitor;
pub mod worker;

mod platform;

// Re-exports
pub use config::{Button, ClickConfig};
pub use dpi::{DpiMode, ensure_dpi_awareness};
pub use error::{Error, Result};
pub use hotkey::{HotkeyListener, KeyEventHandler};
pub use keycode::Key;
pub use monitor::{MonitorInfo, cursor_position, monitor_at_point, monitors, primary_monitor};
pub use worker::{ClickWorker, InputInjector, RunOutcome, SystemInjector};
