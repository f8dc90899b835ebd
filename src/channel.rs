//! Channel-based delivery of background signals to the foreground loop.
//!
//! The worker and hotkey listener run on their own threads and must never
//! touch presentation state directly. This module gives the shell a single
//! receiver to drain on its own loop; background components only enqueue.
//!
//! # Example
//!
//! ```no_run
//! use clickbeat::channel::{app_channel, AppEvent};
//! use clickbeat::{ClickConfig, ClickWorker, HotkeyListener, SystemInjector};
//! use std::time::Duration;
//!
//! let (sink, rx) = app_channel(16);
//!
//! let listener = HotkeyListener::default();
//! listener.start(sink.toggle_callback()).expect("hotkey unavailable");
//!
//! let worker = ClickWorker::new();
//! let config = ClickConfig::new(960, 540, Duration::from_millis(500)).unwrap();
//! worker.start(config, SystemInjector, sink.run_end_callback()).unwrap();
//!
//! for event in rx.iter() {
//!     match event {
//!         AppEvent::HotkeyToggled => { /* start or stop the worker */ }
//!         AppEvent::RunEnded(outcome) => println!("run ended: {outcome:?}"),
//!     }
//! }
//! ```

use crate::worker::RunOutcome;
use std::sync::mpsc::{self, Receiver, SyncSender};

/// A signal queued for the foreground loop.
#[derive(Debug)]
pub enum AppEvent {
    /// The global hotkey was pressed; the shell decides start vs. stop.
    HotkeyToggled,
    /// A click run ended, with its outcome.
    RunEnded(RunOutcome),
}

/// Cloneable producer half handed to background components.
#[derive(Clone)]
pub struct EventSink {
    sender: SyncSender<AppEvent>,
}

impl EventSink {
    /// Enqueue an event without blocking.
    ///
    /// If the foreground has fallen behind and the buffer is full, the event
    /// is dropped rather than stalling a background thread.
    pub fn send(&self, event: AppEvent) {
        let _ = self.sender.try_send(event);
    }

    /// A callback suitable for [`crate::HotkeyListener::start`].
    pub fn toggle_callback(&self) -> impl Fn() + Send + Sync + 'static {
        let sink = self.clone();
        move || sink.send(AppEvent::HotkeyToggled)
    }

    /// A callback suitable for [`crate::ClickWorker::start`].
    pub fn run_end_callback(&self) -> impl FnOnce(RunOutcome) + Send + 'static {
        let sink = self.clone();
        move |outcome| sink.send(AppEvent::RunEnded(outcome))
    }
}

/// Create a bounded foreground event channel.
///
/// `capacity` bounds how many undrained events may pile up; a small number
/// (tens) is plenty since each run produces one end event and each hotkey
/// press one toggle.
pub fn app_channel(capacity: usize) -> (EventSink, Receiver<AppEvent>) {
    let (sender, receiver) = mpsc::sync_channel(capacity);
    (EventSink { sender }, receiver)
}

// ============================================================================
// Tokio async support (behind feature flag)
// ============================================================================

#[cfg(feature = "tokio")]
pub use tokio_channel::*;

#[cfg(feature = "tokio")]
mod tokio_channel {
    use super::AppEvent;
    use crate::worker::RunOutcome;
    use tokio::sync::mpsc as tokio_mpsc;

    /// Async producer half handed to background components.
    #[derive(Clone)]
    pub struct AsyncEventSink {
        sender: tokio_mpsc::Sender<AppEvent>,
    }

    impl AsyncEventSink {
        /// Enqueue an event without blocking the background thread.
        pub fn send(&self, event: AppEvent) {
            let _ = self.sender.try_send(event);
        }

        /// A callback suitable for [`crate::HotkeyListener::start`].
        pub fn toggle_callback(&self) -> impl Fn() + Send + Sync + 'static {
            let sink = self.clone();
            move || sink.send(AppEvent::HotkeyToggled)
        }

        /// A callback suitable for [`crate::ClickWorker::start`].
        pub fn run_end_callback(&self) -> impl FnOnce(RunOutcome) + Send + 'static {
            let sink = self.clone();
            move |outcome| sink.send(AppEvent::RunEnded(outcome))
        }
    }

    /// Create a bounded async foreground event channel.
    pub fn app_channel_async(capacity: usize) -> (AsyncEventSink, tokio_mpsc::Receiver<AppEvent>) {
        let (sender, receiver) = tokio_mpsc::channel(capacity);
        (AsyncEventSink { sender }, receiver)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn callbacks_enqueue_in_order() {
        let (sink, rx) = app_channel(8);

        sink.toggle_callback()();
        sink.run_end_callback()(RunOutcome::Stopped);

        assert!(matches!(
            rx.recv_timeout(Duration::from_secs(1)).unwrap(),
            AppEvent::HotkeyToggled
        ));
        assert!(matches!(
            rx.recv_timeout(Duration::from_secs(1)).unwrap(),
            AppEvent::RunEnded(RunOutcome::Stopped)
        ));
    }

    #[test]
    fn full_buffer_drops_instead_of_blocking() {
        let (sink, rx) = app_channel(1);

        sink.send(AppEvent::HotkeyToggled);
        // Buffer full; this one is discarded.
        sink.send(AppEvent::HotkeyToggled);

        assert!(rx.try_recv().is_ok());
        assert!(rx.try_recv().is_err());
    }
}
