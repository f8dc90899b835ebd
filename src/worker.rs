//! Background click worker.
//!
//! The worker owns the Idle → Running → Idle state machine. A run clicks
//! once, then waits up to the configured interval on a stop signal; a signal
//! arriving during the wait interrupts it immediately and no further click is
//! injected. A signal raised during the injection call itself is observed
//! after that call returns. One run at a time; clicks within a run are
//! strictly sequential.

use crate::config::{Button, ClickConfig};
use crate::error::{Error, Result};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

/// Capability interface for click injection.
///
/// The production implementation is [`SystemInjector`]; tests substitute
/// fakes so the worker's timing and cancellation behavior can be exercised
/// without touching the OS input subsystem.
pub trait InputInjector: Send {
    /// Move the pointer to an absolute desktop coordinate and click.
    fn click_at(&mut self, button: Button, x: i32, y: i32) -> Result<()>;
}

/// Injector backed by the platform input facility (SendInput, CGEvent,
/// XTest depending on target).
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemInjector;

impl InputInjector for SystemInjector {
    fn click_at(&mut self, button: Button, x: i32, y: i32) -> Result<()> {
        crate::platform::click_at(button, x, y)
    }
}

/// How a click run ended.
#[derive(Debug)]
pub enum RunOutcome {
    /// The run was stopped by request.
    Stopped,
    /// An injection call failed; the run ended after that single attempt.
    Failed(Error),
}

struct Inner {
    stop: Option<Sender<()>>,
    thread: Option<JoinHandle<()>>,
}

/// Periodic click worker.
///
/// `start` spawns a background thread that clicks at the configured target
/// once per interval until `stop` is called or an injection fails. The
/// run-ended callback fires on the worker thread after the transition back
/// to Idle; hand the outcome to the foreground through a channel rather
/// than touching shared interface state directly.
pub struct ClickWorker {
    running: Arc<AtomicBool>,
    inner: Mutex<Inner>,
}

impl Default for ClickWorker {
    fn default() -> Self {
        Self::new()
    }
}

impl ClickWorker {
    /// Create an idle worker.
    pub fn new() -> Self {
        Self {
            running: Arc::new(AtomicBool::new(false)),
            inner: Mutex::new(Inner {
                stop: None,
                thread: None,
            }),
        }
    }

    /// Start a click run.
    ///
    /// Rejects with [`Error::AlreadyRunning`] while a run is in progress,
    /// including the window where a stop has been requested but the previous
    /// run has not yet wound down. `on_end` is invoked exactly once when the
    /// run ends, with the outcome.
    pub fn start<I, F>(&self, config: ClickConfig, injector: I, on_end: F) -> Result<()>
    where
        I: InputInjector + 'static,
        F: FnOnce(RunOutcome) + Send + 'static,
    {
        if self.running.swap(true, Ordering::SeqCst) {
            return Err(Error::AlreadyRunning);
        }

        let mut inner = match self.inner.lock() {
            Ok(inner) => inner,
            Err(_) => {
                self.running.store(false, Ordering::SeqCst);
                return Err(Error::Thread("mutex poisoned".into()));
            }
        };

        // The previous run (if any) has already ended; its handle is stale.
        drop(inner.thread.take());

        let (stop_tx, stop_rx) = mpsc::channel();
        let running = self.running.clone();

        log::debug!(
            "starting click run at ({}, {}) every {:?}",
            config.x,
            config.y,
            config.interval
        );

        let spawned = std::thread::Builder::new()
            .name("clickbeat-worker".into())
            .spawn(move || {
                let mut injector = injector;
                let outcome = run_loop(&config, &mut injector, &stop_rx);
                match &outcome {
                    RunOutcome::Stopped => log::debug!("click run ended on request"),
                    RunOutcome::Failed(err) => log::error!("click run failed: {err}"),
                }
                running.store(false, Ordering::SeqCst);
                on_end(outcome);
            });

        match spawned {
            Ok(handle) => {
                inner.stop = Some(stop_tx);
                inner.thread = Some(handle);
                Ok(())
            }
            Err(err) => {
                self.running.store(false, Ordering::SeqCst);
                Err(Error::Thread(format!(
                    "failed to spawn worker thread: {err}"
                )))
            }
        }
    }

    /// Request cancellation of the current run.
    ///
    /// Returns immediately; the run ends asynchronously and announces itself
    /// through the `on_end` callback. Requesting stop while idle is a no-op.
    pub fn stop(&self) -> Result<()> {
        let inner = self
            .inner
            .lock()
            .map_err(|_| Error::Thread("mutex poisoned".into()))?;
        if let Some(stop) = inner.stop.as_ref() {
            // Ignore send errors: the run may have just ended on its own.
            let _ = stop.send(());
        }
        Ok(())
    }

    /// Check whether a run is currently in progress.
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }
}

impl Drop for ClickWorker {
    fn drop(&mut self) {
        let handle = match self.inner.lock() {
            Ok(mut inner) => {
                if let Some(stop) = inner.stop.take() {
                    let _ = stop.send(());
                }
                inner.thread.take()
            }
            Err(_) => None,
        };
        if let Some(handle) = handle {
            let _ = handle.join();
        }
    }
}

fn run_loop<I: InputInjector>(
    config: &ClickConfig,
    injector: &mut I,
    stop: &Receiver<()>,
) -> RunOutcome {
    loop {
        if let Err(err) = injector.click_at(config.button, config.x, config.y) {
            return RunOutcome::Failed(err);
        }

        match stop.recv_timeout(config.interval) {
            // Explicit stop, or the worker handle was dropped.
            Ok(()) | Err(RecvTimeoutError::Disconnected) => return RunOutcome::Stopped,
            Err(RecvTimeoutError::Timeout) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    #[derive(Clone, Default)]
    struct CountingInjector {
        clicks: Arc<Mutex<Vec<Instant>>>,
    }

    impl CountingInjector {
        fn timestamps(&self) -> Vec<Instant> {
            self.clicks.lock().unwrap().clone()
        }
    }

    impl InputInjector for CountingInjector {
        fn click_at(&mut self, _button: Button, _x: i32, _y: i32) -> Result<()> {
            self.clicks.lock().unwrap().push(Instant::now());
            Ok(())
        }
    }

    struct FailingInjector {
        attempts: Arc<Mutex<u32>>,
    }

    impl InputInjector for FailingInjector {
        fn click_at(&mut self, _button: Button, _x: i32, _y: i32) -> Result<()> {
            *self.attempts.lock().unwrap() += 1;
            Err(Error::Injection("synthetic failure".into()))
        }
    }

    fn config(interval: Duration) -> ClickConfig {
        ClickConfig::new(100, 200, interval).unwrap()
    }

    fn wait_for_outcome(rx: &Receiver<RunOutcome>) -> RunOutcome {
        rx.recv_timeout(Duration::from_secs(2))
            .expect("run did not end in time")
    }

    #[test]
    fn stop_before_the_first_interval_injects_at_most_one_click() {
        let worker = ClickWorker::new();
        let injector = CountingInjector::default();
        let (tx, rx) = mpsc::channel();

        worker
            .start(config(Duration::from_secs(1)), injector.clone(), move |o| {
                let _ = tx.send(o);
            })
            .unwrap();
        std::thread::sleep(Duration::from_millis(50));
        worker.stop().unwrap();

        assert!(matches!(wait_for_outcome(&rx), RunOutcome::Stopped));
        assert_eq!(injector.timestamps().len(), 1);
        assert!(!worker.is_running());
    }

    #[test]
    fn clicks_are_separated_by_at_least_the_interval() {
        struct NotifyingInjector {
            clicks: Arc<Mutex<Vec<Instant>>>,
            notify: Sender<()>,
        }

        impl InputInjector for NotifyingInjector {
            fn click_at(&mut self, _button: Button, _x: i32, _y: i32) -> Result<()> {
                self.clicks.lock().unwrap().push(Instant::now());
                let _ = self.notify.send(());
                Ok(())
            }
        }

        let interval = Duration::from_millis(100);
        let worker = ClickWorker::new();
        let clicks = Arc::new(Mutex::new(Vec::new()));
        let (click_tx, click_rx) = mpsc::channel();
        let injector = NotifyingInjector {
            clicks: clicks.clone(),
            notify: click_tx,
        };
        let (tx, rx) = mpsc::channel();

        worker
            .start(config(interval), injector, move |o| {
                let _ = tx.send(o);
            })
            .unwrap();
        for _ in 0..3 {
            click_rx
                .recv_timeout(Duration::from_secs(2))
                .expect("click did not arrive in time");
        }
        worker.stop().unwrap();
        assert!(matches!(wait_for_outcome(&rx), RunOutcome::Stopped));

        let timestamps = clicks.lock().unwrap().clone();
        assert!(timestamps.len() >= 3);
        for pair in timestamps.windows(2) {
            assert!(pair[1] - pair[0] >= interval);
        }
    }

    #[test]
    fn injection_failure_ends_the_run_after_one_attempt() {
        let worker = ClickWorker::new();
        let attempts = Arc::new(Mutex::new(0));
        let injector = FailingInjector {
            attempts: attempts.clone(),
        };
        let (tx, rx) = mpsc::channel();

        worker
            .start(config(Duration::from_millis(10)), injector, move |o| {
                let _ = tx.send(o);
            })
            .unwrap();

        match wait_for_outcome(&rx) {
            RunOutcome::Failed(Error::Injection(_)) => {}
            other => panic!("unexpected outcome: {other:?}"),
        }
        assert_eq!(*attempts.lock().unwrap(), 1);
        assert!(!worker.is_running());
    }

    #[test]
    fn stop_while_idle_is_a_noop() {
        let worker = ClickWorker::new();
        assert!(worker.stop().is_ok());
        assert!(!worker.is_running());
    }

    #[test]
    fn start_while_running_is_rejected() {
        let worker = ClickWorker::new();
        let (tx, _rx) = mpsc::channel();

        worker
            .start(
                config(Duration::from_secs(10)),
                CountingInjector::default(),
                move |o| {
                    let _ = tx.send(o);
                },
            )
            .unwrap();

        let second = worker.start(
            config(Duration::from_secs(10)),
            CountingInjector::default(),
            |_| {},
        );
        assert!(matches!(second, Err(Error::AlreadyRunning)));

        worker.stop().unwrap();
    }

    #[test]
    fn worker_can_run_again_after_a_run_ends() {
        let worker = ClickWorker::new();
        let injector = CountingInjector::default();

        for _ in 0..2 {
            let (tx, rx) = mpsc::channel();
            worker
                .start(config(Duration::from_secs(1)), injector.clone(), move |o| {
                    let _ = tx.send(o);
                })
                .unwrap();
            worker.stop().unwrap();
            assert!(matches!(wait_for_outcome(&rx), RunOutcome::Stopped));
        }

        assert_eq!(injector.timestamps().len(), 2);
    }
}
