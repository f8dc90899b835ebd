//! Global hotkey listener.
//!
//! Listens for a single designated key anywhere on the desktop and invokes a
//! toggle callback exactly once per physical press. Key auto-repeat is
//! suppressed: only released→pressed transitions fire the callback. The
//! callback runs on the listener thread; enqueue into the foreground loop
//! (see [`crate::channel`]) instead of mutating interface state from it.

use crate::error::{Error, Result};
use crate::keycode::Key;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

/// Trait for receiving raw key transitions from the platform listener.
pub trait KeyEventHandler: Send + Sync {
    /// Called for every key press (`pressed = true`, including auto-repeat)
    /// and release (`pressed = false`) observed by the global hook.
    fn key_event(&self, key: Key, pressed: bool);
}

/// Implement KeyEventHandler for closures.
impl<F> KeyEventHandler for F
where
    F: Fn(Key, bool) + Send + Sync,
{
    fn key_event(&self, key: Key, pressed: bool) {
        self(key, pressed);
    }
}

/// Collapses auto-repeat into discrete presses.
///
/// A key held down makes the OS deliver repeated press events; only the
/// transition out of the released state counts as a press.
struct Debounce {
    held: AtomicBool,
}

impl Debounce {
    fn new() -> Self {
        Self {
            held: AtomicBool::new(false),
        }
    }

    /// Feed one raw transition; returns true when it is a genuine press.
    fn observe(&self, pressed: bool) -> bool {
        if pressed {
            !self.held.swap(true, Ordering::SeqCst)
        } else {
            self.held.store(false, Ordering::SeqCst);
            false
        }
    }
}

/// Global listener for a single toggle hotkey.
///
/// `start` installs the platform key hook on a background thread and blocks
/// until the hook is confirmed installed, so a missing permission or absent
/// hook facility surfaces as an error right away instead of a hotkey that
/// silently does nothing.
pub struct HotkeyListener {
    key: Key,
    running: Arc<AtomicBool>,
    thread: Mutex<Option<JoinHandle<()>>>,
}

impl Default for HotkeyListener {
    fn default() -> Self {
        Self::new(Key::default())
    }
}

impl HotkeyListener {
    /// Create a listener for the given key. Nothing happens until `start`.
    pub fn new(key: Key) -> Self {
        Self {
            key,
            running: Arc::new(AtomicBool::new(false)),
            thread: Mutex::new(None),
        }
    }

    /// The key this listener toggles on.
    pub fn key(&self) -> Key {
        self.key
    }

    /// Start listening; `on_toggle` fires once per physical press of the key.
    ///
    /// Fails with [`Error::ListenerInstall`] or [`Error::PermissionDenied`]
    /// when the global hook cannot be installed.
    pub fn start<F>(&self, on_toggle: F) -> Result<()>
    where
        F: Fn() + Send + Sync + 'static,
    {
        if self.running.swap(true, Ordering::SeqCst) {
            return Err(Error::AlreadyRunning);
        }

        let hotkey = self.key;
        let debounce = Debounce::new();
        let handler = move |key: Key, pressed: bool| {
            if key == hotkey && debounce.observe(pressed) {
                on_toggle();
            }
        };

        let (ready_tx, ready_rx) = mpsc::channel();
        let running = self.running.clone();
        let spawned = std::thread::Builder::new()
            .name("clickbeat-hotkey".into())
            .spawn(move || {
                if let Err(err) = crate::platform::run_key_listener(&running, &ready_tx, handler) {
                    // Install failed before the ready signal was sent;
                    // forward the error to the blocked start() call.
                    let _ = ready_tx.send(Err(err));
                }
                running.store(false, Ordering::SeqCst);
            });

        let handle = match spawned {
            Ok(handle) => handle,
            Err(err) => {
                self.running.store(false, Ordering::SeqCst);
                return Err(Error::Thread(format!(
                    "failed to spawn listener thread: {err}"
                )));
            }
        };

        match ready_rx.recv() {
            Ok(Ok(())) => {
                log::debug!("hotkey listener installed for {:?}", self.key);
                *self
                    .thread
                    .lock()
                    .map_err(|_| Error::Thread("mutex poisoned".into()))? = Some(handle);
                Ok(())
            }
            Ok(Err(err)) => {
                let _ = handle.join();
                Err(err)
            }
            Err(_) => {
                let _ = handle.join();
                self.running.store(false, Ordering::SeqCst);
                Err(Error::ListenerInstall(
                    "listener thread exited before signaling readiness".into(),
                ))
            }
        }
    }

    /// Stop listening and wait for the listener thread to finish.
    pub fn stop(&self) -> Result<()> {
        if !self.running.swap(false, Ordering::SeqCst) {
            return Err(Error::NotRunning);
        }

        crate::platform::stop_key_listener()?;

        if let Some(handle) = self
            .thread
            .lock()
            .map_err(|_| Error::Thread("mutex poisoned".into()))?
            .take()
        {
            handle
                .join()
                .map_err(|_| Error::Thread("failed to join listener thread".into()))?;
        }

        log::debug!("hotkey listener stopped");
        Ok(())
    }

    /// Check if the listener is currently installed.
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }
}

impl Drop for HotkeyListener {
    fn drop(&mut self) {
        if self.is_running() {
            let _ = self.stop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debounce_fires_only_on_release_to_press_transitions() {
        let debounce = Debounce::new();
        assert!(debounce.observe(true));
        // Auto-repeat: the key is still held.
        assert!(!debounce.observe(true));
        assert!(!debounce.observe(true));
        assert!(!debounce.observe(false));
        assert!(debounce.observe(true));
    }

    #[test]
    fn handler_filters_to_the_bound_key() {
        let fired = Arc::new(AtomicBool::new(false));
        let fired_clone = fired.clone();
        let debounce = Debounce::new();
        let hotkey = Key::F8;
        let handler = move |key: Key, pressed: bool| {
            if key == hotkey && debounce.observe(pressed) {
                fired_clone.store(true, Ordering::SeqCst);
            }
        };

        handler.key_event(Key::KeyA, true);
        handler.key_event(Key::KeyA, false);
        assert!(!fired.load(Ordering::SeqCst));

        handler.key_event(Key::F8, true);
        assert!(fired.load(Ordering::SeqCst));
    }

    #[test]
    fn stop_without_start_reports_not_running() {
        let listener = HotkeyListener::new(Key::F8);
        assert!(matches!(listener.stop(), Err(Error::NotRunning)));
        assert!(!listener.is_running());
    }
}
