//! Windows global key listening using a low-level keyboard hook.

use crate::error::{Error, Result};
use crate::hotkey::KeyEventHandler;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Sender;
use std::sync::{Arc, Mutex};
use windows::Win32::Foundation::{LPARAM, LRESULT, WPARAM};
use windows::Win32::System::Threading::GetCurrentThreadId;
use windows::Win32::UI::WindowsAndMessaging::{
    CallNextHookEx, GetMessageW, HC_ACTION, HHOOK, KBDLLHOOKSTRUCT, MSG, PostThreadMessageW,
    SetWindowsHookExW, UnhookWindowsHookEx, WH_KEYBOARD_LL, WM_KEYDOWN, WM_KEYUP, WM_QUIT,
    WM_SYSKEYDOWN, WM_SYSKEYUP,
};

use super::keycodes::keycode_to_key;

// Wrapper for HHOOK to make it Send + Sync
#[derive(Clone, Copy)]
struct SendableHHOOK(HHOOK);

// SAFETY: HHOOK is just a handle/pointer that the Windows API owns.
// It's safe to send between threads because Windows handles are thread-safe.
unsafe impl Send for SendableHHOOK {}
unsafe impl Sync for SendableHHOOK {}

/// Stored handler for the hook callback
static HANDLER: Mutex<Option<Box<dyn KeyEventHandler>>> = Mutex::new(None);

/// Flag to signal stopping
static STOP_FLAG: Mutex<Option<Arc<AtomicBool>>> = Mutex::new(None);

/// Installed keyboard hook
static KEYBOARD_HOOK: Mutex<Option<SendableHHOOK>> = Mutex::new(None);

/// Thread ID for message posting
static THREAD_ID: Mutex<u32> = Mutex::new(0);

/// Keyboard hook callback
unsafe extern "system" fn keyboard_callback(code: i32, wparam: WPARAM, lparam: LPARAM) -> LRESULT {
    if code == HC_ACTION as i32 {
        // Check stop flag
        if let Ok(guard) = STOP_FLAG.lock() {
            if let Some(ref flag) = *guard {
                if !flag.load(Ordering::SeqCst) {
                    if let Ok(thread_id) = THREAD_ID.lock() {
                        let _ =
                            unsafe { PostThreadMessageW(*thread_id, WM_QUIT, WPARAM(0), LPARAM(0)) };
                    }
                }
            }
        }

        let pressed = match wparam.0 as u32 {
            WM_KEYDOWN | WM_SYSKEYDOWN => Some(true),
            WM_KEYUP | WM_SYSKEYUP => Some(false),
            _ => None,
        };

        if let Some(pressed) = pressed {
            let vk = unsafe { (*(lparam.0 as *const KBDLLHOOKSTRUCT)).vkCode };
            let key = keycode_to_key(vk);
            if let Ok(guard) = HANDLER.lock() {
                if let Some(ref handler) = *guard {
                    handler.key_event(key, pressed);
                }
            }
        }
    }

    let hook = KEYBOARD_HOOK.lock().ok().and_then(|g| g.map(|h| h.0));
    unsafe { CallNextHookEx(hook, code, wparam, lparam) }
}

/// Run the global key listener (blocking).
///
/// Signals `ready` once the hook is installed, then pumps the message loop
/// until [`stop_key_listener`] posts a quit message or `running` goes false.
pub fn run_key_listener<H: KeyEventHandler + 'static>(
    running: &Arc<AtomicBool>,
    ready: &Sender<Result<()>>,
    handler: H,
) -> Result<()> {
    {
        let mut h = HANDLER
            .lock()
            .map_err(|_| Error::Thread("mutex poisoned".into()))?;
        *h = Some(Box::new(handler));
    }
    {
        let mut s = STOP_FLAG
            .lock()
            .map_err(|_| Error::Thread("mutex poisoned".into()))?;
        *s = Some(running.clone());
    }
    {
        let mut tid = THREAD_ID
            .lock()
            .map_err(|_| Error::Thread("mutex poisoned".into()))?;
        *tid = unsafe { GetCurrentThreadId() };
    }

    let keyboard_hook = unsafe {
        SetWindowsHookExW(WH_KEYBOARD_LL, Some(keyboard_callback), None, 0).map_err(|e| {
            Error::ListenerInstall(format!("failed to set keyboard hook: {e}"))
        })?
    };
    {
        let mut kh = KEYBOARD_HOOK
            .lock()
            .map_err(|_| Error::Thread("mutex poisoned".into()))?;
        *kh = Some(SendableHHOOK(keyboard_hook));
    }

    // Hook is live; unblock the caller.
    let _ = ready.send(Ok(()));

    let mut msg = MSG::default();
    unsafe {
        while GetMessageW(&mut msg, None, 0, 0).as_bool() {
            if let Ok(guard) = STOP_FLAG.lock() {
                if let Some(ref flag) = *guard {
                    if !flag.load(Ordering::SeqCst) {
                        break;
                    }
                }
            }
        }
    }

    unsafe {
        if let Ok(mut kh) = KEYBOARD_HOOK.lock() {
            if let Some(hook) = kh.take() {
                let _ = UnhookWindowsHookEx(hook.0);
            }
        }
    }

    {
        let mut h = HANDLER
            .lock()
            .map_err(|_| Error::Thread("mutex poisoned".into()))?;
        *h = None;
    }
    {
        let mut s = STOP_FLAG
            .lock()
            .map_err(|_| Error::Thread("mutex poisoned".into()))?;
        *s = None;
    }

    Ok(())
}

/// Stop the global key listener.
pub fn stop_key_listener() -> Result<()> {
    if let Ok(thread_id) = THREAD_ID.lock() {
        if *thread_id != 0 {
            unsafe {
                let _ = PostThreadMessageW(*thread_id, WM_QUIT, WPARAM(0), LPARAM(0));
            }
        }
    }
    Ok(())
}
