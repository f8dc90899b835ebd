//! macOS global key listening using CGEventTap.

#![allow(improper_ctypes_definitions)]
#![allow(unsafe_op_in_unsafe_fn)]

use crate::error::{Error, Result};
use crate::hotkey::KeyEventHandler;
use crate::keycode::Key;
use core::ptr::NonNull;
use objc2_core_foundation::{CFMachPort, CFRunLoop, kCFRunLoopCommonModes};
use objc2_core_graphics::{
    CGEvent, CGEventField, CGEventFlags, CGEventTapCallBack, CGEventTapLocation, CGEventTapOptions,
    CGEventTapPlacement, CGEventTapProxy, CGEventType, kCGEventMaskForAllEvents,
};
use objc2_foundation::NSAutoreleasePool;
use std::ffi::c_void;
use std::ptr::null_mut;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Sender;
use std::sync::{Arc, Mutex};

use super::keycodes::keycode_to_key;

/// Stored handler for the tap callback
static HANDLER: Mutex<Option<Box<dyn KeyEventHandler>>> = Mutex::new(None);

/// Flag to signal the run loop to stop
static STOP_FLAG: Mutex<Option<Arc<AtomicBool>>> = Mutex::new(None);

/// Last seen flags for detecting modifier key press/release
static LAST_FLAGS: Mutex<CGEventFlags> = Mutex::new(CGEventFlags(0));

/// Wrapper for raw pointer to CFMachPort that implements Send + Sync
/// Safety: The pointer is only accessed from the callback which runs on the same thread
struct TapPointer(*const CFMachPort);
unsafe impl Send for TapPointer {}
unsafe impl Sync for TapPointer {}

/// Stored event tap for timeout recovery
static EVENT_TAP: Mutex<Option<TapPointer>> = Mutex::new(None);

/// Wrapper for raw pointer to the listener thread's run loop
/// Safety: CFRunLoop is thread-safe to signal; the loop outlives the pointer
struct RunLoopPointer(*const CFRunLoop);
unsafe impl Send for RunLoopPointer {}
unsafe impl Sync for RunLoopPointer {}

/// Run loop of the listener thread, for stop_key_listener
static RUN_LOOP: Mutex<Option<RunLoopPointer>> = Mutex::new(None);

#[link(name = "Cocoa", kind = "framework")]
unsafe extern "C" {}

/// Detect a press/release transition for one modifier mask.
fn flag_transition(last: &mut CGEventFlags, now: CGEventFlags, mask: CGEventFlags) -> Option<bool> {
    let was = last.contains(mask);
    let is = now.contains(mask);
    if was != is {
        *last = now;
        Some(is)
    } else {
        None
    }
}

/// Dispatch one key transition to the stored handler.
fn dispatch(key: Key, pressed: bool) {
    if let Ok(guard) = HANDLER.lock() {
        if let Some(ref handler) = *guard {
            handler.key_event(key, pressed);
        }
    }
}

/// The CGEventTap callback
unsafe extern "C-unwind" fn event_callback(
    _proxy: CGEventTapProxy,
    event_type: CGEventType,
    cg_event: NonNull<CGEvent>,
    _user_info: *mut c_void,
) -> *mut CGEvent {
    // Check if we should stop
    if let Ok(guard) = STOP_FLAG.lock()
        && let Some(ref flag) = *guard
        && !flag.load(Ordering::SeqCst)
    {
        if let Some(run_loop) = CFRunLoop::current() {
            run_loop.stop();
        }
        return cg_event.as_ptr();
    }

    // macOS disables the tap if the callback takes too long; re-enable it
    if event_type == CGEventType::TapDisabledByTimeout
        || event_type == CGEventType::TapDisabledByUserInput
    {
        if let Ok(guard) = EVENT_TAP.lock()
            && let Some(ref tap_ptr) = *guard
        {
            log::warn!("event tap was disabled (timeout or user input), re-enabling...");
            if !tap_ptr.0.is_null() {
                CGEvent::tap_enable(&*tap_ptr.0, true);
            }
        }
        return cg_event.as_ptr();
    }

    match event_type {
        CGEventType::KeyDown | CGEventType::KeyUp => {
            let code = CGEvent::integer_value_field(
                Some(cg_event.as_ref()),
                CGEventField::KeyboardEventKeycode,
            );
            let key = keycode_to_key(code as u16);
            dispatch(key, event_type == CGEventType::KeyDown);
        }

        // Modifier keys never produce KeyDown/KeyUp; their state rides on
        // the event flags instead.
        CGEventType::FlagsChanged => {
            let code = CGEvent::integer_value_field(
                Some(cg_event.as_ref()),
                CGEventField::KeyboardEventKeycode,
            );
            let key = keycode_to_key(code as u16);
            let flags = CGEvent::flags(Some(cg_event.as_ref()));

            if let Ok(mut last_flags) = LAST_FLAGS.lock() {
                for mask in [
                    CGEventFlags::MaskShift,
                    CGEventFlags::MaskControl,
                    CGEventFlags::MaskAlternate,
                    CGEventFlags::MaskCommand,
                ] {
                    if let Some(pressed) = flag_transition(&mut *last_flags, flags, mask) {
                        dispatch(key, pressed);
                        break;
                    }
                }
            }
        }

        _ => {}
    }

    cg_event.as_ptr()
}

/// Run the global key listener (blocking).
///
/// Signals `ready` once the event tap is installed and enabled, then runs
/// the thread's CFRunLoop until [`stop_key_listener`] stops it.
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
        let mut f = LAST_FLAGS
            .lock()
            .map_err(|_| Error::Thread("mutex poisoned".into()))?;
        *f = CGEventFlags(0);
    }

    unsafe {
        let _pool = NSAutoreleasePool::new();

        let callback: CGEventTapCallBack = Some(event_callback);
        let tap = CGEvent::tap_create(
            CGEventTapLocation::HIDEventTap,
            CGEventTapPlacement::HeadInsertEventTap,
            CGEventTapOptions::ListenOnly,
            kCGEventMaskForAllEvents.into(),
            callback,
            null_mut(),
        )
        .ok_or_else(|| {
            Error::PermissionDenied(
                "failed to create event tap; make sure Accessibility permissions are granted"
                    .into(),
            )
        })?;

        // Store the tap reference for timeout recovery
        {
            let mut tap_guard = EVENT_TAP
                .lock()
                .map_err(|_| Error::Thread("mutex poisoned".into()))?;
            *tap_guard = Some(TapPointer(&*tap as *const CFMachPort));
        }

        let source = CFMachPort::new_run_loop_source(None, Some(&tap), 0)
            .ok_or_else(|| Error::ListenerInstall("failed to create run loop source".into()))?;

        let current_loop = CFRunLoop::current()
            .ok_or_else(|| Error::ListenerInstall("failed to get current run loop".into()))?;

        current_loop.add_source(Some(&source), kCFRunLoopCommonModes);

        {
            let mut rl = RUN_LOOP
                .lock()
                .map_err(|_| Error::Thread("mutex poisoned".into()))?;
            *rl = Some(RunLoopPointer(&*current_loop as *const CFRunLoop));
        }

        CGEvent::tap_enable(&tap, true);

        // Tap is live; unblock the caller.
        let _ = ready.send(Ok(()));

        CFRunLoop::run();
    }

    // Clean up
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
    {
        let mut t = EVENT_TAP
            .lock()
            .map_err(|_| Error::Thread("mutex poisoned".into()))?;
        *t = None;
    }
    {
        let mut rl = RUN_LOOP
            .lock()
            .map_err(|_| Error::Thread("mutex poisoned".into()))?;
        *rl = None;
    }

    Ok(())
}

/// Stop the global key listener.
pub fn stop_key_listener() -> Result<()> {
    if let Ok(guard) = RUN_LOOP.lock()
        && let Some(ref run_loop) = *guard
        && !run_loop.0.is_null()
    {
        unsafe {
            (*run_loop.0).stop();
        }
    }
    Ok(())
}
