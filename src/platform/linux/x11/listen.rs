//! X11 global key listening using XRecord.

use crate::error::{Error, Result};
use crate::hotkey::KeyEventHandler;
use std::os::raw::{c_char, c_int, c_uchar, c_ulong};
use std::ptr::null;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Sender;
use std::sync::{Arc, Mutex};
use x11::xlib;
use x11::xrecord;

use crate::platform::linux::keycodes::keycode_to_key;

/// Stored handler for the callback
static HANDLER: Mutex<Option<Box<dyn KeyEventHandler>>> = Mutex::new(None);

/// Flag to signal stopping
static STOP_FLAG: Mutex<Option<Arc<AtomicBool>>> = Mutex::new(None);

/// XRecord context for stopping the listener
static CONTEXT: Mutex<Option<xrecord::XRecordContext>> = Mutex::new(None);

const FALSE: c_int = 0;

/// XRecord data structure for events
#[repr(C)]
struct XRecordDatum {
    type_: u8,
    code: u8,
    _rest: u64,
}

/// XRecord callback
unsafe extern "C" fn record_callback(
    _null: *mut c_char,
    raw_data: *mut xrecord::XRecordInterceptData,
) {
    unsafe {
        let data = match raw_data.as_ref() {
            Some(d) => d,
            None => return,
        };

        if data.category != xrecord::XRecordFromServer {
            xrecord::XRecordFreeData(raw_data);
            return;
        }

        // Check stop flag
        if let Ok(guard) = STOP_FLAG.lock()
            && let Some(ref flag) = *guard
            && !flag.load(Ordering::SeqCst)
        {
            xrecord::XRecordFreeData(raw_data);
            return;
        }

        #[allow(clippy::cast_ptr_alignment)]
        let xdatum = match (data.data as *const XRecordDatum).as_ref() {
            Some(d) => d,
            None => {
                xrecord::XRecordFreeData(raw_data);
                return;
            }
        };

        let pressed = match xdatum.type_ as c_int {
            t if t == xlib::KeyPress => Some(true),
            t if t == xlib::KeyRelease => Some(false),
            _ => None,
        };

        if let Some(pressed) = pressed {
            let key = keycode_to_key(xdatum.code as u32);
            if let Ok(guard) = HANDLER.lock()
                && let Some(ref handler) = *guard
            {
                handler.key_event(key, pressed);
            }
        }

        xrecord::XRecordFreeData(raw_data);
    }
}

/// Run the global key listener (blocking).
///
/// Signals `ready` once the XRecord context is created, then blocks in
/// XRecordEnableContext until [`stop_key_listener`] disables the context
/// from a separate control connection.
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

    unsafe {
        let dpy_control = xlib::XOpenDisplay(null());
        if dpy_control.is_null() {
            return Err(Error::ListenerInstall("failed to open X display".into()));
        }

        let extension_name = c"RECORD";
        let extension = xlib::XInitExtension(dpy_control, extension_name.as_ptr());
        if extension.is_null() {
            xlib::XCloseDisplay(dpy_control);
            return Err(Error::ListenerInstall(
                "XRecord extension not available".into(),
            ));
        }

        // Record only key transitions
        let mut record_range: xrecord::XRecordRange = *xrecord::XRecordAllocRange();
        record_range.device_events.first = xlib::KeyPress as c_uchar;
        record_range.device_events.last = xlib::KeyRelease as c_uchar;

        let mut record_all_clients: c_ulong = xrecord::XRecordAllClients;
        let context = xrecord::XRecordCreateContext(
            dpy_control,
            0,
            &mut record_all_clients,
            1,
            &mut &mut record_range as *mut &mut xrecord::XRecordRange
                as *mut *mut xrecord::XRecordRange,
            1,
        );

        if context == 0 {
            xlib::XCloseDisplay(dpy_control);
            return Err(Error::ListenerInstall(
                "failed to create XRecord context".into(),
            ));
        }

        xlib::XSync(dpy_control, FALSE);

        // Store context for stop_key_listener to use
        {
            let mut c = CONTEXT
                .lock()
                .map_err(|_| Error::Thread("context mutex poisoned".into()))?;
            *c = Some(context);
        }

        // Context is live; unblock the caller before entering the
        // blocking record loop.
        let _ = ready.send(Ok(()));

        let result =
            xrecord::XRecordEnableContext(dpy_control, context, Some(record_callback), &mut 0);

        xrecord::XRecordDisableContext(dpy_control, context);
        xrecord::XRecordFreeContext(dpy_control, context);
        xlib::XCloseDisplay(dpy_control);

        if result == 0 {
            log::error!("XRecordEnableContext failed after installation");
        }
    }

    // Clean up handler and statics
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
        let mut c = CONTEXT
            .lock()
            .map_err(|_| Error::Thread("mutex poisoned".into()))?;
        *c = None;
    }

    Ok(())
}

/// Stop the global key listener.
pub fn stop_key_listener() -> Result<()> {
    // Signal the stop flag so the record callback drops further events
    if let Ok(guard) = STOP_FLAG.lock()
        && let Some(ref flag) = *guard
    {
        flag.store(false, Ordering::SeqCst);
    }

    // XRecordDisableContext needs to be called from a separate control
    // display connection to unblock XRecordEnableContext on the data one
    unsafe {
        if let Ok(ctx_guard) = CONTEXT.lock()
            && let Some(ctx) = *ctx_guard
        {
            let dpy_control = xlib::XOpenDisplay(null());
            if !dpy_control.is_null() {
                xrecord::XRecordDisableContext(dpy_control, ctx);
                xlib::XSync(dpy_control, FALSE);
                xlib::XCloseDisplay(dpy_control);
            }
        }
    }

    Ok(())
}
