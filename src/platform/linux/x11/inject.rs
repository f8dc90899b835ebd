//! X11 click injection using XTest.

use crate::config::Button;
use crate::error::{Error, Result};
use std::os::raw::c_int;
use std::ptr::null;
use x11::xlib;
use x11::xtest;

const TRUE: c_int = 1;
const FALSE: c_int = 0;

/// Open a display connection
fn open_display() -> Result<*mut xlib::Display> {
    let display = unsafe { xlib::XOpenDisplay(null()) };
    if display.is_null() {
        Err(Error::Injection("failed to open X display".into()))
    } else {
        Ok(display)
    }
}

/// Query the current cursor position on the root window.
pub fn cursor_position() -> Result<(i32, i32)> {
    let display = open_display()?;
    let screen = unsafe { xlib::XDefaultScreen(display) };
    let root = unsafe { xlib::XRootWindow(display, screen) };

    let mut root_return = 0u64;
    let mut child_return = 0u64;
    let mut root_x: c_int = 0;
    let mut root_y: c_int = 0;
    let mut win_x: c_int = 0;
    let mut win_y: c_int = 0;
    let mut mask: u32 = 0;

    let result = unsafe {
        xlib::XQueryPointer(
            display,
            root,
            &mut root_return,
            &mut child_return,
            &mut root_x,
            &mut root_y,
            &mut win_x,
            &mut win_y,
            &mut mask,
        )
    };

    unsafe { xlib::XCloseDisplay(display) };

    if result == FALSE {
        Err(Error::Injection("XQueryPointer failed".into()))
    } else {
        Ok((root_x, root_y))
    }
}

/// Get X11 button code
fn button_to_code(button: Button) -> u32 {
    match button {
        Button::Left => 1,
        Button::Middle => 2,
        Button::Right => 3,
    }
}

/// Move the pointer to an absolute coordinate and click the given button.
///
/// Motion, press, and release are issued on a single display connection
/// and flushed together so no real pointer motion can slip between them.
pub fn click_at(button: Button, x: i32, y: i32) -> Result<()> {
    let code = button_to_code(button);
    let display = open_display()?;

    let moved = unsafe { xtest::XTestFakeMotionEvent(display, -1, x, y, 0) };
    let pressed = unsafe { xtest::XTestFakeButtonEvent(display, code, TRUE, 0) };
    let released = unsafe { xtest::XTestFakeButtonEvent(display, code, FALSE, 0) };

    unsafe {
        xlib::XFlush(display);
        xlib::XSync(display, 0);
        xlib::XCloseDisplay(display);
    }

    if moved == 0 {
        Err(Error::Injection("XTestFakeMotionEvent failed".into()))
    } else if pressed == 0 || released == 0 {
        Err(Error::Injection("XTestFakeButtonEvent failed".into()))
    } else {
        Ok(())
    }
}
