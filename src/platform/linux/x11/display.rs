//! X11 display enumeration.

use crate::error::{Error, Result};
use crate::monitor::MonitorInfo;
use std::ptr::null;
use x11::xinerama;
use x11::xlib;

pub fn displays() -> Result<Vec<MonitorInfo>> {
    with_display(|display| {
        let monitors = unsafe { xinerama_monitors(display) };
        if !monitors.is_empty() {
            return Ok(monitors);
        }

        // No Xinerama (single head, or extension missing): report the
        // whole root screen as one monitor.
        unsafe {
            let screen = xlib::XDefaultScreen(display);
            let width = xlib::XDisplayWidth(display, screen);
            let height = xlib::XDisplayHeight(display, screen);
            if width <= 0 || height <= 0 {
                return Err(Error::Enumeration("X11 reported an empty screen".into()));
            }

            Ok(vec![MonitorInfo {
                id: 1,
                name: "X11 screen".into(),
                x: 0,
                y: 0,
                width,
                height,
                is_primary: true,
            }])
        }
    })
}

unsafe fn xinerama_monitors(display: *mut xlib::Display) -> Vec<MonitorInfo> {
    unsafe {
        if xinerama::XineramaIsActive(display) == 0 {
            return Vec::new();
        }

        let mut count: i32 = 0;
        let screens = xinerama::XineramaQueryScreens(display, &mut count);
        if screens.is_null() || count <= 0 {
            return Vec::new();
        }

        let mut monitors = Vec::with_capacity(count as usize);
        for index in 0..count {
            let screen = *screens.offset(index as isize);
            if screen.width <= 0 || screen.height <= 0 {
                continue;
            }
            let id = index as u32 + 1;
            monitors.push(MonitorInfo {
                id,
                name: format!("Screen {index}"),
                x: screen.x_org as i32,
                y: screen.y_org as i32,
                width: screen.width as i32,
                height: screen.height as i32,
                // Xinerama has no primary flag; screen 0 holds that role.
                is_primary: index == 0,
            });
        }
        xlib::XFree(screens as *mut _);
        monitors
    }
}

fn with_display<T>(f: impl FnOnce(*mut xlib::Display) -> Result<T>) -> Result<T> {
    unsafe {
        let display = xlib::XOpenDisplay(null());
        if display.is_null() {
            return Err(Error::Enumeration("XOpenDisplay failed".into()));
        }
        let result = f(display);
        xlib::XCloseDisplay(display);
        result
    }
}
