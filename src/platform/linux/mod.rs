//! Linux platform implementation.
//!
//! Uses X11 throughout: Xinerama for monitor enumeration, XTest for click
//! injection, and XRecord for the global key listener. Wayland sessions
//! need XWayland for any of this to work.

#[cfg(feature = "x11")]
mod keycodes;

#[cfg(feature = "x11")]
mod x11;

#[cfg(feature = "x11")]
pub use x11::*;

// If the x11 feature is disabled, provide stub implementations
#[cfg(not(feature = "x11"))]
mod stub {
    use crate::config::Button;
    use crate::error::{Error, Result};
    use crate::hotkey::KeyEventHandler;
    use crate::monitor::MonitorInfo;
    use std::sync::Arc;
    use std::sync::atomic::AtomicBool;
    use std::sync::mpsc::Sender;

    pub fn displays() -> Result<Vec<MonitorInfo>> {
        Err(Error::NotSupported(
            "no Linux backend enabled; enable the 'x11' feature".into(),
        ))
    }

    pub fn cursor_position() -> Result<(i32, i32)> {
        Err(Error::NotSupported(
            "no Linux backend enabled; enable the 'x11' feature".into(),
        ))
    }

    pub fn click_at(_button: Button, _x: i32, _y: i32) -> Result<()> {
        Err(Error::NotSupported(
            "no Linux backend enabled; enable the 'x11' feature".into(),
        ))
    }

    pub fn run_key_listener<H: KeyEventHandler + 'static>(
        _running: &Arc<AtomicBool>,
        _ready: &Sender<Result<()>>,
        _handler: H,
    ) -> Result<()> {
        Err(Error::NotSupported(
            "no Linux backend enabled; enable the 'x11' feature".into(),
        ))
    }

    pub fn stop_key_listener() -> Result<()> {
        Ok(())
    }
}

#[cfg(not(feature = "x11"))]
pub use stub::*;
