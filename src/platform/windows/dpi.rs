//! Windows process DPI awareness escalation.

use crate::dpi::DpiMode;
use windows::Win32::Foundation::E_ACCESSDENIED;
use windows::Win32::UI::HiDpi::{
    DPI_AWARENESS_CONTEXT_PER_MONITOR_AWARE_V2, PROCESS_PER_MONITOR_DPI_AWARE,
    SetProcessDpiAwareness, SetProcessDpiAwarenessContext,
};
use windows::Win32::UI::WindowsAndMessaging::SetProcessDPIAware;

/// Set the best DPI awareness mode available for the current process.
///
/// Awareness can only be set once per process; `E_ACCESSDENIED` from the
/// v1 API means something earlier already set it, which is as good as
/// success for click targeting.
pub fn set_dpi_awareness() -> DpiMode {
    unsafe {
        if SetProcessDpiAwarenessContext(DPI_AWARENESS_CONTEXT_PER_MONITOR_AWARE_V2).is_ok() {
            return DpiMode::PerMonitorV2;
        }

        match SetProcessDpiAwareness(PROCESS_PER_MONITOR_DPI_AWARE) {
            Ok(()) => return DpiMode::PerMonitor,
            Err(err) if err.code() == E_ACCESSDENIED => return DpiMode::PerMonitor,
            Err(_) => {}
        }

        if SetProcessDPIAware().as_bool() {
            return DpiMode::System;
        }
    }

    log::warn!("failed to set any DPI awareness mode; click targets may be virtualized");
    DpiMode::Unavailable
}
