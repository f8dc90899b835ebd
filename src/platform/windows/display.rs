//! Windows display enumeration.

use crate::error::{Error, Result};
use crate::monitor::MonitorInfo;
use std::mem::size_of;
use windows::Win32::Foundation::{BOOL, LPARAM, RECT};
use windows::Win32::Graphics::Gdi::{
    EnumDisplayMonitors, GetMonitorInfoW, HDC, HMONITOR, MONITORINFO, MONITORINFOEXW,
};
use windows::Win32::UI::WindowsAndMessaging::MONITORINFOF_PRIMARY;

pub fn displays() -> Result<Vec<MonitorInfo>> {
    let mut context = MonitorContext {
        monitors: Vec::new(),
        next_id: 1,
    };

    let ok = unsafe {
        EnumDisplayMonitors(
            Some(HDC(std::ptr::null_mut())),
            None,
            Some(monitor_enum_proc),
            LPARAM(&mut context as *mut _ as isize),
        )
    };

    if ok.as_bool() && !context.monitors.is_empty() {
        Ok(context.monitors)
    } else {
        Err(Error::Enumeration("EnumDisplayMonitors failed".into()))
    }
}

struct MonitorContext {
    monitors: Vec<MonitorInfo>,
    next_id: u32,
}

unsafe extern "system" fn monitor_enum_proc(
    hmonitor: HMONITOR,
    _hdc: HDC,
    _lprc: *mut RECT,
    lparam: LPARAM,
) -> BOOL {
    let context = unsafe { &mut *(lparam.0 as *mut MonitorContext) };
    let info = monitor_info(hmonitor);
    if let Some(monitor) = monitor_from_info(&info, context.next_id) {
        context.next_id += 1;
        context.monitors.push(monitor);
    }
    BOOL(1)
}

fn monitor_info(hmonitor: HMONITOR) -> MONITORINFOEXW {
    let mut info = MONITORINFOEXW {
        monitorInfo: MONITORINFO {
            cbSize: size_of::<MONITORINFOEXW>() as u32,
            ..Default::default()
        },
        ..Default::default()
    };
    unsafe {
        let _ = GetMonitorInfoW(hmonitor, &mut info as *mut _ as *mut MONITORINFO);
    }
    info
}

fn monitor_from_info(info: &MONITORINFOEXW, id: u32) -> Option<MonitorInfo> {
    let rect = info.monitorInfo.rcMonitor;
    let width = rect.right - rect.left;
    let height = rect.bottom - rect.top;
    if width <= 0 || height <= 0 {
        return None;
    }

    let name = String::from_utf16_lossy(&info.szDevice)
        .trim_end_matches('\0')
        .to_string();
    let name = if name.is_empty() {
        format!("Monitor {id}")
    } else {
        name
    };

    Some(MonitorInfo {
        id,
        name,
        x: rect.left,
        y: rect.top,
        width,
        height,
        is_primary: (info.monitorInfo.dwFlags & MONITORINFOF_PRIMARY) != 0,
    })
}
