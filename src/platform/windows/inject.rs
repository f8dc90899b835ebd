//! Windows click injection using SendInput.

use crate::config::Button;
use crate::error::{Error, Result};
use std::mem::size_of;
use windows::Win32::Foundation::POINT;
use windows::Win32::UI::Input::KeyboardAndMouse::{
    INPUT, INPUT_0, INPUT_MOUSE, MOUSE_EVENT_FLAGS, MOUSEEVENTF_ABSOLUTE, MOUSEEVENTF_LEFTDOWN,
    MOUSEEVENTF_LEFTUP, MOUSEEVENTF_MIDDLEDOWN, MOUSEEVENTF_MIDDLEUP, MOUSEEVENTF_MOVE,
    MOUSEEVENTF_RIGHTDOWN, MOUSEEVENTF_RIGHTUP, MOUSEEVENTF_VIRTUALDESK, MOUSEINPUT, SendInput,
};
use windows::Win32::UI::WindowsAndMessaging::{
    GetCursorPos, GetSystemMetrics, SM_CXVIRTUALSCREEN, SM_CYVIRTUALSCREEN, SM_XVIRTUALSCREEN,
    SM_YVIRTUALSCREEN,
};

/// Query the current cursor position in virtual-desktop coordinates.
pub fn cursor_position() -> Result<(i32, i32)> {
    let mut point = POINT::default();
    unsafe { GetCursorPos(&mut point) }
        .map_err(|err| Error::Injection(format!("GetCursorPos failed: {err}")))?;
    Ok((point.x, point.y))
}

/// Move the cursor to an absolute coordinate and click the given button.
///
/// The move and the button-down share one injected event so the press lands
/// exactly on the target even if the physical mouse moves concurrently.
pub fn click_at(button: Button, x: i32, y: i32) -> Result<()> {
    let (nx, ny) = normalized_virtual_desktop(x, y)?;
    let (down, up) = match button {
        Button::Left => (MOUSEEVENTF_LEFTDOWN, MOUSEEVENTF_LEFTUP),
        Button::Right => (MOUSEEVENTF_RIGHTDOWN, MOUSEEVENTF_RIGHTUP),
        Button::Middle => (MOUSEEVENTF_MIDDLEDOWN, MOUSEEVENTF_MIDDLEUP),
    };

    let base = MOUSEEVENTF_MOVE | MOUSEEVENTF_ABSOLUTE | MOUSEEVENTF_VIRTUALDESK;
    send_mouse_event(base | down, nx, ny)?;
    send_mouse_event(base | up, nx, ny)
}

/// Send one mouse event through SendInput.
fn send_mouse_event(flags: MOUSE_EVENT_FLAGS, dx: i32, dy: i32) -> Result<()> {
    let input = INPUT {
        r#type: INPUT_MOUSE,
        Anonymous: INPUT_0 {
            mi: MOUSEINPUT {
                dx,
                dy,
                mouseData: 0,
                dwFlags: flags,
                time: 0,
                dwExtraInfo: 0,
            },
        },
    };

    let inputs = [input];
    let result = unsafe { SendInput(&inputs, size_of::<INPUT>() as i32) };

    if result != 1 {
        Err(Error::Injection("SendInput failed for mouse event".into()))
    } else {
        Ok(())
    }
}

/// Map a virtual-desktop coordinate to SendInput's 0..=65535 range.
fn normalized_virtual_desktop(x: i32, y: i32) -> Result<(i32, i32)> {
    let (vx, vy, width, height) = unsafe {
        (
            GetSystemMetrics(SM_XVIRTUALSCREEN),
            GetSystemMetrics(SM_YVIRTUALSCREEN),
            GetSystemMetrics(SM_CXVIRTUALSCREEN),
            GetSystemMetrics(SM_CYVIRTUALSCREEN),
        )
    };

    if width <= 0 || height <= 0 {
        return Err(Error::Injection(
            "unable to determine virtual desktop dimensions".into(),
        ));
    }

    Ok((normalize(x, vx, width), normalize(y, vy, height)))
}

fn normalize(value: i32, start: i32, size: i32) -> i32 {
    if size <= 1 {
        return 0;
    }
    ((value - start) as i64 * 65535 / (size - 1) as i64) as i32
}
