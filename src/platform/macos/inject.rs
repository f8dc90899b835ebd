//! macOS click injection using CGEvent.

#![allow(unused_unsafe)]

use crate::config::Button;
use crate::error::{Error, Result};
use objc2_core_foundation::CGPoint;
use objc2_core_graphics::{
    CGEvent, CGEventField, CGEventSource, CGEventSourceStateID, CGEventTapLocation, CGEventType,
    CGMouseButton,
};

/// Query the current cursor position in screen coordinates.
pub fn cursor_position() -> Result<(i32, i32)> {
    unsafe {
        let source = CGEventSource::new(CGEventSourceStateID::HIDSystemState)
            .ok_or_else(|| Error::Injection("failed to create event source".into()))?;
        let event = CGEvent::new(Some(&source))
            .ok_or_else(|| Error::Injection("failed to create event".into()))?;
        let point = CGEvent::location(Some(&event));
        Ok((point.x as i32, point.y as i32))
    }
}

fn button_to_cg_button(button: Button) -> CGMouseButton {
    match button {
        Button::Left => CGMouseButton::Left,
        Button::Right => CGMouseButton::Right,
        Button::Middle => CGMouseButton::Center,
    }
}

fn post_button_event(event_type: CGEventType, button: Button, point: CGPoint) -> Result<()> {
    unsafe {
        let source = CGEventSource::new(CGEventSourceStateID::HIDSystemState)
            .ok_or_else(|| Error::Injection("failed to create event source".into()))?;
        let event = CGEvent::new_mouse_event(
            Some(&source),
            event_type,
            point,
            button_to_cg_button(button),
        )
        .ok_or_else(|| Error::Injection("failed to create mouse event".into()))?;

        // The middle button travels as an "other" event plus a button number.
        if button == Button::Middle {
            CGEvent::set_integer_value_field(Some(&event), CGEventField::MouseEventButtonNumber, 2);
        }

        CGEvent::post(CGEventTapLocation::HIDEventTap, Some(&event));
    }
    Ok(())
}

/// Move the cursor to a screen coordinate and click the given button.
///
/// The down event carries the target point, so the press lands on the
/// target without a separate move event.
pub fn click_at(button: Button, x: i32, y: i32) -> Result<()> {
    let point = CGPoint {
        x: x as f64,
        y: y as f64,
    };
    let (down, up) = match button {
        Button::Left => (CGEventType::LeftMouseDown, CGEventType::LeftMouseUp),
        Button::Right => (CGEventType::RightMouseDown, CGEventType::RightMouseUp),
        Button::Middle => (CGEventType::OtherMouseDown, CGEventType::OtherMouseUp),
    };

    post_button_event(down, button, point)?;
    post_button_event(up, button, point)
}
