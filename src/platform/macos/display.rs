//! macOS display enumeration.

use crate::error::{Error, Result};
use crate::monitor::MonitorInfo;
use objc2_core_graphics::{
    CGDirectDisplayID, CGDisplayBounds, CGError, CGGetActiveDisplayList, CGMainDisplayID,
};

fn monitor_from_display(display_id: CGDirectDisplayID, index: u32) -> Option<MonitorInfo> {
    let bounds = CGDisplayBounds(display_id);
    let width = bounds.size.width as i32;
    let height = bounds.size.height as i32;
    if width <= 0 || height <= 0 {
        return None;
    }

    Some(MonitorInfo {
        id: index,
        name: format!("Display {index}"),
        x: bounds.origin.x as i32,
        y: bounds.origin.y as i32,
        width,
        height,
        is_primary: display_id == CGMainDisplayID(),
    })
}

pub fn displays() -> Result<Vec<MonitorInfo>> {
    let mut max_displays = 8usize;
    loop {
        let mut displays = vec![0; max_displays];
        let mut count: u32 = 0;
        let status = unsafe {
            CGGetActiveDisplayList(max_displays as u32, displays.as_mut_ptr(), &mut count)
        };
        if status != CGError::Success {
            return Err(Error::Enumeration(format!(
                "CGGetActiveDisplayList failed: {status:?}"
            )));
        }

        if (count as usize) <= max_displays {
            displays.truncate(count as usize);
            return Ok(displays
                .into_iter()
                .enumerate()
                .filter_map(|(idx, display_id)| {
                    monitor_from_display(display_id, (idx + 1) as u32)
                })
                .collect());
        }

        max_displays = count as usize;
    }
}
