//! Monitor-relative to absolute coordinate conversion.
//!
//! A monitor-relative coordinate is an offset from a display's top-left
//! corner; an absolute coordinate lives in the single desktop space spanning
//! all displays. Conversion is plain integer arithmetic against the selected
//! monitor's origin. Validation is a separate operation and never clamps:
//! an out-of-bounds request is an error the caller must resolve.

use crate::error::{Error, Result};
use crate::monitor::MonitorInfo;

/// Convert a monitor-relative coordinate to an absolute desktop coordinate.
///
/// Pure arithmetic; does not check bounds. Run [`validate_bounds`] first if
/// the offsets came from user input.
pub fn to_absolute(monitor: &MonitorInfo, rel_x: i32, rel_y: i32) -> (i32, i32) {
    (monitor.x + rel_x, monitor.y + rel_y)
}

/// Convert an absolute desktop coordinate to an offset from a monitor's
/// origin. Inverse of [`to_absolute`]; does not check containment.
pub fn to_relative(monitor: &MonitorInfo, abs_x: i32, abs_y: i32) -> (i32, i32) {
    (abs_x - monitor.x, abs_y - monitor.y)
}

/// Check that a relative coordinate lies within the monitor.
///
/// Rejects with [`Error::OutOfRange`] when `rel_x < 0`, `rel_x >= width`,
/// or the analogous condition holds for `rel_y`.
pub fn validate_bounds(monitor: &MonitorInfo, rel_x: i32, rel_y: i32) -> Result<()> {
    if rel_x < 0 || rel_x >= monitor.width || rel_y < 0 || rel_y >= monitor.height {
        return Err(Error::OutOfRange {
            x: rel_x,
            y: rel_y,
            width: monitor.width,
            height: monitor.height,
        });
    }
    Ok(())
}

/// Find the monitor containing an absolute point and the point's offset
/// from that monitor's origin.
///
/// First match wins; monitors should not overlap in a well-formed desktop
/// configuration. Returns `None` when the point is outside every monitor.
pub fn locate(monitors: &[MonitorInfo], abs_x: i32, abs_y: i32) -> Option<(&MonitorInfo, i32, i32)> {
    monitors
        .iter()
        .find(|monitor| monitor.contains(abs_x, abs_y))
        .map(|monitor| {
            let (rel_x, rel_y) = to_relative(monitor, abs_x, abs_y);
            (monitor, rel_x, rel_y)
        })
}

/// Capture the current cursor position as a monitor-relative coordinate.
///
/// Queries the cursor, then locates the containing monitor in the supplied
/// snapshot. Returns `None` when the cursor is outside every known monitor
/// (stale snapshot, or a display was just unplugged).
pub fn capture_cursor(monitors: &[MonitorInfo]) -> Result<Option<(&MonitorInfo, i32, i32)>> {
    let (abs_x, abs_y) = crate::monitor::cursor_position()?;
    Ok(locate(monitors, abs_x, abs_y))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn monitor(id: u32, x: i32, y: i32, width: i32, height: i32, primary: bool) -> MonitorInfo {
        MonitorInfo {
            id,
            name: format!("Monitor {id}"),
            x,
            y,
            width,
            height,
            is_primary: primary,
        }
    }

    #[test]
    fn to_absolute_on_primary_monitor() {
        let m = monitor(1, 0, 0, 1920, 1080, true);
        assert_eq!(to_absolute(&m, 960, 540), (960, 540));
        assert!(validate_bounds(&m, 960, 540).is_ok());
    }

    #[test]
    fn to_absolute_on_secondary_monitor() {
        let m = monitor(2, 1920, 0, 1920, 1080, false);
        assert_eq!(to_absolute(&m, 960, 540), (2880, 540));
    }

    #[test]
    fn to_absolute_with_negative_origin() {
        let m = monitor(2, -1920, 0, 1920, 1080, false);
        assert_eq!(to_absolute(&m, 300, 200), (-1620, 200));
    }

    #[test]
    fn validate_bounds_rejects_out_of_range() {
        let m = monitor(1, 0, 0, 1920, 1080, true);
        for (rel_x, rel_y) in [(-1, 0), (0, -1), (1920, 10), (10, 1080), (2000, 0)] {
            let err = validate_bounds(&m, rel_x, rel_y).unwrap_err();
            assert!(matches!(err, Error::OutOfRange { .. }), "({rel_x}, {rel_y})");
        }
    }

    #[test]
    fn validate_bounds_accepts_edges() {
        let m = monitor(1, 0, 0, 1920, 1080, true);
        assert!(validate_bounds(&m, 0, 0).is_ok());
        assert!(validate_bounds(&m, 1919, 1079).is_ok());
    }

    #[test]
    fn relative_round_trips_through_absolute() {
        let m = monitor(2, 1920, -200, 2560, 1440, false);
        for (rel_x, rel_y) in [(0, 0), (1, 1), (2559, 1439), (1280, 720)] {
            let (abs_x, abs_y) = to_absolute(&m, rel_x, rel_y);
            assert_eq!(to_relative(&m, abs_x, abs_y), (rel_x, rel_y));
        }
    }

    #[test]
    fn locate_picks_the_containing_monitor() {
        let monitors = vec![
            monitor(1, 0, 0, 1920, 1080, true),
            monitor(2, -1920, 0, 1920, 1080, false),
        ];

        let (found, rel_x, rel_y) = locate(&monitors, -50, 500).unwrap();
        assert_eq!(found.id, 2);
        assert_eq!((rel_x, rel_y), (1870, 500));

        let (found, rel_x, rel_y) = locate(&monitors, 10, 10).unwrap();
        assert_eq!(found.id, 1);
        assert_eq!((rel_x, rel_y), (10, 10));
    }

    #[test]
    fn locate_misses_points_outside_every_monitor() {
        let monitors = vec![monitor(1, 0, 0, 1920, 1080, true)];
        assert!(locate(&monitors, 5000, 5000).is_none());
        assert!(locate(&monitors, -1, 0).is_none());
    }
}
