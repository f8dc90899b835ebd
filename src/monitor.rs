//! Monitor enumeration and geometry.

use crate::error::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Information about one attached display.
///
/// A `MonitorInfo` is a snapshot: the list is recreated wholesale on every
/// call to [`monitors`], and instances are never mutated after construction.
/// Identifiers are stable within one enumeration but not guaranteed stable
/// across hardware changes.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MonitorInfo {
    /// Identifier assigned in enumeration order, starting at 1.
    pub id: u32,
    /// Human-readable name (platform device name where available).
    pub name: String,
    /// Absolute X of the monitor's top-left corner in the desktop space.
    pub x: i32,
    /// Absolute Y of the monitor's top-left corner in the desktop space.
    pub y: i32,
    /// Width in pixels. Always positive.
    pub width: i32,
    /// Height in pixels. Always positive.
    pub height: i32,
    /// Whether this is the primary display.
    pub is_primary: bool,
}

impl MonitorInfo {
    /// Check whether an absolute desktop point lies on this monitor.
    pub fn contains(&self, abs_x: i32, abs_y: i32) -> bool {
        abs_x >= self.x
            && abs_y >= self.y
            && abs_x < self.x + self.width
            && abs_y < self.y + self.height
    }
}

impl std::fmt::Display for MonitorInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({}x{} at {},{})",
            self.name, self.width, self.height, self.x, self.y
        )?;
        if self.is_primary {
            write!(f, " [primary]")?;
        }
        Ok(())
    }
}

/// List all attached monitors in platform enumeration order.
///
/// An empty list means no monitors were detected; callers should treat that
/// the same as an error and disable anything that needs a target monitor.
pub fn monitors() -> Result<Vec<MonitorInfo>> {
    crate::platform::displays()
}

/// Get the primary monitor.
pub fn primary_monitor() -> Result<MonitorInfo> {
    monitors()?
        .into_iter()
        .find(|monitor| monitor.is_primary)
        .ok_or_else(|| Error::Enumeration("primary monitor not found".into()))
}

/// Find the monitor containing an absolute desktop point.
pub fn monitor_at_point(abs_x: i32, abs_y: i32) -> Result<Option<MonitorInfo>> {
    let monitors = monitors()?;
    Ok(monitors
        .into_iter()
        .find(|monitor| monitor.contains(abs_x, abs_y)))
}

/// Query the current cursor position in absolute desktop coordinates.
pub fn cursor_position() -> Result<(i32, i32)> {
    crate::platform::cursor_position()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn monitor(x: i32, y: i32, width: i32, height: i32) -> MonitorInfo {
        MonitorInfo {
            id: 1,
            name: "Test".into(),
            x,
            y,
            width,
            height,
            is_primary: true,
        }
    }

    #[test]
    fn contains_is_inclusive_of_origin_exclusive_of_far_edge() {
        let m = monitor(100, 50, 800, 600);
        assert!(m.contains(100, 50));
        assert!(m.contains(899, 649));
        assert!(!m.contains(900, 50));
        assert!(!m.contains(100, 650));
        assert!(!m.contains(99, 50));
    }

    #[test]
    fn contains_handles_negative_origins() {
        let m = monitor(-1920, 0, 1920, 1080);
        assert!(m.contains(-1920, 0));
        assert!(m.contains(-1, 1079));
        assert!(!m.contains(0, 0));
    }
}
