//! Process DPI awareness.
//!
//! On Windows, a process that is not DPI-aware sees virtualized coordinates
//! on scaled monitors, which silently skews every absolute click target.
//! Call [`ensure_dpi_awareness`] once at startup, before enumerating
//! monitors. Other platforms do not virtualize coordinates this way.

/// The DPI awareness mode the process ended up with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DpiMode {
    /// Per-monitor awareness v2 (Windows 10 1703+).
    PerMonitorV2,
    /// Per-monitor awareness v1 (Windows 8.1+).
    PerMonitor,
    /// System-wide awareness.
    System,
    /// Every escalation attempt failed; coordinates may be virtualized.
    Unavailable,
    /// This platform does not virtualize coordinates by DPI.
    Unsupported,
}

impl std::fmt::Display for DpiMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            DpiMode::PerMonitorV2 => "per-monitor-v2",
            DpiMode::PerMonitor => "per-monitor",
            DpiMode::System => "system",
            DpiMode::Unavailable => "unavailable",
            DpiMode::Unsupported => "unsupported-platform",
        };
        f.write_str(label)
    }
}

/// Opt the process into the best available DPI awareness mode.
///
/// Tries per-monitor-v2, then per-monitor, then system awareness, and
/// reports whichever stuck. Never fails; the achieved mode is informational
/// and worth surfacing in status text.
pub fn ensure_dpi_awareness() -> DpiMode {
    #[cfg(target_os = "windows")]
    {
        crate::platform::set_dpi_awareness()
    }
    #[cfg(not(target_os = "windows"))]
    {
        DpiMode::Unsupported
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modes_render_stable_labels() {
        assert_eq!(DpiMode::PerMonitorV2.to_string(), "per-monitor-v2");
        assert_eq!(DpiMode::Unsupported.to_string(), "unsupported-platform");
    }
}
