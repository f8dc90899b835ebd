//! Error types for the click injection library.

use thiserror::Error;

/// Result type alias for clickbeat operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while enumerating monitors, converting
/// coordinates, or driving the worker and hotkey listener.
#[derive(Debug, Error)]
pub enum Error {
    /// A click run is already in progress.
    #[error("a click run is already in progress")]
    AlreadyRunning,

    /// The component is not running.
    #[error("not running")]
    NotRunning,

    /// Monitor enumeration failed.
    #[error("monitor enumeration failed: {0}")]
    Enumeration(String),

    /// A monitor-relative coordinate falls outside the monitor bounds.
    #[error("relative coordinate ({x}, {y}) is outside monitor bounds {width}x{height}")]
    OutOfRange {
        /// Requested relative X.
        x: i32,
        /// Requested relative Y.
        y: i32,
        /// Monitor width.
        width: i32,
        /// Monitor height.
        height: i32,
    },

    /// The click interval must be strictly positive.
    #[error("click interval must be greater than zero")]
    ZeroInterval,

    /// Injecting a click into the OS input subsystem failed.
    #[error("click injection failed: {0}")]
    Injection(String),

    /// The global hotkey listener could not be installed.
    #[error("failed to install hotkey listener: {0}")]
    ListenerInstall(String),

    /// The operation requires elevated permissions.
    #[error("permission denied: {0}")]
    PermissionDenied(String),

    /// Thread-related error.
    #[error("thread error: {0}")]
    Thread(String),

    /// The requested feature is not supported on this platform.
    #[error("not supported: {0}")]
    NotSupported(String),
}
