//! Click run configuration.

use crate::error::{Error, Result};
use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Button {
    /// Left mouse button.
    #[default]
    Left,
    /// Right mouse button.
    Right,
    /// Middle mouse button.
    Middle,
}

/// A validated, ready-to-run click request.
///
/// The target is an absolute desktop coordinate, normally produced by
/// [`crate::coords::to_absolute`] after a successful
/// [`crate::coords::validate_bounds`] check against the selected monitor.
/// Coordinates are not bounds-checked here; the interval is.
///
/// A `ClickConfig` is immutable. Build one immediately before starting a
/// worker run and discard it when the run ends.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ClickConfig {
    /// Absolute target X.
    pub x: i32,
    /// Absolute target Y.
    pub y: i32,
    /// Time between the start of one click and the next. Strictly positive.
    pub interval: Duration,
    /// Which button to click.
    pub button: Button,
}

impl ClickConfig {
    /// Create a config clicking the left button.
    ///
    /// Fails with [`Error::ZeroInterval`] when `interval` is zero.
    pub fn new(x: i32, y: i32, interval: Duration) -> Result<Self> {
        Self::with_button(x, y, interval, Button::Left)
    }

    /// Create a config clicking a specific button.
    pub fn with_button(x: i32, y: i32, interval: Duration, button: Button) -> Result<Self> {
        if interval.is_zero() {
            return Err(Error::ZeroInterval);
        }
        Ok(Self {
            x,
            y,
            interval,
            button,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_accepts_positive_intervals() {
        let config = ClickConfig::new(960, 540, Duration::from_millis(1)).unwrap();
        assert_eq!((config.x, config.y), (960, 540));
        assert_eq!(config.button, Button::Left);
    }

    #[test]
    fn new_rejects_zero_interval() {
        let err = ClickConfig::new(0, 0, Duration::ZERO).unwrap_err();
        assert!(matches!(err, Error::ZeroInterval));
    }

    #[test]
    fn with_button_keeps_the_button() {
        let config =
            ClickConfig::with_button(10, 20, Duration::from_secs(1), Button::Right).unwrap();
        assert_eq!(config.button, Button::Right);
    }

    #[test]
    fn negative_coordinates_are_allowed() {
        // A monitor left of the primary produces negative absolute targets.
        let config = ClickConfig::new(-1620, 200, Duration::from_millis(250)).unwrap();
        assert_eq!((config.x, config.y), (-1620, 200));
    }
}
