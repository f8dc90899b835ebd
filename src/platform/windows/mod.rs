//! Windows platform implementation.

mod display;
mod dpi;
mod inject;
mod keycodes;
mod listen;

pub use display::*;
pub use dpi::*;
pub use inject::*;
pub use listen::*;
