//! macOS platform implementation.

mod display;
mod inject;
mod keycodes;
mod listen;

pub use display::*;
pub use inject::*;
pub use listen::*;
