//! X11 backend.

mod display;
mod inject;
mod listen;

pub use display::*;
pub use inject::*;
pub use listen::*;
