//! Style module: pixel lengths, ordered inline-style maps, and the debug
//! palette.
//!
//! Styles are plain property/value pairs the way a frontend consumes them;
//! nothing here interprets CSS.

mod map;
mod palette;

pub use map::{Px, StyleMap};
pub use palette::{debug_color, DEBUG_PALETTE};
