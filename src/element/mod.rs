//! Element module: the display-frontend container abstraction.
//!
//! A notebook frontend gives every container widget the same capabilities:
//! ordered children, inline styles, semantic CSS classes, and a display
//! lifecycle. This module models exactly that surface; widgets like
//! [`crate::GridLayout`] are built on top of it.

mod node;
mod widget;

pub use node::{ClassList, Element, DEFAULT_CONTAINER_CLASSES};
pub use widget::{display, Widget};
