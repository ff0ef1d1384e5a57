//! # Fluidgrid
//!
//! A fixed rows×columns grid widget for notebook display frontends.
//!
//! Fluidgrid arranges leaf cells into row containers on a 12-unit fluid
//! grid: each cell's width is a proportional span class, while heights and
//! paddings are pixel inline styles recomputed whenever the grid's `height`
//! or `padding` property changes.
//!
//! ## Core Concepts
//!
//! - **Element tree**: rows and cells are generic display containers with
//!   ordered children, inline styles, and semantic CSS classes
//! - **Fixed grid**: the row/cell tree is built once at construction and
//!   never re-gridded
//! - **Full relayout**: a `height` or `padding` change restyles every row
//!   and cell synchronously
//! - **Display normalization**: after the host displays the widget, rows
//!   trade the frontend's default stacking classes for fluid-row classes
//!   and cells gain `span{12 / columns}` width classes
//!
//! ## Example
//!
//! ```rust
//! use fluidgrid::{display, GridLayout};
//!
//! // Two rows of four cells each.
//! let mut grid = GridLayout::new(4, 2);
//! grid.set_height(600);
//!
//! display(&mut grid);
//! assert!(grid.get(3, 1).is_ok());
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod element;
pub mod grid;
pub mod style;

// Re-exports for convenience
pub use element::{display, ClassList, Element, Widget};
pub use grid::{Cell, GridError, GridKey, GridLayout, Row};
pub use style::{debug_color, Px, StyleMap, DEBUG_PALETTE};
