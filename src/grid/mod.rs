//! Grid module: the fixed rows×columns fluid-grid widget.
//!
//! # Architecture
//!
//! [`GridLayout`] owns a tree built once at construction: `rows` row
//! containers, each holding exactly `columns` [`Cell`]s. Two live pixel
//! properties, `height` and `padding`, drive a full inline-style
//! recomputation over that tree whenever either changes. After the host
//! displays the widget, rows and cells are reclassified onto the 12-unit
//! fluid grid.
//!
//! # Example
//!
//! ```rust
//! use fluidgrid::{display, GridLayout};
//!
//! let mut grid = GridLayout::new(4, 2);
//! display(&mut grid);
//!
//! // Cells span 12 / 4 = 3 units each.
//! assert!(grid.get(0, 0).unwrap().element().classes().contains("span3"));
//! ```

mod cell;
mod layout;
mod lookup;

pub use cell::Cell;
pub use layout::{GridLayout, Row, DEFAULT_HEIGHT, DEFAULT_PADDING, SPAN_UNITS};
pub use lookup::{GridError, GridKey};
