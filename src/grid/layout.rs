//! GridLayout: a fixed rows×columns arrangement on a 12-unit fluid grid.
//!
//! The widget builds its full row/cell tree once, synchronously, at
//! construction; rows and cells are never added, removed, or reordered
//! afterward. Changing `height` or `padding` recomputes the inline styles
//! of every row and cell in one pass.
//!
//! The row height formula `height / rows + (rows - 1) * padding` adds the
//! total inter-row padding instead of subtracting it. That matches the
//! historical widget this one replicates and is kept as-is.

use std::ops::{Index, IndexMut};

use serde::Serialize;
use tracing::debug;

use crate::element::{Element, Widget};
use crate::style::{debug_color, Px};

use super::cell::Cell;
use super::lookup::{GridError, GridKey};

/// Total width units in the fluid grid system.
pub const SPAN_UNITS: usize = 12;

/// Default pixel height of the entire grid.
pub const DEFAULT_HEIGHT: u32 = 820;

/// Default pixel padding between cells in the grid.
pub const DEFAULT_PADDING: u32 = 10;

/// A live layout property of the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum LayoutProperty {
    Height,
    Padding,
}

/// One grid row: a horizontal grouping of the row's cells.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Row {
    node: Element,
    cells: Vec<Cell>,
}

impl Row {
    fn new(cells: Vec<Cell>) -> Self {
        Self {
            node: Element::container(),
            cells,
        }
    }

    /// The row's underlying element.
    pub const fn element(&self) -> &Element {
        &self.node
    }

    /// The row's cells, in column order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}

/// A fixed rows×columns grid of display cells.
///
/// # Example
///
/// ```rust
/// use fluidgrid::GridLayout;
///
/// let mut grid = GridLayout::new(3, 2);
/// grid.set_padding(4);
///
/// let cell = grid.get_mut(2, 1).unwrap();
/// cell.element_mut().classes_mut().add("plot-area");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GridLayout {
    node: Element,
    rows: Vec<Row>,
    columns: usize,
    height: u32,
    padding: u32,
}

impl GridLayout {
    /// Create a grid with `rows` rows of `columns` cells.
    ///
    /// # Panics
    ///
    /// Panics if `columns` or `rows` is zero.
    pub fn new(columns: usize, rows: usize) -> Self {
        Self::with_debug(columns, rows, false)
    }

    /// Like [`GridLayout::new`], with debug backgrounds.
    ///
    /// In debug mode each cell gets a rainbow background from
    /// [`crate::DEBUG_PALETTE`], assigned by flattened index
    /// `row * columns + column` and clamped to the last palette entry.
    ///
    /// # Panics
    ///
    /// Panics if `columns` or `rows` is zero.
    pub fn with_debug(columns: usize, rows: usize, debug: bool) -> Self {
        assert!(columns > 0, "grid needs at least one column");
        assert!(rows > 0, "grid needs at least one row");

        let rows: Vec<Row> = (0..rows)
            .map(|i| {
                let cells = (0..columns)
                    .map(|j| Cell::new(debug.then(|| debug_color(i * columns + j))))
                    .collect();
                Row::new(cells)
            })
            .collect();

        let mut node = Element::container();
        // The grid fills its parent's available width.
        node.style_mut().set("width", "100%");

        let mut grid = Self {
            node,
            rows,
            columns,
            height: DEFAULT_HEIGHT,
            padding: DEFAULT_PADDING,
        };
        // Establish the starting inline styles.
        grid.update_layout();
        grid
    }

    /// Number of columns in the grid.
    pub const fn columns(&self) -> usize {
        self.columns
    }

    /// The grid's rows, in order.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// The grid's root element.
    pub const fn element(&self) -> &Element {
        &self.node
    }

    /// Pixel height of the entire grid.
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Set the grid height and restyle every row and cell.
    pub fn set_height(&mut self, px: u32) {
        self.height = px;
        self.property_changed(LayoutProperty::Height);
    }

    /// Pixel padding between cells in the grid.
    pub const fn padding(&self) -> u32 {
        self.padding
    }

    /// Set the cell padding and restyle every row and cell.
    pub fn set_padding(&mut self, px: u32) {
        self.padding = px;
        self.property_changed(LayoutProperty::Padding);
    }

    /// Cell at zero-based `(column, row)`.
    pub fn get(&self, column: usize, row: usize) -> Result<&Cell, GridError> {
        if column >= self.columns || row >= self.rows.len() {
            return Err(self.out_of_bounds(column, row));
        }
        Ok(&self.rows[row].cells[column])
    }

    /// Mutable cell at zero-based `(column, row)`.
    pub fn get_mut(&mut self, column: usize, row: usize) -> Result<&mut Cell, GridError> {
        if column >= self.columns || row >= self.rows.len() {
            return Err(self.out_of_bounds(column, row));
        }
        Ok(&mut self.rows[row].cells[column])
    }

    /// Two-key lookup mirroring subscript syntax (`grid[column, row]`).
    ///
    /// Range keys are rejected, as is any key count other than two.
    pub fn select(&self, keys: &[GridKey]) -> Result<&Cell, GridError> {
        if keys.iter().any(|key| matches!(key, GridKey::Span(_))) {
            return Err(GridError::SlicingUnsupported);
        }
        let [GridKey::At(column), GridKey::At(row)] = keys else {
            return Err(GridError::KeyCount(keys.len()));
        };
        self.get(*column, *row)
    }

    fn out_of_bounds(&self, column: usize, row: usize) -> GridError {
        GridError::OutOfBounds {
            column,
            row,
            columns: self.columns,
            rows: self.rows.len(),
        }
    }

    fn property_changed(&mut self, property: LayoutProperty) {
        debug!(
            ?property,
            height = self.height,
            padding = self.padding,
            "layout property changed"
        );
        self.update_layout();
    }

    /// Apply the current `height` and `padding` to every row and cell.
    ///
    /// Always a full pass over the tree; running it again with unchanged
    /// properties produces identical styles.
    #[allow(clippy::cast_possible_truncation)]
    fn update_layout(&mut self) {
        let rows = self.rows.len() as u32;
        let row_height = Px(self.height / rows + (rows - 1) * self.padding);
        let padding = Px(self.padding);

        for row in &mut self.rows {
            row.node.style_mut().set("height", row_height);
            row.node.style_mut().set("margin-bottom", padding);
            for cell in &mut row.cells {
                cell.element_mut().style_mut().set("margin-left", padding);
            }
        }
    }
}

impl Widget for GridLayout {
    fn root(&self) -> &Element {
        &self.node
    }

    /// Reclassify rows and cells onto the fluid grid.
    ///
    /// Rows lose the frontend's generic container and vertical-stack
    /// markers and become fluid rows; every cell gains a span-width class
    /// of `12 / columns` units (floor division, so more than 12 columns
    /// yields `span0`). Idempotent under redisplay.
    fn after_display(&mut self) {
        let span = format!("span{}", SPAN_UNITS / self.columns);
        debug!(span = %span, rows = self.rows.len(), "normalizing grid classes");

        for row in &mut self.rows {
            let classes = row.node.classes_mut();
            classes.remove("widget-container");
            classes.remove("vbox");
            classes.add("row-fluid");
            for cell in &mut row.cells {
                cell.element_mut().classes_mut().add(&span);
            }
        }
    }
}

impl Index<(usize, usize)> for GridLayout {
    type Output = Cell;

    fn index(&self, (column, row): (usize, usize)) -> &Cell {
        match self.get(column, row) {
            Ok(cell) => cell,
            Err(err) => panic!("{err}"),
        }
    }
}

impl IndexMut<(usize, usize)> for GridLayout {
    fn index_mut(&mut self, (column, row): (usize, usize)) -> &mut Cell {
        match self.get_mut(column, row) {
            Ok(cell) => cell,
            Err(err) => panic!("{err}"),
        }
    }
}
