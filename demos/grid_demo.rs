//! Grid demo: build a debug grid, display it, and dump its state.
//!
//! Run with `cargo run --example grid_demo`.

use fluidgrid::{display, GridLayout};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    // A 4x2 rainbow grid: cells span 12 / 4 = 3 units each.
    let mut grid = GridLayout::with_debug(4, 2, true);
    grid.set_height(600);
    grid.set_padding(8);

    display(&mut grid);

    for (r, row) in grid.rows().iter().enumerate() {
        println!("row {r}: {}", row.element().style().css_text());
        for (c, cell) in row.cells().iter().enumerate() {
            let classes: Vec<_> = cell.element().classes().iter().collect();
            println!("  cell ({c}, {r}): classes {classes:?}");
        }
    }

    let state = serde_json::to_string_pretty(&grid).expect("grid state serializes");
    println!("{state}");
}
