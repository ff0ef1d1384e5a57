//! Debug palette: deterministic rainbow backgrounds for grid cells.

/// Fixed palette used for debug cell backgrounds, in assignment order.
pub const DEBUG_PALETTE: [&str; 6] = ["red", "orange", "yellow", "green", "blue", "indigo"];

/// Background color for the cell at flattened index `index`.
///
/// Indices past the end of the palette clamp to the last entry; the
/// palette never wraps.
pub fn debug_color(index: usize) -> &'static str {
    DEBUG_PALETTE[index.min(DEBUG_PALETTE.len() - 1)]
}
