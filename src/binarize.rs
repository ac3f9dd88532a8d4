//! Threshold a luminance grid into a bright/dark mask.
use crate::grid::{BinaryGrid, GridView, LuminanceGrid};

/// Mark every cell whose value is at least `threshold` as bright.
///
/// NaN samples never compare as bright.
pub fn binarize(grid: &LuminanceGrid, threshold: f64) -> BinaryGrid {
    let cells = grid.as_slice().iter().map(|&v| v >= threshold).collect();
    BinaryGrid::from_validated(grid.width(), grid.height(), cells)
}
