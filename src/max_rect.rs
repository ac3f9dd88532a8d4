//! Largest all-bright rectangle in a binary grid.
//!
//! Row by row, a height profile counts the consecutive bright cells ending at
//! the current row in each column. Every profile is a histogram whose largest
//! rectangle is the best rectangle with its bottom edge on that row, so the
//! overall best is the best over all rows. Cost is O(rows × cols).
//!
//! The profile lives in a [`RectWorkspace`] and is never aliased with the
//! input grid: the solver only reads the mask.
use crate::grid::{BinaryGrid, GridView};
use crate::histogram::max_rect_under_histogram_with;
use crate::types::{GridPoint, Rectangle};

/// Reusable buffers for repeated solves over same-sized grids.
#[derive(Debug, Default)]
pub struct RectWorkspace {
    profile: Vec<usize>,
    stack: Vec<usize>,
}

impl RectWorkspace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Largest rectangle of bright cells, or `None` when the mask is all dark.
    ///
    /// Ties keep the rectangle whose bottom row comes first, then the one
    /// found first along that row.
    pub fn largest_rectangle(&mut self, grid: &BinaryGrid) -> Option<Rectangle> {
        self.profile.clear();
        self.profile.resize(grid.width(), 0);

        let mut best: Option<Rectangle> = None;
        for (y, row) in grid.rows().enumerate() {
            for (run, &bright) in self.profile.iter_mut().zip(row) {
                *run = if bright { *run + 1 } else { 0 };
            }
            let hist = max_rect_under_histogram_with(&self.profile, &mut self.stack);
            if hist.area > best.map_or(0, |r| r.area) {
                // The limiting bar's top edge sits `height - 1` rows above row `y`.
                let top_left = GridPoint {
                    x: hist.start,
                    y: y + 1 - hist.height,
                };
                best = Some(Rectangle::new(top_left, hist.height, hist.width));
            }
        }
        best
    }

    /// Height profile left behind by the last solve (the bottom row's histogram).
    pub fn last_profile(&self) -> &[usize] {
        &self.profile
    }
}

/// One-shot convenience wrapper around [`RectWorkspace::largest_rectangle`].
pub fn max_rect_in_binary_grid(grid: &BinaryGrid) -> Option<Rectangle> {
    RectWorkspace::new().largest_rectangle(grid)
}
