//! Bright/dark mask with the same shape as the luminance grid it came from.
//!
//! `true` marks a bright cell (a "1"). The extraction driver is the only
//! writer: it clears accepted and partially rejected rectangles in place.
use super::traits::{GridView, GridViewMut};
use crate::error::DetectorError;
use crate::types::Rectangle;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BinaryGrid {
    width: usize,
    height: usize,
    data: Vec<bool>,
}

impl BinaryGrid {
    /// A `width × height` mask with every cell set to `value`.
    pub fn filled(width: usize, height: usize, value: bool) -> Self {
        Self {
            width,
            height,
            data: vec![value; width * height],
        }
    }

    /// Build a mask from a flat row-major buffer.
    pub fn from_cells(width: usize, height: usize, data: Vec<bool>) -> Result<Self, DetectorError> {
        if width == 0 || height == 0 {
            return Err(DetectorError::EmptyGrid);
        }
        let expected = width * height;
        if data.len() != expected {
            return Err(DetectorError::SizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Shape must already match `data`; used when deriving from a validated grid.
    pub(crate) fn from_validated(width: usize, height: usize, data: Vec<bool>) -> Self {
        debug_assert_eq!(data.len(), width * height);
        Self {
            width,
            height,
            data,
        }
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> bool {
        self.data[y * self.width + x]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, value: bool) {
        let i = y * self.width + x;
        self.data[i] = value;
    }

    /// Number of bright cells left in the mask.
    pub fn count_ones(&self) -> usize {
        self.data.iter().filter(|&&c| c).count()
    }

    pub fn is_empty(&self) -> bool {
        !self.data.contains(&true)
    }

    /// Clear every cell covered by `rect`, returning how many were bright.
    ///
    /// The rectangle is clipped to the grid so a stale rectangle can never
    /// index out of bounds.
    pub fn erase(&mut self, rect: &Rectangle) -> usize {
        let x0 = rect.top_left.x.min(self.width);
        let x1 = (rect.top_left.x + rect.width).min(self.width);
        let y0 = rect.top_left.y.min(self.height);
        let y1 = (rect.top_left.y + rect.height).min(self.height);
        let mut cleared = 0;
        for y in y0..y1 {
            for cell in &mut self.row_mut(y)[x0..x1] {
                cleared += usize::from(*cell);
                *cell = false;
            }
        }
        cleared
    }

    pub fn as_slice(&self) -> &[bool] {
        &self.data
    }
}

impl GridView for BinaryGrid {
    type Cell = bool;

    #[inline]
    fn width(&self) -> usize {
        self.width
    }
    #[inline]
    fn height(&self) -> usize {
        self.height
    }
    #[inline]
    fn row(&self, y: usize) -> &[bool] {
        let start = y * self.width;
        &self.data[start..start + self.width]
    }
}

impl GridViewMut for BinaryGrid {
    #[inline]
    fn row_mut(&mut self, y: usize) -> &mut [bool] {
        let start = y * self.width;
        let end = start + self.width;
        &mut self.data[start..end]
    }
}
