//! Owned real-valued luminance grid in row-major layout, row 0 at the top.
//!
//! Construction validates the rectangular shape, so every grid that exists
//! has at least one row, at least one column, and uniform row length.
use super::traits::GridView;
use crate::error::DetectorError;

#[derive(Clone, Debug, PartialEq)]
pub struct LuminanceGrid {
    width: usize,
    height: usize,
    data: Vec<f64>,
}

impl LuminanceGrid {
    /// Build a grid from a flat row-major buffer of `width * height` samples.
    pub fn from_vec(width: usize, height: usize, data: Vec<f64>) -> Result<Self, DetectorError> {
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

    /// Build a grid from nested rows, rejecting ragged or empty input.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, DetectorError> {
        let width = rows.first().map_or(0, Vec::len);
        if width == 0 {
            return Err(DetectorError::EmptyGrid);
        }
        let height = rows.len();
        let mut data = Vec::with_capacity(width * height);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != width {
                return Err(DetectorError::RaggedRow {
                    row,
                    expected: width,
                    found: values.len(),
                });
            }
            data.extend(values);
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> f64 {
        self.data[y * self.width + x]
    }

    /// Contiguous row-major view of every sample.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Smallest and largest finite sample, or `None` if every sample is NaN/inf.
    pub fn value_range(&self) -> Option<(f64, f64)> {
        self.data
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }
}

impl GridView for LuminanceGrid {
    type Cell = f64;

    #[inline]
    fn width(&self) -> usize {
        self.width
    }
    #[inline]
    fn height(&self) -> usize {
        self.height
    }
    #[inline]
    fn row(&self, y: usize) -> &[f64] {
        let start = y * self.width;
        &self.data[start..start + self.width]
    }
}
