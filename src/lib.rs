#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod detector;
pub mod diagnostics;
pub mod error;
pub mod grid;
pub mod report;
pub mod types;

// Solver building blocks, public for tools and tests.
pub mod binarize;
pub mod histogram;
pub mod max_rect;

// Tool-facing configuration.
pub mod config;

// --- High-level re-exports -------------------------------------------------

// Main entry points: detector + results.
pub use crate::detector::{DetectorParams, RectDetector};
pub use crate::error::DetectorError;
pub use crate::grid::{BinaryGrid, LuminanceGrid};
pub use crate::types::{Detection, DetectionResult, Rectangle, StopReason};

// High-level diagnostics returned by the detector.
pub use crate::diagnostics::{DetectionReport, ExtractionTrace};

// Solver entry points that are useful on their own.
pub use crate::histogram::max_rect_under_histogram;
pub use crate::max_rect::max_rect_in_binary_grid;

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```
/// use rect_detector::prelude::*;
///
/// # fn main() -> Result<(), DetectorError> {
/// let grid = LuminanceGrid::from_rows(vec![
///     vec![0.0, 3.0, 3.0],
///     vec![0.0, 3.0, 3.0],
/// ])?;
/// let mut det = RectDetector::new(DetectorParams {
///     min_luminance: 1.0,
///     ..Default::default()
/// });
///
/// let result = det.detect(&grid)?;
/// assert_eq!(result.detections[0].area, 4);
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::grid::{BinaryGrid, GridView, LuminanceGrid};
    pub use crate::{DetectionResult, DetectorError, DetectorParams, RectDetector};
}
