//! Detector pipeline driving a detection run end to end.
//!
//! The [`RectDetector`] exposes a simple API: feed a luminance grid and get
//! the accepted rectangles in discovery order, with the reason the run
//! stopped. Internally it validates parameters, binarizes the grid, and drives
//! an [`Extraction`] to completion.
//!
//! Typical usage:
//! ```no_run
//! use rect_detector::{DetectorParams, LuminanceGrid, RectDetector};
//!
//! # fn example(grid: LuminanceGrid) -> Result<(), rect_detector::DetectorError> {
//! let mut detector = RectDetector::new(DetectorParams::default());
//! let result = detector.detect(&grid)?;
//! for det in &result.detections {
//!     println!("#{} {:.1}° × {:.1}°", det.index, det.horizontal_fov_deg, det.vertical_fov_deg);
//! }
//! # Ok(())
//! # }
//! ```
use super::extraction::{Extraction, Step};
use super::params::DetectorParams;
use crate::binarize::binarize;
use crate::diagnostics::timing::elapsed_ms;
use crate::diagnostics::{DetectionReport, ExtractionTrace, InputDescriptor, TimingBreakdown};
use crate::error::DetectorError;
use crate::grid::{BinaryGrid, GridView, LuminanceGrid};
use crate::max_rect::RectWorkspace;
use crate::types::DetectionResult;
use log::debug;
use std::time::Instant;

/// Greedy largest-rectangle detector over thresholded luminance grids.
pub struct RectDetector {
    params: DetectorParams,
    workspace: RectWorkspace,
}

impl RectDetector {
    /// Create a detector with the supplied parameters.
    pub fn new(params: DetectorParams) -> Self {
        Self {
            params,
            workspace: RectWorkspace::new(),
        }
    }

    pub fn params(&self) -> &DetectorParams {
        &self.params
    }

    /// Threshold `grid` with the configured minimum luminance.
    pub fn binarize(&self, grid: &LuminanceGrid) -> BinaryGrid {
        binarize(grid, self.params.min_luminance)
    }

    /// Start a step-wise extraction over a caller-owned mask.
    ///
    /// Parameters are not re-validated here; call
    /// [`DetectorParams::validate`] first when they come from untrusted input.
    pub fn extract<'a>(&'a mut self, mask: &'a mut BinaryGrid) -> Extraction<'a> {
        Extraction::new(mask, &mut self.workspace, &self.params)
    }

    /// Run the detector on a luminance grid, returning a compact result.
    pub fn detect(&mut self, grid: &LuminanceGrid) -> Result<DetectionResult, DetectorError> {
        Ok(self.detect_with_diagnostics(grid)?.result)
    }

    /// Run the detector and return both the result and a detailed trace.
    pub fn detect_with_diagnostics(
        &mut self,
        grid: &LuminanceGrid,
    ) -> Result<DetectionReport, DetectorError> {
        self.params.validate()?;
        let (width, height) = (grid.width(), grid.height());
        debug!(
            "RectDetector::detect start w={} h={} min_luminance={}",
            width, height, self.params.min_luminance
        );
        let total_start = Instant::now();
        let mut timings = TimingBreakdown::default();

        let mut mask = timings.measure("binarize", || self.binarize(grid));
        let bright_cells = mask.count_ones();
        debug!("RectDetector::detect bright_cells={}", bright_cells);

        let extract_start = Instant::now();
        let mut detections = Vec::new();
        let mut candidates = Vec::new();
        let mut extraction = self.extract(&mut mask);
        let stop_reason = loop {
            let step = extraction.step();
            if let Some(sample) = extraction.take_candidate() {
                candidates.push(sample);
            }
            match step {
                Step::Accepted(detection) => detections.push(detection),
                Step::Skipped(_) => {}
                Step::Done(reason) => break reason,
            }
        };
        let iterations = extraction.iterations();
        timings.push("extract", elapsed_ms(extract_start));

        let latency_ms = elapsed_ms(total_start);
        timings.total_ms = latency_ms;
        debug!(
            "RectDetector::detect done detections={} iterations={} stop={:?} latency_ms={:.3}",
            detections.len(),
            iterations,
            stop_reason,
            latency_ms
        );

        Ok(DetectionReport {
            result: DetectionResult {
                detections,
                stop_reason,
                iterations,
                latency_ms,
            },
            trace: ExtractionTrace {
                input: InputDescriptor {
                    width,
                    height,
                    min_luminance: self.params.min_luminance,
                    bright_cells,
                    value_range: grid.value_range(),
                },
                timings,
                candidates,
                remaining_bright_cells: mask.count_ones(),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detector::{AcceptanceThresholds, Verdict};
    use crate::types::StopReason;

    #[test]
    fn invalid_params_fail_before_solving() {
        let mut detector = RectDetector::new(DetectorParams {
            acceptance: AcceptanceThresholds {
                min_width_deg: f64::INFINITY,
                min_height_deg: 1.0,
            },
            ..Default::default()
        });
        let grid = LuminanceGrid::from_vec(2, 2, vec![5.0; 4]).unwrap();
        assert!(matches!(
            detector.detect(&grid),
            Err(DetectorError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn trace_records_every_candidate() {
        let mut values = vec![0.0; 100];
        // 2×2 bright block in a 10×10 grid: 20° × 20° under the default FOV.
        for (x, y) in [(3, 3), (4, 3), (3, 4), (4, 4)] {
            values[y * 10 + x] = 5.0;
        }
        let grid = LuminanceGrid::from_vec(10, 10, values).unwrap();
        let mut detector = RectDetector::new(DetectorParams {
            acceptance: AcceptanceThresholds {
                min_width_deg: 30.0,
                min_height_deg: 30.0,
            },
            ..Default::default()
        });
        let report = detector.detect_with_diagnostics(&grid).unwrap();
        assert!(report.result.detections.is_empty());
        assert_eq!(report.result.stop_reason, StopReason::BelowThresholds);
        assert_eq!(report.trace.candidates.len(), 1);
        assert_eq!(report.trace.with_verdict(Verdict::RejectFull).count(), 1);
        assert_eq!(report.trace.input.bright_cells, 4);
        assert_eq!(report.trace.remaining_bright_cells, 4);
        assert!(report.trace.timings.stage_ms("binarize").is_some());
        assert!(report.trace.timings.stage_ms("extract").is_some());
    }
}
