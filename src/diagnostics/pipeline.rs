use super::{CandidateSample, TimingBreakdown};
use crate::detector::Verdict;
use crate::types::DetectionResult;
use serde::Serialize;

/// Result produced by [`RectDetector::detect_with_diagnostics`](crate::RectDetector).
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionReport {
    pub result: DetectionResult,
    pub trace: ExtractionTrace,
}

/// End-to-end trace of one binarize → extract run.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionTrace {
    pub input: InputDescriptor,
    pub timings: TimingBreakdown,
    /// Every evaluated candidate, in discovery order.
    pub candidates: Vec<CandidateSample>,
    /// Bright cells still set in the mask when the run stopped.
    pub remaining_bright_cells: usize,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub width: usize,
    pub height: usize,
    pub min_luminance: f64,
    /// Bright cells right after binarization.
    pub bright_cells: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_range: Option<(f64, f64)>,
}

impl ExtractionTrace {
    /// Candidates whose verdict matches `verdict`.
    pub fn with_verdict(&self, verdict: Verdict) -> impl Iterator<Item = &CandidateSample> + '_ {
        self.candidates.iter().filter(move |c| c.verdict == verdict)
    }
}
