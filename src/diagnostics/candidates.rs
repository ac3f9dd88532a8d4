use crate::detector::Verdict;
use crate::types::{AngularExtent, Rectangle};
use serde::Serialize;

/// One candidate rectangle evaluated by the extraction driver.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateSample {
    /// 1-based iteration that produced the candidate.
    pub iteration: usize,
    /// Grid-space geometry (row 0 at the top).
    pub rect: Rectangle,
    pub extent: AngularExtent,
    pub verdict: Verdict,
    /// Bright cells cleared from the mask; 0 when the run stopped on it.
    pub cleared_cells: usize,
}
