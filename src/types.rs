use serde::Serialize;
use std::ops::Range;

/// Cell position in grid space: column `x`, row `y`, row 0 at the top.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct GridPoint {
    pub x: usize,
    pub y: usize,
}

/// Position in report space: origin at the bottom-left cell, `y` grows upward.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct ReportPoint {
    pub x: usize,
    pub y: usize,
}

/// Axis-aligned all-bright rectangle in grid space.
///
/// Produced by the matrix solver; `height` and `width` are at least one and
/// `area == height * width`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Rectangle {
    pub area: usize,
    pub top_left: GridPoint,
    pub height: usize,
    pub width: usize,
}

impl Rectangle {
    pub fn new(top_left: GridPoint, height: usize, width: usize) -> Self {
        Self {
            area: height * width,
            top_left,
            height,
            width,
        }
    }

    /// Rows covered, top to bottom.
    pub fn rows(&self) -> Range<usize> {
        self.top_left.y..self.top_left.y + self.height
    }

    /// Columns covered, left to right.
    pub fn cols(&self) -> Range<usize> {
        self.top_left.x..self.top_left.x + self.width
    }

    pub fn contains(&self, p: GridPoint) -> bool {
        self.rows().contains(&p.y) && self.cols().contains(&p.x)
    }

    pub fn overlaps(&self, other: &Rectangle) -> bool {
        self.top_left.x < other.top_left.x + other.width
            && other.top_left.x < self.top_left.x + self.width
            && self.top_left.y < other.top_left.y + other.height
            && other.top_left.y < self.top_left.y + self.height
    }
}

/// Angular size of a rectangle as a linear fraction of the headset FOV.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AngularExtent {
    pub horizontal_deg: f64,
    pub vertical_deg: f64,
}

/// An accepted rectangle expressed in report space.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Detection {
    /// 1-based position in discovery order among accepted rectangles.
    pub index: usize,
    pub area: usize,
    pub height: usize,
    pub width: usize,
    pub top_left: ReportPoint,
    pub center: ReportPoint,
    pub horizontal_fov_deg: f64,
    pub vertical_fov_deg: f64,
    /// The same rectangle in grid space, as it was erased from the mask.
    pub grid_rect: Rectangle,
}

/// Why an extraction run reached its terminal state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum StopReason {
    /// The largest remaining rectangle failed both angular thresholds.
    BelowThresholds,
    /// No bright cells remain in the mask.
    GridExhausted,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionResult {
    pub detections: Vec<Detection>,
    pub stop_reason: StopReason,
    /// Candidate rectangles evaluated, accepted or not.
    pub iterations: usize,
    pub latency_ms: f64,
}
