//! Plain-text rendering of detection results.
use crate::types::{Detection, DetectionResult, StopReason};
use std::fmt;

/// Render one block per accepted rectangle followed by the stop line.
pub fn render_text(result: &DetectionResult) -> String {
    TextReport(result).to_string()
}

/// Text form of a [`DetectionResult`], usable directly with `write!`/`print!`.
pub struct TextReport<'a>(pub &'a DetectionResult);

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for det in &self.0.detections {
            write_detection(f, det)?;
            writeln!(f)?;
        }
        writeln!(f, "{}", stop_line(self.0.stop_reason))
    }
}

fn write_detection(f: &mut fmt::Formatter<'_>, det: &Detection) -> fmt::Result {
    writeln!(f, "Rectangle {}:", det.index)?;
    writeln!(f, "  area: {}", det.area)?;
    writeln!(f, "  height: {}", det.height)?;
    writeln!(f, "  width: {}", det.width)?;
    writeln!(f, "  top-left (x, y): ({}, {})", det.top_left.x, det.top_left.y)?;
    writeln!(f, "  center (x, y): ({}, {})", det.center.x, det.center.y)?;
    writeln!(f, "  horizontal FOV: {:.3} deg", det.horizontal_fov_deg)?;
    writeln!(f, "  vertical FOV: {:.3} deg", det.vertical_fov_deg)
}

fn stop_line(reason: StopReason) -> &'static str {
    match reason {
        StopReason::BelowThresholds => "No more rectangles exceeding thresholds",
        StopReason::GridExhausted => "No more rectangles exceeding thresholds (mask exhausted)",
    }
}
