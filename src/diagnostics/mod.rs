//! Diagnostics data model returned alongside detection results.
//!
//! `DetectionReport` is the main entry point returned by
//! [`RectDetector::detect_with_diagnostics`](crate::RectDetector), bundling the
//! compact `DetectionResult` with an `ExtractionTrace` that records every
//! candidate the driver evaluated and how long each stage took.

pub mod candidates;
pub mod pipeline;
pub mod timing;

pub use candidates::CandidateSample;
pub use pipeline::{DetectionReport, ExtractionTrace, InputDescriptor};
pub use timing::{StageTiming, TimingBreakdown};
