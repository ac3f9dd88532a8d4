//! Find-largest, evaluate, erase, repeat.
//!
//! [`Extraction`] is a two-state machine (Scanning → Done) over a mutably
//! borrowed mask. Each [`Extraction::step`] runs one solve and applies the
//! verdict; the iterator view yields only accepted detections.
//!
//! Every step that continues scanning clears at least one bright cell, so a
//! run ends after at most `width * height` steps.
use super::params::DetectorParams;
use super::policy::Verdict;
use super::projection::{angular_extent, project};
use crate::diagnostics::CandidateSample;
use crate::grid::{BinaryGrid, GridView};
use crate::max_rect::RectWorkspace;
use crate::types::{AngularExtent, Detection, Rectangle, StopReason};
use log::debug;
use std::iter::FusedIterator;

/// Outcome of a single scanning step.
#[derive(Clone, Debug, PartialEq)]
pub enum Step {
    /// The candidate cleared both thresholds; its cells are erased.
    Accepted(Detection),
    /// The candidate failed exactly one threshold; its cells are erased.
    Skipped(CandidateSample),
    /// Terminal. Repeated calls keep returning the same reason.
    Done(StopReason),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ScanState {
    Scanning,
    Done(StopReason),
}

pub struct Extraction<'a> {
    mask: &'a mut BinaryGrid,
    workspace: &'a mut RectWorkspace,
    params: &'a DetectorParams,
    state: ScanState,
    iterations: usize,
    accepted: usize,
    candidate: Option<CandidateSample>,
}

impl<'a> Extraction<'a> {
    pub fn new(
        mask: &'a mut BinaryGrid,
        workspace: &'a mut RectWorkspace,
        params: &'a DetectorParams,
    ) -> Self {
        Self {
            mask,
            workspace,
            params,
            state: ScanState::Scanning,
            iterations: 0,
            accepted: 0,
            candidate: None,
        }
    }

    /// Run one Scanning transition.
    pub fn step(&mut self) -> Step {
        self.candidate = None;
        if let ScanState::Done(reason) = self.state {
            return Step::Done(reason);
        }

        let Some(rect) = self.workspace.largest_rectangle(self.mask) else {
            debug!(
                "Extraction::step mask exhausted after {} iterations",
                self.iterations
            );
            return self.finish(StopReason::GridExhausted);
        };
        self.iterations += 1;

        let extent = angular_extent(
            &rect,
            self.mask.width(),
            self.mask.height(),
            &self.params.headset_fov,
        );
        let verdict = self.params.acceptance.evaluate(extent);
        debug!(
            "Extraction::step #{} area={} x={} y={} h={} w={} hfov={:.3} vfov={:.3} -> {:?}",
            self.iterations,
            rect.area,
            rect.top_left.x,
            rect.top_left.y,
            rect.height,
            rect.width,
            extent.horizontal_deg,
            extent.vertical_deg,
            verdict
        );

        let cleared_cells = if verdict.erases() {
            self.mask.erase(&rect)
        } else {
            0
        };
        let sample = CandidateSample {
            iteration: self.iterations,
            rect,
            extent,
            verdict,
            cleared_cells,
        };

        match verdict {
            Verdict::Accept => {
                self.candidate = Some(sample);
                self.accepted += 1;
                Step::Accepted(self.detection(rect, extent))
            }
            Verdict::RejectPartial => {
                debug!("Extraction::step no more rectangles exceeding thresholds (one axis)");
                self.candidate = Some(sample.clone());
                Step::Skipped(sample)
            }
            Verdict::RejectFull => {
                debug!("Extraction::step no more rectangles exceeding thresholds");
                self.candidate = Some(sample);
                self.finish(StopReason::BelowThresholds)
            }
        }
    }

    /// Candidate evaluated by the most recent step, if it found one.
    pub fn take_candidate(&mut self) -> Option<CandidateSample> {
        self.candidate.take()
    }

    /// Terminal signal, available once the run is Done.
    pub fn stop_reason(&self) -> Option<StopReason> {
        match self.state {
            ScanState::Scanning => None,
            ScanState::Done(reason) => Some(reason),
        }
    }

    /// Candidates evaluated so far.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    pub fn mask(&self) -> &BinaryGrid {
        self.mask
    }

    fn finish(&mut self, reason: StopReason) -> Step {
        self.state = ScanState::Done(reason);
        Step::Done(reason)
    }

    fn detection(&self, rect: Rectangle, extent: AngularExtent) -> Detection {
        let placement = project(&rect, self.mask.height());
        Detection {
            index: self.accepted,
            area: rect.area,
            height: rect.height,
            width: rect.width,
            top_left: placement.top_left,
            center: placement.center,
            horizontal_fov_deg: extent.horizontal_deg,
            vertical_fov_deg: extent.vertical_deg,
            grid_rect: rect,
        }
    }
}

impl Iterator for Extraction<'_> {
    type Item = Detection;

    fn next(&mut self) -> Option<Detection> {
        loop {
            match self.step() {
                Step::Accepted(detection) => return Some(detection),
                Step::Skipped(_) => continue,
                Step::Done(_) => return None,
            }
        }
    }
}

impl FusedIterator for Extraction<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detector::params::{AcceptanceThresholds, HeadsetFov};
    use crate::types::{GridPoint, ReportPoint};

    fn params(min_w: f64, min_h: f64) -> DetectorParams {
        DetectorParams {
            min_luminance: 1.0,
            headset_fov: HeadsetFov {
                horizontal_deg: 100.0,
                vertical_deg: 100.0,
            },
            acceptance: AcceptanceThresholds {
                min_width_deg: min_w,
                min_height_deg: min_h,
            },
        }
    }

    fn fill(mask: &mut BinaryGrid, x: usize, y: usize, h: usize, w: usize) {
        for yy in y..y + h {
            for xx in x..x + w {
                mask.set(xx, yy, true);
            }
        }
    }

    #[test]
    fn full_grid_is_reported_once_then_exhausted() {
        let mut mask = BinaryGrid::filled(5, 4, true);
        let mut ws = RectWorkspace::new();
        let p = params(10.0, 10.0);
        let mut run = Extraction::new(&mut mask, &mut ws, &p);

        let Step::Accepted(det) = run.step() else {
            panic!("expected an accepted rectangle");
        };
        assert_eq!(det.index, 1);
        assert_eq!(det.area, 20);
        assert_eq!(det.top_left, ReportPoint { x: 0, y: 3 });
        assert_eq!(det.center, ReportPoint { x: 2, y: 1 });
        assert_eq!(run.take_candidate().map(|c| c.cleared_cells), Some(20));

        assert_eq!(run.step(), Step::Done(StopReason::GridExhausted));
        assert_eq!(run.take_candidate(), None);
        assert_eq!(run.step(), Step::Done(StopReason::GridExhausted));
        assert_eq!(run.iterations(), 1);
    }

    #[test]
    fn full_rejection_stops_without_erasing() {
        let mut mask = BinaryGrid::filled(10, 10, false);
        fill(&mut mask, 4, 4, 2, 2);
        let mut ws = RectWorkspace::new();
        let p = params(30.0, 30.0);
        let mut run = Extraction::new(&mut mask, &mut ws, &p);

        assert_eq!(run.step(), Step::Done(StopReason::BelowThresholds));
        let sample = run.take_candidate().expect("candidate recorded");
        assert_eq!(sample.verdict, Verdict::RejectFull);
        assert_eq!(sample.cleared_cells, 0);
        assert_eq!(run.mask().count_ones(), 4);
        assert_eq!(run.stop_reason(), Some(StopReason::BelowThresholds));
    }

    #[test]
    fn partial_rejection_erases_and_keeps_scanning() {
        let mut mask = BinaryGrid::filled(10, 10, false);
        // Wide strip: 100° across, 10° tall; fails only the height threshold.
        fill(&mut mask, 0, 0, 1, 10);
        // Square: 30° × 30°; passes both.
        fill(&mut mask, 2, 5, 3, 3);
        let mut ws = RectWorkspace::new();
        let p = params(25.0, 25.0);
        let mut run = Extraction::new(&mut mask, &mut ws, &p);

        let Step::Skipped(sample) = run.step() else {
            panic!("strip should be skipped");
        };
        assert_eq!(sample.rect.top_left, GridPoint { x: 0, y: 0 });
        assert_eq!(sample.verdict, Verdict::RejectPartial);
        assert_eq!(sample.cleared_cells, 10);

        let found: Vec<Detection> = run.by_ref().collect();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].index, 1);
        assert_eq!(found[0].grid_rect.top_left, GridPoint { x: 2, y: 5 });
        assert_eq!(run.stop_reason(), Some(StopReason::GridExhausted));
        assert_eq!(run.iterations(), 2);
    }

    #[test]
    fn equal_blocks_are_numbered_top_down() {
        let mut mask = BinaryGrid::filled(10, 10, false);
        fill(&mut mask, 6, 6, 3, 3);
        fill(&mut mask, 1, 1, 3, 3);
        let mut ws = RectWorkspace::new();
        let p = params(25.0, 25.0);
        let run = Extraction::new(&mut mask, &mut ws, &p);

        let found: Vec<Detection> = run.collect();
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].index, 1);
        assert_eq!(found[0].grid_rect.top_left, GridPoint { x: 1, y: 1 });
        assert_eq!(found[1].index, 2);
        assert_eq!(found[1].grid_rect.top_left, GridPoint { x: 6, y: 6 });
    }
}
