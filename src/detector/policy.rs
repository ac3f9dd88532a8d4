//! Accept/stop rule applied to each candidate rectangle.
//!
//! The rule is asymmetric:
//! - both axes below threshold → the whole scan stops;
//! - exactly one axis below → the rectangle is erased without being reported
//!   and scanning continues, so smaller candidates elsewhere stay reachable;
//! - neither below → the rectangle is reported, erased, and scanning continues.
use super::params::AcceptanceThresholds;
use crate::types::AngularExtent;
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Verdict {
    Accept,
    RejectPartial,
    RejectFull,
}

impl Verdict {
    /// Whether the candidate's cells are cleared before the next scan.
    pub fn erases(self) -> bool {
        !matches!(self, Verdict::RejectFull)
    }
}

impl AcceptanceThresholds {
    pub fn evaluate(&self, extent: AngularExtent) -> Verdict {
        let narrow = extent.horizontal_deg < self.min_width_deg;
        let short = extent.vertical_deg < self.min_height_deg;
        match (narrow, short) {
            (true, true) => Verdict::RejectFull,
            (true, false) | (false, true) => Verdict::RejectPartial,
            (false, false) => Verdict::Accept,
        }
    }
}
