//! Parameter types configuring a detection run.
//!
//! `min_luminance` is expressed in the grid's own units; callers working in
//! physical units convert before building the params (see
//! [`crate::config::detect::LuminanceConfig`]).
//!
//! Defaults describe a 100°×100° headset that reports any rectangle spanning
//! at least 10° on both axes.

use crate::error::DetectorError;
use serde::{Deserialize, Serialize};

/// Detector-wide parameters for one binarize → extract run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectorParams {
    /// Cells at or above this value are bright.
    pub min_luminance: f64,
    /// Full angular extent covered by the grid.
    pub headset_fov: HeadsetFov,
    /// Minimum angular size a rectangle needs on each axis to be reported.
    pub acceptance: AcceptanceThresholds,
}

impl Default for DetectorParams {
    fn default() -> Self {
        Self {
            min_luminance: 1.0,
            headset_fov: HeadsetFov::default(),
            acceptance: AcceptanceThresholds::default(),
        }
    }
}

impl DetectorParams {
    /// Reject NaN/infinite values and negative angles before a run starts.
    pub fn validate(&self) -> Result<(), DetectorError> {
        if !self.min_luminance.is_finite() {
            return Err(DetectorError::InvalidParameter {
                name: "min_luminance",
                value: self.min_luminance,
            });
        }
        let angles = [
            ("headset_fov.horizontal_deg", self.headset_fov.horizontal_deg),
            ("headset_fov.vertical_deg", self.headset_fov.vertical_deg),
            ("acceptance.min_width_deg", self.acceptance.min_width_deg),
            ("acceptance.min_height_deg", self.acceptance.min_height_deg),
        ];
        for (name, value) in angles {
            if !value.is_finite() || value < 0.0 {
                return Err(DetectorError::InvalidParameter { name, value });
            }
        }
        Ok(())
    }
}

/// Headset field of view spanned by the full grid width and height.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct HeadsetFov {
    pub horizontal_deg: f64,
    pub vertical_deg: f64,
}

impl Default for HeadsetFov {
    fn default() -> Self {
        Self {
            horizontal_deg: 100.0,
            vertical_deg: 100.0,
        }
    }
}

/// Per-axis minimum angular size, in degrees.
///
/// - `min_width_deg`: compared against the rectangle's horizontal FOV.
/// - `min_height_deg`: compared against the rectangle's vertical FOV.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AcceptanceThresholds {
    pub min_width_deg: f64,
    pub min_height_deg: f64,
}

impl Default for AcceptanceThresholds {
    fn default() -> Self {
        Self {
            min_width_deg: 10.0,
            min_height_deg: 10.0,
        }
    }
}
