//! Runtime configuration for `rect_detect`.
//!
//! ```json
//! {
//!   "input": "capture.csv",
//!   "luminance": { "min_nits": 150.0 },
//!   "headset_fov": { "horizontal_deg": 90.0, "vertical_deg": 90.0 },
//!   "acceptance": { "min_width_deg": 20.0, "min_height_deg": 15.0 },
//!   "output": { "format": "both", "json_out": "out/report.json" }
//! }
//! ```
use crate::detector::{AcceptanceThresholds, DetectorParams, HeadsetFov};
use crate::grid::io::{load_csv_grid, load_grayscale_grid};
use crate::grid::LuminanceGrid;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Nits represented by one unit of the luminance grid in captured CSV data.
pub const DEFAULT_NITS_PER_UNIT: f64 = 204.25;

#[derive(Clone, Debug, Deserialize)]
pub struct DetectConfig {
    pub input: PathBuf,
    /// How to read `input`; inferred from its extension when absent.
    #[serde(default)]
    pub input_format: Option<InputFormat>,
    pub luminance: LuminanceConfig,
    #[serde(default)]
    pub headset_fov: HeadsetFov,
    #[serde(default)]
    pub acceptance: AcceptanceThresholds,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputFormat {
    Csv,
    Image,
}

impl InputFormat {
    /// `.csv`/`.txt` read as delimited text; anything else goes to the image decoder.
    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("csv") | Some("txt") => InputFormat::Csv,
            _ => InputFormat::Image,
        }
    }
}

/// Brightness threshold in physical units and the grid's unit scale.
#[derive(Clone, Debug, Deserialize)]
pub struct LuminanceConfig {
    pub min_nits: f64,
    #[serde(default = "default_nits_per_unit")]
    pub nits_per_unit: f64,
}

fn default_nits_per_unit() -> f64 {
    DEFAULT_NITS_PER_UNIT
}

impl LuminanceConfig {
    /// Threshold converted into grid units.
    pub fn grid_threshold(&self) -> Result<f64, String> {
        if !(self.nits_per_unit.is_finite() && self.nits_per_unit > 0.0) {
            return Err(format!(
                "luminance.nits_per_unit must be positive, got {}",
                self.nits_per_unit
            ));
        }
        if !self.min_nits.is_finite() {
            return Err(format!(
                "luminance.min_nits must be finite, got {}",
                self.min_nits
            ));
        }
        Ok(self.min_nits / self.nits_per_unit)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Both,
}

impl OutputFormat {
    pub fn includes_text(self) -> bool {
        matches!(self, OutputFormat::Text | OutputFormat::Both)
    }

    pub fn includes_json(self) -> bool {
        matches!(self, OutputFormat::Json | OutputFormat::Both)
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Where to write the JSON report; printed to stdout when absent.
    pub json_out: Option<PathBuf>,
    /// Optional PNG dump of the binarized mask before extraction.
    pub mask_out: Option<PathBuf>,
}

impl DetectConfig {
    pub fn resolved_input_format(&self) -> InputFormat {
        self.input_format
            .unwrap_or_else(|| InputFormat::from_path(&self.input))
    }

    /// Detector parameters with the threshold converted into grid units.
    pub fn detector_params(&self) -> Result<DetectorParams, String> {
        let params = DetectorParams {
            min_luminance: self.luminance.grid_threshold()?,
            headset_fov: self.headset_fov,
            acceptance: self.acceptance,
        };
        params.validate().map_err(|e| e.to_string())?;
        Ok(params)
    }

    /// Load the configured input as a luminance grid.
    pub fn load_grid(&self) -> Result<LuminanceGrid, String> {
        match self.resolved_input_format() {
            InputFormat::Csv => load_csv_grid(&self.input),
            InputFormat::Image => load_grayscale_grid(&self.input),
        }
    }
}

pub fn parse_config(text: &str) -> Result<DetectConfig, String> {
    serde_json::from_str(text).map_err(|e| format!("Failed to parse config: {e}"))
}

pub fn load_config(path: &Path) -> Result<DetectConfig, String> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&contents)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn minimal_config_uses_defaults() {
        let cfg = parse_config(r#"{ "input": "grid.csv", "luminance": { "min_nits": 408.5 } }"#)
            .expect("valid config");
        assert_eq!(cfg.resolved_input_format(), InputFormat::Csv);
        assert_eq!(cfg.output.format, OutputFormat::Text);
        let params = cfg.detector_params().expect("valid params");
        assert_relative_eq!(params.min_luminance, 2.0);
        assert_eq!(params.headset_fov, HeadsetFov::default());
    }

    #[test]
    fn explicit_sections_override_defaults() {
        let cfg = parse_config(
            r#"{
                "input": "capture.png",
                "input_format": "image",
                "luminance": { "min_nits": 100.0, "nits_per_unit": 1.0 },
                "headset_fov": { "horizontal_deg": 90.0, "vertical_deg": 60.0 },
                "acceptance": { "min_width_deg": 20.0, "min_height_deg": 15.0 },
                "output": { "format": "both", "json_out": "out/report.json" }
            }"#,
        )
        .expect("valid config");
        let params = cfg.detector_params().unwrap();
        assert_relative_eq!(params.min_luminance, 100.0);
        assert_relative_eq!(params.headset_fov.vertical_deg, 60.0);
        assert_relative_eq!(params.acceptance.min_height_deg, 15.0);
        assert!(cfg.output.format.includes_text());
        assert!(cfg.output.format.includes_json());
        assert_eq!(
            cfg.output.json_out.as_deref(),
            Some(Path::new("out/report.json"))
        );
    }

    #[test]
    fn non_positive_unit_scale_is_rejected() {
        let cfg = parse_config(
            r#"{ "input": "a.csv", "luminance": { "min_nits": 1.0, "nits_per_unit": 0.0 } }"#,
        )
        .unwrap();
        let err = cfg.detector_params().unwrap_err();
        assert!(err.contains("nits_per_unit"), "{err}");
    }

    #[test]
    fn format_is_inferred_from_extension() {
        assert_eq!(InputFormat::from_path(Path::new("x.CSV")), InputFormat::Csv);
        assert_eq!(InputFormat::from_path(Path::new("x.txt")), InputFormat::Csv);
        assert_eq!(InputFormat::from_path(Path::new("x.png")), InputFormat::Image);
        assert_eq!(InputFormat::from_path(Path::new("noext")), InputFormat::Image);
    }
}
