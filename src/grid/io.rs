//! I/O helpers for luminance grids, masks and JSON.
//!
//! - `parse_csv_grid` / `load_csv_grid`: comma-delimited text, one row per line.
//! - `load_grayscale_grid`: read a PNG/JPEG/TIFF/etc. as luma samples at source depth.
//! - `save_mask_png`: write a binary mask as a black/white PNG.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::{BinaryGrid, GridView, LuminanceGrid};
use image::{ColorType, GrayImage, Luma};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Parse comma-delimited text into a luminance grid.
///
/// A leading UTF-8 byte-order mark is ignored. Blank lines are skipped; every
/// other line must hold the same number of numeric fields.
pub fn parse_csv_grid(text: &str) -> Result<LuminanceGrid, String> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut rows = Vec::new();
    for (line_idx, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let row = line
            .split(',')
            .enumerate()
            .map(|(col_idx, field)| {
                let field = field.trim();
                field.parse::<f64>().map_err(|e| {
                    format!(
                        "line {} column {}: cannot parse {:?} as a number ({e})",
                        line_idx + 1,
                        col_idx + 1,
                        field
                    )
                })
            })
            .collect::<Result<Vec<f64>, String>>()?;
        rows.push(row);
    }
    LuminanceGrid::from_rows(rows).map_err(|e| e.to_string())
}

/// Read a comma-delimited luminance file.
pub fn load_csv_grid(path: &Path) -> Result<LuminanceGrid, String> {
    let text = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {e}", path.display()))?;
    parse_csv_grid(&text).map_err(|e| format!("Failed to parse {}: {e}", path.display()))
}

/// Load an image from disk and expose its luma channel as luminance.
///
/// Samples keep the source depth: `[0, 255]` for 8-bit images, `[0, 65535]`
/// for 16-bit ones, and unscaled values for floating-point images.
pub fn load_grayscale_grid(path: &Path) -> Result<LuminanceGrid, String> {
    let img = image::open(path).map_err(|e| format!("Failed to open {}: {e}", path.display()))?;
    let (width, height) = (img.width() as usize, img.height() as usize);
    let data: Vec<f64> = match img.color() {
        ColorType::L16 | ColorType::La16 | ColorType::Rgb16 | ColorType::Rgba16 => img
            .into_luma16()
            .into_raw()
            .into_iter()
            .map(f64::from)
            .collect(),
        ColorType::Rgb32F | ColorType::Rgba32F => img
            .to_luma32f()
            .into_raw()
            .into_iter()
            .map(f64::from)
            .collect(),
        _ => img.into_luma8().into_raw().into_iter().map(f64::from).collect(),
    };
    LuminanceGrid::from_vec(width, height, data)
        .map_err(|e| format!("Failed to load {}: {e}", path.display()))
}

/// Save a mask as a PNG: bright cells white, dark cells black.
pub fn save_mask_png(mask: &BinaryGrid, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let mut out = GrayImage::new(mask.width() as u32, mask.height() as u32);
    for (y, row) in mask.rows().enumerate() {
        for (x, &bright) in row.iter().enumerate() {
            let v = if bright { 255u8 } else { 0u8 };
            out.put_pixel(x as u32, y as u32, Luma([v]));
        }
    }
    out.save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
