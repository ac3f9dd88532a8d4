//! Grid containers used by the detector.
//!
//! - [`LuminanceGrid`]: validated, read-only real-valued samples (e.g. nits).
//! - [`BinaryGrid`]: the bright/dark mask derived from a luminance grid; the
//!   extraction driver clears rectangles from it in place.
//! - [`io`]: loaders for CSV and raster sources plus debug exports.
pub mod binary;
pub mod io;
pub mod luminance;
pub mod traits;

pub use self::binary::BinaryGrid;
pub use self::luminance::LuminanceGrid;
pub use self::traits::{GridView, GridViewMut, Rows};
