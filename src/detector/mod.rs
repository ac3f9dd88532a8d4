//! Iterative extraction of bright rectangles.
//!
//! Overview
//! - Binarizes the luminance grid against `min_luminance`.
//! - Repeatedly asks the matrix solver for the largest all-bright rectangle.
//! - Maps it to report space (bottom-left origin) and to degrees of the
//!   headset field of view.
//! - Applies the acceptance policy: report and erase, erase silently, or stop.
//!
//! Modules
//! - [`params`] – configuration types used by the detector and CLI.
//! - [`projection`] – grid → report coordinate flip and FOV mapping.
//! - [`policy`] – the per-candidate [`Verdict`].
//! - `extraction` – the step-wise [`Extraction`] state machine.
//! - `pipeline` – the one-call [`RectDetector`].
//!
//! Key Ideas
//! - The search is greedy: each iteration takes the single largest remaining
//!   rectangle, with no global optimisation across iterations.
//! - A candidate failing only one axis is erased and the scan goes on; only a
//!   candidate failing both axes ends the run.

mod extraction;
pub mod params;
mod pipeline;
pub mod policy;
pub mod projection;

pub use extraction::{Extraction, Step};
pub use params::{AcceptanceThresholds, DetectorParams, HeadsetFov};
pub use pipeline::RectDetector;
pub use policy::Verdict;
pub use projection::Placement;
