//! Grid space → report space.
//!
//! This is the only place where the top-down row index is flipped into the
//! bottom-up Cartesian `y`, and where cell counts become degrees.
use super::params::HeadsetFov;
use crate::types::{AngularExtent, Rectangle, ReportPoint};

/// Report-space placement of a rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placement {
    pub top_left: ReportPoint,
    pub center: ReportPoint,
}

/// Flip `rect` into report space for a grid with `grid_rows` rows.
///
/// The centre uses integer halving, so even sizes round toward the bottom-right.
pub fn project(rect: &Rectangle, grid_rows: usize) -> Placement {
    let top = grid_rows - (rect.top_left.y + 1);
    Placement {
        top_left: ReportPoint {
            x: rect.top_left.x,
            y: top,
        },
        center: ReportPoint {
            x: rect.top_left.x + rect.width / 2,
            y: top - rect.height / 2,
        },
    }
}

/// Angular size of `rect` as a linear fraction of the headset FOV.
pub fn angular_extent(
    rect: &Rectangle,
    grid_cols: usize,
    grid_rows: usize,
    fov: &HeadsetFov,
) -> AngularExtent {
    AngularExtent {
        horizontal_deg: fov.horizontal_deg * (rect.width as f64 / grid_cols as f64),
        vertical_deg: fov.vertical_deg * (rect.height as f64 / grid_rows as f64),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::GridPoint;
    use approx::assert_relative_eq;

    #[test]
    fn full_grid_maps_to_bottom_origin_top_row() {
        let rect = Rectangle::new(GridPoint { x: 0, y: 0 }, 4, 5);
        let placed = project(&rect, 4);
        assert_eq!(placed.top_left, ReportPoint { x: 0, y: 3 });
        assert_eq!(placed.center, ReportPoint { x: 2, y: 1 });
    }

    #[test]
    fn bottom_row_maps_to_zero() {
        let rect = Rectangle::new(GridPoint { x: 3, y: 9 }, 1, 1);
        let placed = project(&rect, 10);
        assert_eq!(placed.top_left, ReportPoint { x: 3, y: 0 });
        assert_eq!(placed.center, ReportPoint { x: 3, y: 0 });
    }

    #[test]
    fn extent_is_a_linear_fraction_of_the_headset_fov() {
        let fov = HeadsetFov {
            horizontal_deg: 90.0,
            vertical_deg: 60.0,
        };
        let rect = Rectangle::new(GridPoint { x: 1, y: 1 }, 3, 4);
        let extent = angular_extent(&rect, 8, 12, &fov);
        assert_relative_eq!(extent.horizontal_deg, 45.0);
        assert_relative_eq!(extent.vertical_deg, 15.0);
    }
}
