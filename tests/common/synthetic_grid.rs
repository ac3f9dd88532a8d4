use rand::rngs::StdRng;
use rand::Rng;
use rect_detector::LuminanceGrid;

/// Luminance used for bright cells in the synthetic grids.
pub const BRIGHT: f64 = 250.0;

/// Build a grid from rows of `#` (bright) and `.` (dark) characters.
pub fn grid_from_art(rows: &[&str]) -> LuminanceGrid {
    let rows = rows
        .iter()
        .map(|row| {
            row.chars()
                .map(|c| if c == '#' { BRIGHT } else { 0.0 })
                .collect::<Vec<f64>>()
        })
        .collect();
    LuminanceGrid::from_rows(rows).expect("art rows must be rectangular")
}

/// Dark `width`×`height` grid with bright blocks given as `(x, y, w, h)` in
/// top-down grid coordinates.
pub fn grid_with_blocks(
    width: usize,
    height: usize,
    blocks: &[(usize, usize, usize, usize)],
) -> LuminanceGrid {
    let mut data = vec![0.0; width * height];
    for &(x0, y0, bw, bh) in blocks {
        for y in y0..(y0 + bh).min(height) {
            for x in x0..(x0 + bw).min(width) {
                data[y * width + x] = BRIGHT;
            }
        }
    }
    LuminanceGrid::from_vec(width, height, data).expect("non-empty grid")
}

/// Random grid with roughly `fill` of its cells bright.
pub fn random_grid(rng: &mut StdRng, width: usize, height: usize, fill: f64) -> LuminanceGrid {
    let data = (0..width * height)
        .map(|_| if rng.gen_bool(fill) { BRIGHT } else { rng.gen_range(0.0..BRIGHT * 0.5) })
        .collect();
    LuminanceGrid::from_vec(width, height, data).expect("non-empty grid")
}
