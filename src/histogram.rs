//! Largest rectangle under a histogram, via a monotonic index stack.
//!
//! The stack holds bar indices whose heights are non-decreasing from bottom to
//! top. When a shorter bar arrives, every taller bar on the stack has found its
//! right boundary; popping it yields the widest rectangle limited by that bar.
//! Each index is pushed and popped once, so a scan is O(n).

/// Best rectangle under a histogram.
///
/// `area == 0` means the histogram had no positive bar; all fields are then 0.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HistogramRect {
    pub area: usize,
    /// Index of the leftmost bar covered.
    pub start: usize,
    /// Limiting (minimum) bar height across the covered range.
    pub height: usize,
    pub width: usize,
}

/// Largest-area rectangle under `heights`.
///
/// Ties keep the first maximum found in scan order.
pub fn max_rect_under_histogram(heights: &[usize]) -> HistogramRect {
    let mut stack = Vec::with_capacity(heights.len());
    max_rect_under_histogram_with(heights, &mut stack)
}

/// Same as [`max_rect_under_histogram`] but reuses a caller-owned stack buffer.
pub(crate) fn max_rect_under_histogram_with(
    heights: &[usize],
    stack: &mut Vec<usize>,
) -> HistogramRect {
    stack.clear();
    let mut best = HistogramRect::default();
    for (i, &h) in heights.iter().enumerate() {
        while stack.last().is_some_and(|&top| h < heights[top]) {
            pop_and_measure(heights, stack, i, &mut best);
        }
        stack.push(i);
    }
    while !stack.is_empty() {
        pop_and_measure(heights, stack, heights.len(), &mut best);
    }
    best
}

/// Pop the stack top and score the rectangle it limits, ending before `right`.
#[inline]
fn pop_and_measure(heights: &[usize], stack: &mut Vec<usize>, right: usize, best: &mut HistogramRect) {
    let Some(top) = stack.pop() else {
        return;
    };
    let left = stack.last().map_or(0, |&prev| prev + 1);
    let width = right - left;
    let area = heights[top] * width;
    if area > best.area {
        *best = HistogramRect {
            area,
            start: left,
            height: heights[top],
            width,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::prelude::*;

    fn brute_force(heights: &[usize]) -> usize {
        let n = heights.len();
        let mut best = 0;
        for l in 0..n {
            let mut min_h = usize::MAX;
            for r in l..n {
                min_h = min_h.min(heights[r]);
                best = best.max(min_h * (r - l + 1));
            }
        }
        best
    }

    #[test]
    fn classic_histogram() {
        let rect = max_rect_under_histogram(&[2, 1, 5, 6, 2, 3]);
        assert_eq!(
            rect,
            HistogramRect {
                area: 10,
                start: 2,
                height: 5,
                width: 2
            }
        );
    }

    #[test]
    fn empty_and_flat_zero_histograms_yield_nothing() {
        assert_eq!(max_rect_under_histogram(&[]), HistogramRect::default());
        assert_eq!(max_rect_under_histogram(&[0, 0, 0]), HistogramRect::default());
    }

    #[test]
    fn uniform_bars_span_everything() {
        let rect = max_rect_under_histogram(&[3, 3, 3, 3]);
        assert_eq!(rect.area, 12);
        assert_eq!(rect.start, 0);
        assert_eq!(rect.height, 3);
        assert_eq!(rect.width, 4);
    }

    #[test]
    fn ties_keep_the_first_rectangle_found() {
        // Two disjoint bars of equal area; the left one is popped first.
        let rect = max_rect_under_histogram(&[2, 0, 2]);
        assert_eq!(rect.area, 2);
        assert_eq!(rect.start, 0);
    }

    #[test]
    fn drained_bar_uses_full_length_as_right_edge() {
        let rect = max_rect_under_histogram(&[0, 1, 1, 1]);
        assert_eq!(rect.area, 3);
        assert_eq!(rect.start, 1);
        assert_eq!(rect.width, 3);
        assert_eq!(rect.height, 1);
    }

    #[test]
    fn matches_brute_force_on_random_histograms() {
        let mut rng = StdRng::seed_from_u64(2024);
        let mut stack = Vec::new();
        for _ in 0..2000 {
            let n = rng.gen_range(0..=12);
            let heights: Vec<usize> = (0..n).map(|_| rng.gen_range(0..=6)).collect();
            let rect = max_rect_under_histogram_with(&heights, &mut stack);
            assert_eq!(rect.area, brute_force(&heights), "heights={heights:?}");
            if rect.area > 0 {
                assert_eq!(rect.area, rect.height * rect.width);
                let covered = &heights[rect.start..rect.start + rect.width];
                assert_eq!(covered.iter().copied().min(), Some(rect.height));
            }
        }
    }
}
