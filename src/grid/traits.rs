/// Read-only row access shared by the luminance and binary grids.
///
/// Grids are stored row-major with row 0 at the top; `row(y)` returns the
/// `width()` cells of row `y` from left to right.
pub trait GridView {
    type Cell: Copy;

    fn width(&self) -> usize;
    fn height(&self) -> usize;

    fn row(&self, y: usize) -> &[Self::Cell];

    fn rows(&self) -> Rows<'_, Self>
    where
        Self: Sized,
    {
        Rows { grid: self, y: 0 }
    }
}

pub trait GridViewMut: GridView {
    fn row_mut(&mut self, y: usize) -> &mut [Self::Cell];
}

pub struct Rows<'a, G: ?Sized + GridView> {
    grid: &'a G,
    y: usize,
}

impl<'a, G: GridView> Iterator for Rows<'a, G> {
    type Item = &'a [G::Cell];

    fn next(&mut self) -> Option<Self::Item> {
        if self.y >= self.grid.height() {
            return None;
        }
        let y = self.y;
        self.y += 1;
        Some(self.grid.row(y))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.grid.height().saturating_sub(self.y);
        (remaining, Some(remaining))
    }
}

impl<'a, G: GridView> ExactSizeIterator for Rows<'a, G> {}
