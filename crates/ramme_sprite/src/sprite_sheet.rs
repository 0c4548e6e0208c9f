use ramme_geometry::{Rect, Size};

/// Uniform-grid frame slicing for spritesheets laid out row-major.
///
/// Produces the rectangle lists [`Sprite::new`](crate::Sprite::new) takes,
/// so callers do not hand-write frame coordinates. Pure geometry: nothing
/// here touches pixel data or asset files.
#[derive(Clone, Copy, Debug)]
pub struct SpriteSheet {
    cell_size: Size<u32>,
    columns: u32,
    rows: u32,
}

impl SpriteSheet {
    /// Grid dimensions are derived by integer division; a ragged edge that
    /// does not fit a whole cell is ignored.
    pub fn new(texture_size: impl Into<Size<u32>>, cell_size: impl Into<Size<u32>>) -> Self {
        let texture_size = texture_size.into();
        let cell_size = cell_size.into();

        Self {
            cell_size,
            columns: texture_size.w / cell_size.w,
            rows: texture_size.h / cell_size.h,
        }
    }

    pub fn columns(&self) -> u32 {
        self.columns
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// The rectangle of a single cell.
    pub fn cell(&self, column: u32, row: u32) -> Rect<u32> {
        Rect::new(
            column * self.cell_size.w,
            row * self.cell_size.h,
            self.cell_size.w,
            self.cell_size.h,
        )
    }

    /// All cells of one row, left to right.
    pub fn row(&self, row: u32) -> Vec<Rect<u32>> {
        (0..self.columns).map(|c| self.cell(c, row)).collect()
    }

    /// The first `count` cells in row-major order, wrapping to the next row
    /// after the last column.
    pub fn cells(&self, count: u32) -> Vec<Rect<u32>> {
        (0..count)
            .map(|i| self.cell(i % self.columns, i / self.columns))
            .collect()
    }

    /// Every cell of the grid in row-major order.
    pub fn all(&self) -> Vec<Rect<u32>> {
        self.cells(self.columns * self.rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slices_a_row_strip() {
        let sheet = SpriteSheet::new((48, 16), (16, 16));
        assert_eq!(sheet.columns(), 3);
        assert_eq!(sheet.rows(), 1);
        assert_eq!(
            sheet.all(),
            vec![
                Rect::new(0, 0, 16, 16),
                Rect::new(16, 0, 16, 16),
                Rect::new(32, 0, 16, 16),
            ]
        );
    }

    #[test]
    fn cells_wrap_row_major() {
        let sheet = SpriteSheet::new((32, 32), (16, 16));
        assert_eq!(
            sheet.cells(3),
            vec![
                Rect::new(0, 0, 16, 16),
                Rect::new(16, 0, 16, 16),
                Rect::new(0, 16, 16, 16),
            ]
        );
    }

    #[test]
    fn ragged_edges_are_ignored() {
        let sheet = SpriteSheet::new((50, 20), (16, 16));
        assert_eq!(sheet.columns(), 3);
        assert_eq!(sheet.rows(), 1);
    }

    #[test]
    fn row_selects_one_strip() {
        let sheet = SpriteSheet::new((32, 48), (16, 16));
        assert_eq!(
            sheet.row(2),
            vec![Rect::new(0, 32, 16, 16), Rect::new(16, 32, 16, 16)]
        );
    }
}
