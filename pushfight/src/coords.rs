//! Pixel ↔ board-cell mapping.
//!
//! Every cell is `cell_size` pixels square and framed by a 1-pixel gridline, so cells repeat
//! with a pitch of `cell_size + 1`. Pixel row/column `i * pitch` is gridline `i`; the cell
//! interior starts one pixel later.

use engine::geometry::{Point, Rect};
use engine::surface::SurfaceSize;
use serde::{Deserialize, Serialize};

/// An in-bounds board coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub row: u32,
    pub col: u32,
}

impl Cell {
    pub const fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }
}

/// Maps a pixel to the `(row, col)` it falls in. Not bounds-checked: the result can be
/// negative or past the board.
pub fn cell_of_pixel(p: Point, cell_size: u32) -> (i64, i64) {
    let pitch = (cell_size as f32) + 1.0;
    let row = (p.y / pitch).floor() as i64;
    let col = (p.x / pitch).floor() as i64;
    (row, col)
}

/// Top-left interior pixel of a cell.
pub fn pixel_of_cell(row: u32, col: u32, cell_size: u32) -> Point {
    let pitch = cell_size as f32 + 1.0;
    Point::new(col as f32 * pitch + 1.0, row as f32 * pitch + 1.0)
}

/// Smallest cell a geometry will lay out. At size 1 the point one pixel inside a cell's
/// origin is already the next gridline.
pub const MIN_GEOMETRY_CELL_SIZE: u32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardGeometry {
    pub width: u32,
    pub height: u32,
    pub cell_size: u32,
}

impl BoardGeometry {
    pub fn new(width: u32, height: u32, cell_size: u32) -> Self {
        Self {
            width,
            height,
            cell_size: cell_size.max(MIN_GEOMETRY_CELL_SIZE),
        }
    }

    pub fn pitch(&self) -> u32 {
        self.cell_size.saturating_add(1)
    }

    /// Surface that fits every cell plus the closing gridlines on the right and bottom.
    pub fn surface_size(&self) -> SurfaceSize {
        SurfaceSize::new(
            self.pitch().saturating_mul(self.width).saturating_add(1),
            self.pitch().saturating_mul(self.height).saturating_add(1),
        )
    }

    pub fn contains(&self, row: i64, col: i64) -> bool {
        row >= 0 && col >= 0 && row < self.height as i64 && col < self.width as i64
    }

    /// The in-bounds cell under `p`, if any.
    pub fn cell_at(&self, p: Point) -> Option<Cell> {
        let (row, col) = cell_of_pixel(p, self.cell_size);
        self.contains(row, col)
            .then(|| Cell::new(row as u32, col as u32))
    }

    pub fn cell_origin(&self, cell: Cell) -> Point {
        pixel_of_cell(cell.row, cell.col, self.cell_size)
    }

    pub fn cell_rect(&self, cell: Cell) -> Rect {
        let origin = self.cell_origin(cell);
        let s = self.cell_size as f32;
        Rect::new(origin.x, origin.y, s, s)
    }

    pub fn cell_center(&self, cell: Cell) -> Point {
        self.cell_rect(cell).center()
    }

    /// Center of the pixel column/row holding gridline `i`.
    pub fn gridline(&self, i: u32) -> f32 {
        (i * self.pitch()) as f32 + 0.5
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + use<> {
        let (width, height) = (self.width, self.height);
        (0..height).flat_map(move |row| (0..width).map(move |col| Cell::new(row, col)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_interior_round_trips() {
        for s in [2u32, 3, 7, 30, 100] {
            let geometry = BoardGeometry::new(10, 4, s);
            for cell in geometry.cells() {
                let p = pixel_of_cell(cell.row, cell.col, s);
                let inside = Point::new(p.x + 1.0, p.y + 1.0);
                assert_eq!(
                    cell_of_pixel(inside, s),
                    (cell.row as i64, cell.col as i64),
                    "cell size {s}, cell {cell:?}"
                );
                assert_eq!(geometry.cell_at(inside), Some(cell));
            }
        }
    }

    #[test]
    fn pixel_of_cell_skips_the_gridline() {
        assert_eq!(pixel_of_cell(0, 0, 30), Point::new(1.0, 1.0));
        assert_eq!(pixel_of_cell(0, 1, 30), Point::new(32.0, 1.0));
        assert_eq!(pixel_of_cell(2, 3, 100), Point::new(304.0, 203.0));
    }

    #[test]
    fn cell_of_pixel_floors_and_does_not_clamp() {
        assert_eq!(cell_of_pixel(Point::new(15.0, 15.0), 30), (0, 0));
        assert_eq!(cell_of_pixel(Point::new(45.0, 15.0), 30), (0, 1));
        assert_eq!(cell_of_pixel(Point::new(-0.5, 10.0), 30), (0, -1));
        assert_eq!(cell_of_pixel(Point::new(10.0, 500.0), 30), (16, 0));
    }

    #[test]
    fn cell_at_discards_out_of_bounds() {
        let geometry = BoardGeometry::new(2, 2, 30);
        assert_eq!(geometry.cell_at(Point::new(40.0, 40.0)), Some(Cell::new(1, 1)));
        assert_eq!(geometry.cell_at(Point::new(-1.0, 10.0)), None);
        assert_eq!(geometry.cell_at(Point::new(62.0, 10.0)), None);
        assert_eq!(geometry.cell_at(Point::new(10.0, 62.0)), None);
    }

    #[test]
    fn surface_size_matches_canvas_sizing() {
        let geometry = BoardGeometry::new(10, 4, 100);
        assert_eq!(geometry.surface_size(), SurfaceSize::new(1011, 405));
    }

    #[test]
    fn cells_are_row_major() {
        let geometry = BoardGeometry::new(3, 2, 10);
        let cells: Vec<_> = geometry.cells().collect();
        assert_eq!(cells.len(), 6);
        assert_eq!(cells[0], Cell::new(0, 0));
        assert_eq!(cells[2], Cell::new(0, 2));
        assert_eq!(cells[3], Cell::new(1, 0));
    }

    #[test]
    fn tiny_cell_sizes_are_raised_to_the_minimum() {
        assert_eq!(BoardGeometry::new(1, 1, 0).cell_size, MIN_GEOMETRY_CELL_SIZE);
        assert_eq!(BoardGeometry::new(1, 1, 1).cell_size, MIN_GEOMETRY_CELL_SIZE);
        assert_eq!(BoardGeometry::new(1, 1, 2).cell_size, 2);
    }

    #[test]
    fn size_one_interior_offset_lands_on_the_next_gridline() {
        // Pitch 2: the cell origin is (1, 1) and one pixel further is gridline 1.
        let p = pixel_of_cell(0, 0, 1);
        assert_eq!(p, Point::new(1.0, 1.0));
        assert_eq!(cell_of_pixel(Point::new(p.x + 1.0, p.y + 1.0), 1), (1, 1));
        assert_eq!(cell_of_pixel(p, 1), (0, 0));
    }

    #[test]
    fn surface_size_saturates_on_huge_boards() {
        let geometry = BoardGeometry::new(u32::MAX, 3, 100);
        assert_eq!(geometry.surface_size(), SurfaceSize::new(u32::MAX, 304));
        assert_eq!(BoardGeometry::new(1, 1, u32::MAX).pitch(), u32::MAX);
    }
}
