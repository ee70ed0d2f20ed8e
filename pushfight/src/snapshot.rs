use crate::cell::CellState;
use crate::coords::{BoardGeometry, Cell};
use crate::error::SnapshotError;

/// Read-only view of the engine's cell buffer for one frame.
///
/// The buffer is one byte per cell, row-major. The view borrows it, so it cannot be kept past
/// the next engine call that may reallocate the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardSnapshot<'a> {
    width: u32,
    height: u32,
    cells: &'a [u8],
}

impl<'a> BoardSnapshot<'a> {
    pub fn new(width: u32, height: u32, cells: &'a [u8]) -> Result<Self, SnapshotError> {
        if width == 0 || height == 0 {
            return Err(SnapshotError::EmptyBoard { width, height });
        }
        let expected = (width as usize).saturating_mul(height as usize);
        if cells.len() != expected {
            return Err(SnapshotError::LengthMismatch {
                width,
                height,
                expected,
                actual: cells.len(),
            });
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn cells(&self) -> &'a [u8] {
        self.cells
    }

    pub fn geometry(&self, cell_size: u32) -> BoardGeometry {
        BoardGeometry::new(self.width, self.height, cell_size)
    }

    /// `row * width + col` for in-range coordinates.
    pub fn index(&self, row: u32, col: u32) -> Option<usize> {
        (row < self.height && col < self.width)
            .then(|| row as usize * self.width as usize + col as usize)
    }

    /// Raw code at `cell`, decodable or not.
    pub fn code(&self, cell: Cell) -> Option<u8> {
        self.index(cell.row, cell.col).map(|i| self.cells[i])
    }

    /// Decoded state at `cell`; `None` when out of range or not a known code.
    pub fn state(&self, cell: Cell) -> Option<CellState> {
        self.code(cell).and_then(|code| CellState::try_from(code).ok())
    }

    /// Row-major `(cell, code)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Cell, u8)> + use<'a> {
        let width = self.width;
        self.cells.iter().enumerate().map(move |(i, &code)| {
            let cell = Cell::new(i as u32 / width, i as u32 % width);
            (cell, code)
        })
    }
}
