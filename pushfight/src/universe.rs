//! The engine boundary.
//!
//! The presentation layer only ever reads `width`/`height`/`cells` and calls `try_move`; the
//! rules behind `try_move` are the engine's business.

use crate::cell::CellState;
use crate::error::{NotationError, SnapshotError};
use crate::notation::parse_board;
use crate::snapshot::BoardSnapshot;

pub trait Universe {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// Row-major cell codes, `width * height` bytes.
    fn cells(&self) -> &[u8];

    /// Asks the engine to move the occupant of the start square to the end square.
    ///
    /// Returns whether the engine applied the move. Callers do not retry.
    fn try_move(&mut self, start_row: u32, start_col: u32, end_row: u32, end_col: u32) -> bool;

    fn snapshot(&self) -> Result<BoardSnapshot<'_>, SnapshotError> {
        BoardSnapshot::new(self.width(), self.height(), self.cells())
    }
}

/// Stand-in engine: a piece may be moved onto any empty square. No pushes, no turns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SandboxBoard {
    width: u32,
    height: u32,
    cells: Vec<u8>,
}

const OPENING_WIDTH: u32 = 10;
const OPENING_HEIGHT: u32 = 4;

#[rustfmt::skip]
const OPENING: [CellState; 40] = {
    use CellState::{Abyss as X, BlackMover as Bm, BlackPusher as Bp, Empty as E};
    use CellState::{WhiteMover as Wm, WhitePusher as Wp};
    [
        X, X, X,  E, Bp, Wm, E, E,  X, X,
        X, E, E,  E, Bm, Wp, E, E,  E, X,
        X, E, Bp, E, Bm, Wp, E, Wp, E, X,
        X, X, E,  E, Bp, Wm, E, X,  X, X,
    ]
};

impl SandboxBoard {
    pub fn new(width: u32, height: u32, cells: Vec<u8>) -> Result<Self, SnapshotError> {
        BoardSnapshot::new(width, height, &cells)?;
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// The standard 10x4 opening position.
    pub fn starting_layout() -> Self {
        Self {
            width: OPENING_WIDTH,
            height: OPENING_HEIGHT,
            cells: OPENING.iter().map(|s| s.code()).collect(),
        }
    }

    pub fn from_notation(text: &str) -> Result<Self, NotationError> {
        let (width, height, cells) = parse_board(text)?;
        Ok(Self::new(width, height, cells)?)
    }

    fn index(&self, row: u32, col: u32) -> Option<usize> {
        (row < self.height && col < self.width)
            .then(|| row as usize * self.width as usize + col as usize)
    }
}

impl Universe for SandboxBoard {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn cells(&self) -> &[u8] {
        &self.cells
    }

    fn try_move(&mut self, start_row: u32, start_col: u32, end_row: u32, end_col: u32) -> bool {
        let (Some(from), Some(to)) = (
            self.index(start_row, start_col),
            self.index(end_row, end_col),
        ) else {
            log::debug!("move ({start_row},{start_col})->({end_row},{end_col}) out of bounds");
            return false;
        };

        let piece = CellState::try_from(self.cells[from]).ok();
        let target = CellState::try_from(self.cells[to]).ok();
        match (piece, target) {
            (Some(piece), Some(CellState::Empty)) if piece.is_draggable() => {
                self.cells[to] = piece.code();
                self.cells[from] = CellState::Empty.code();
                log::debug!("moved {piece:?} ({start_row},{start_col})->({end_row},{end_col})");
                true
            }
            _ => {
                log::debug!("move ({start_row},{start_col})->({end_row},{end_col}) rejected");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_is_ten_by_four() {
        let board = SandboxBoard::starting_layout();
        assert_eq!((board.width(), board.height()), (10, 4));
        assert_eq!(board.cells().len(), 40);

        let cells = board.cells();
        assert_eq!(cells[4], CellState::BlackPusher.code());
        assert_eq!(cells[5], CellState::WhiteMover.code());
        assert_eq!(cells[10], CellState::Abyss.code());
        assert_eq!(cells[22], CellState::BlackPusher.code());
        assert_eq!(cells[27], CellState::WhitePusher.code());
        assert_eq!(cells[37], CellState::Abyss.code());

        let count = |s: CellState| cells.iter().filter(|&&c| c == s.code()).count();
        assert_eq!(count(CellState::WhitePusher), 3);
        assert_eq!(count(CellState::BlackPusher), 3);
        assert_eq!(count(CellState::WhiteMover), 2);
        assert_eq!(count(CellState::BlackMover), 2);
    }

    #[test]
    fn opening_matches_its_notation() {
        let board = SandboxBoard::starting_layout();
        let text = board.snapshot().unwrap().to_string();
        assert_eq!(
            text,
            "======__BPWm____====\n\
             ==______BmWP______==\n\
             ==__BP__BmWP__WP__==\n\
             ====____BPWm__======"
        );
        assert_eq!(SandboxBoard::from_notation(&text).unwrap(), board);
    }

    #[test]
    fn piece_moves_onto_an_empty_square() {
        let mut board = SandboxBoard::from_notation("WP__").unwrap();
        assert!(board.try_move(0, 0, 0, 1));
        assert_eq!(board.cells(), &[4, 0]);
    }

    #[test]
    fn illegal_moves_leave_the_board_untouched() {
        let mut board = SandboxBoard::from_notation("WPBm\n__==").unwrap();
        let before = board.clone();

        assert!(!board.try_move(0, 0, 0, 1)); // occupied
        assert!(!board.try_move(0, 0, 1, 1)); // abyss
        assert!(!board.try_move(1, 0, 0, 0)); // nothing to move
        assert!(!board.try_move(0, 0, 5, 5)); // off the board
        assert_eq!(board, before);
    }

    #[test]
    fn snapshot_reflects_the_buffer() {
        let board = SandboxBoard::from_notation("B#Wm").unwrap();
        let snapshot = board.snapshot().unwrap();
        assert_eq!(snapshot.to_string(), "B#Wm");
    }

    #[test]
    fn rejects_inconsistent_buffers() {
        assert!(SandboxBoard::new(3, 1, vec![4, 4]).is_err());
    }
}
