use serde::{Deserialize, Serialize};

/// State of one board square, as laid out in the engine's cell buffer.
///
/// The discriminants are the byte values the engine writes; they must not change.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellState {
    WhitePusher = 0,
    WhiteMover = 1,
    BlackPusher = 2,
    BlackMover = 3,
    Empty = 4,
    Abyss = 5,
    AnchoredWhitePusher = 6,
    AnchoredBlackPusher = 7,
}

impl CellState {
    pub const ALL: [CellState; 8] = [
        CellState::WhitePusher,
        CellState::WhiteMover,
        CellState::BlackPusher,
        CellState::BlackMover,
        CellState::Empty,
        CellState::Abyss,
        CellState::AnchoredWhitePusher,
        CellState::AnchoredBlackPusher,
    ];

    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Any piece can be picked up; empty squares and the abyss cannot.
    pub const fn is_draggable(self) -> bool {
        !matches!(self, CellState::Empty | CellState::Abyss)
    }

    pub const fn is_anchored(self) -> bool {
        matches!(
            self,
            CellState::AnchoredWhitePusher | CellState::AnchoredBlackPusher
        )
    }
}

/// A byte in the cell buffer that is not a known `CellState`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("unknown cell code {0}")]
pub struct UnknownCellCode(pub u8);

impl TryFrom<u8> for CellState {
    type Error = UnknownCellCode;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        CellState::ALL
            .get(code as usize)
            .copied()
            .ok_or(UnknownCellCode(code))
    }
}

impl From<CellState> for u8 {
    fn from(state: CellState) -> u8 {
        state.code()
    }
}
