/// A cell buffer that does not describe a board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SnapshotError {
    #[error("board dimensions must be positive, got {width}x{height}")]
    EmptyBoard { width: u32, height: u32 },

    #[error("cell buffer holds {actual} bytes but a {width}x{height} board needs {expected}")]
    LengthMismatch {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
}

/// Text that is not a valid board in two-character notation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NotationError {
    #[error("board text has no rows")]
    Empty,

    #[error("row {row} has odd length {len}; every cell takes two characters")]
    OddRow { row: usize, len: usize },

    #[error("row {row}, column {col}: unknown cell code {code:?}")]
    UnknownCode { row: usize, col: usize, code: String },

    #[error("row {row} has {actual} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error(transparent)]
    Snapshot(#[from] SnapshotError),
}
