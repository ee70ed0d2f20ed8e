//! Two-character text notation for boards.
//!
//! ```text
//! ======__BPWm____====
//! ==______BmWP______==
//! ```
//!
//! `WP`/`Wm` white pusher/mover, `BP`/`Bm` black pusher/mover, `W#`/`B#` anchored pushers,
//! `__` empty, `==` abyss. One line per row.

use std::fmt;

use crate::cell::CellState;
use crate::error::NotationError;
use crate::snapshot::BoardSnapshot;

pub fn code_of(state: CellState) -> &'static str {
    match state {
        CellState::WhitePusher => "WP",
        CellState::WhiteMover => "Wm",
        CellState::BlackPusher => "BP",
        CellState::BlackMover => "Bm",
        CellState::Empty => "__",
        CellState::Abyss => "==",
        CellState::AnchoredWhitePusher => "W#",
        CellState::AnchoredBlackPusher => "B#",
    }
}

pub fn state_of(code: &str) -> Option<CellState> {
    CellState::ALL.into_iter().find(|s| code_of(*s) == code)
}

/// A parsed board: `(width, height, cells)` with cells row-major.
pub type ParsedBoard = (u32, u32, Vec<u8>);

/// Parses notation text. Blank lines and whitespace around each row are ignored.
pub fn parse_board(text: &str) -> Result<ParsedBoard, NotationError> {
    let rows: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    if rows.is_empty() {
        return Err(NotationError::Empty);
    }

    let mut width = None;
    let mut cells = Vec::new();
    for (row, line) in rows.iter().enumerate() {
        let chars: Vec<char> = line.chars().collect();
        if chars.len() % 2 != 0 {
            return Err(NotationError::OddRow {
                row,
                len: chars.len(),
            });
        }

        let count = chars.len() / 2;
        match width {
            None => width = Some(count),
            Some(expected) if expected != count => {
                return Err(NotationError::RaggedRow {
                    row,
                    expected,
                    actual: count,
                });
            }
            Some(_) => {}
        }

        for (col, pair) in chars.chunks(2).enumerate() {
            let code: String = pair.iter().collect();
            let state = state_of(&code).ok_or(NotationError::UnknownCode { row, col, code })?;
            cells.push(state.code());
        }
    }

    let width = width.unwrap_or(0) as u32;
    let height = rows.len() as u32;
    // Reuse the snapshot checks so a parsed board is always a valid snapshot.
    BoardSnapshot::new(width, height, &cells)?;
    Ok((width, height, cells))
}

impl fmt::Display for BoardSnapshot<'_> {
    /// Unknown codes print as `??`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells().chunks(self.width() as usize).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for &code in row {
                let text = CellState::try_from(code).map(code_of).unwrap_or("??");
                f.write_str(text)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_unique_and_two_chars() {
        for state in CellState::ALL {
            assert_eq!(code_of(state).len(), 2);
            assert_eq!(state_of(code_of(state)), Some(state));
        }
        assert_eq!(state_of("??"), None);
    }

    #[test]
    fn parses_rows_ignoring_blank_lines_and_indent() {
        let text = "\n   WPWm\n\n  __==\n";
        let (w, h, cells) = parse_board(text).unwrap();
        assert_eq!((w, h), (2, 2));
        assert_eq!(cells, vec![0, 1, 4, 5]);
    }

    #[test]
    fn rejects_malformed_text() {
        assert_eq!(parse_board("  \n"), Err(NotationError::Empty));
        assert_eq!(
            parse_board("WP_"),
            Err(NotationError::OddRow { row: 0, len: 3 })
        );
        assert_eq!(
            parse_board("WPxx"),
            Err(NotationError::UnknownCode {
                row: 0,
                col: 1,
                code: "xx".to_string()
            })
        );
        assert_eq!(
            parse_board("WPWP\n__"),
            Err(NotationError::RaggedRow {
                row: 1,
                expected: 2,
                actual: 1
            })
        );
    }

    #[test]
    fn display_writes_one_line_per_row() {
        let cells = [6u8, 7, 9, 3];
        let snapshot = BoardSnapshot::new(2, 2, &cells).unwrap();
        assert_eq!(snapshot.to_string(), "W#B#\n??Bm");
    }
}
