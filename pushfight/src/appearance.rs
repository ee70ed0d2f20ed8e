use engine::surface::Color;
use serde::{Deserialize, Serialize};

use crate::cell::CellState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Square,
    Disc,
}

/// Fill role; the palette decides the actual color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    White,
    Black,
    Empty,
    Boundary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Appearance {
    pub shape: ShapeKind,
    pub tone: Tone,
    pub anchor_marker: bool,
}

impl Appearance {
    const fn new(shape: ShapeKind, tone: Tone, anchor_marker: bool) -> Self {
        Self {
            shape,
            tone,
            anchor_marker,
        }
    }
}

pub const BOUNDARY: Appearance = Appearance::new(ShapeKind::Square, Tone::Boundary, false);

pub const fn appearance(state: CellState) -> Appearance {
    use ShapeKind::{Disc, Square};

    match state {
        CellState::WhitePusher => Appearance::new(Square, Tone::White, false),
        CellState::WhiteMover => Appearance::new(Disc, Tone::White, false),
        CellState::BlackPusher => Appearance::new(Square, Tone::Black, false),
        CellState::BlackMover => Appearance::new(Disc, Tone::Black, false),
        CellState::Empty => Appearance::new(Square, Tone::Empty, false),
        CellState::Abyss => BOUNDARY,
        CellState::AnchoredWhitePusher => Appearance::new(Square, Tone::White, true),
        CellState::AnchoredBlackPusher => Appearance::new(Square, Tone::Black, true),
    }
}

/// Appearance of a raw buffer byte.
///
/// Unknown codes are a contract violation by the engine: debug builds assert, release builds
/// draw them as boundary so no square is left unpainted.
pub fn appearance_for_code(code: u8) -> Appearance {
    match CellState::try_from(code) {
        Ok(state) => appearance(state),
        Err(err) => {
            debug_assert!(false, "{err}");
            BOUNDARY
        }
    }
}

/// Radius of the anchor marker for a given cell size.
pub fn anchor_radius(cell_size: u32) -> f32 {
    (cell_size as f32 / 4.0).round()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub background: Color,
    pub grid: Color,
    pub empty: Color,
    pub white: Color,
    pub black: Color,
    pub boundary: Color,
    pub anchor: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: [255, 255, 255, 255],
            grid: [0xCC, 0xCC, 0xCC, 255],
            empty: [0x80, 0x80, 0x80, 255],
            white: [0xFF, 0xFF, 0xFF, 255],
            black: [0x00, 0x00, 0x00, 255],
            boundary: [0x00, 0x47, 0xAB, 255],
            anchor: [0xFF, 0x00, 0x00, 255],
        }
    }
}

impl Palette {
    pub fn tone(&self, tone: Tone) -> Color {
        match tone {
            Tone::White => self.white,
            Tone::Black => self.black,
            Tone::Empty => self.empty,
            Tone::Boundary => self.boundary,
        }
    }
}
