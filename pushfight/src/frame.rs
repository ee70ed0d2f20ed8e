use engine::geometry::Point;
use engine::graphics::Renderer2d;

use crate::appearance::{Palette, ShapeKind, appearance_for_code};
use crate::cell::CellState;
use crate::coords::{BoardGeometry, Cell};
use crate::drag::{DragCandidate, PointerState, drag_candidate};
use crate::painter::{paint_cell, paint_empty, paint_grid};
use crate::snapshot::BoardSnapshot;

/// What a frame ended up drawing, for callers and tests that care.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameReport {
    /// The piece drawn last, floating at the drag offset.
    pub deferred: Option<DragCandidate>,
    /// Cells whose code was not a known state (drawn as boundary).
    pub unknown_cells: usize,
}

/// Draws one full frame: background, grid, every cell, then the dragged piece on top.
///
/// The dragged piece's home square is painted empty during the cell pass and again right
/// before the piece itself, so the piece is above its own background and above whatever
/// cell it hovers over. At most one piece is deferred: the one under the press point, looked
/// up in `snapshot`.
pub fn render_frame(
    gfx: &mut dyn Renderer2d,
    snapshot: &BoardSnapshot<'_>,
    pointer: PointerState,
    cell_size: u32,
    palette: &Palette,
) -> FrameReport {
    let geometry = snapshot.geometry(cell_size);

    gfx.clear(palette.background);
    paint_grid(gfx, &geometry, palette);

    let candidate = drag_candidate(snapshot, pointer, &geometry);
    let mut unknown_cells = 0;

    for (cell, code) in snapshot.iter() {
        if CellState::try_from(code).is_err() {
            unknown_cells += 1;
        }
        if candidate.is_some_and(|c| c.cell == cell) {
            paint_empty(gfx, &geometry, palette, cell);
            continue;
        }
        paint_in_place(gfx, &geometry, palette, cell, code);
    }

    if let Some(c) = candidate {
        paint_empty(gfx, &geometry, palette, c.cell);
        paint_cell(gfx, &geometry, palette, c.cell, c.state.code(), c.offset);
    }

    if unknown_cells > 0 {
        log::warn!("{unknown_cells} cell(s) had unknown codes; drawn as boundary");
    }

    FrameReport {
        deferred: candidate,
        unknown_cells,
    }
}

/// Discs leave the square's corners uncovered, so they sit on an empty square.
fn paint_in_place(
    gfx: &mut dyn Renderer2d,
    geometry: &BoardGeometry,
    palette: &Palette,
    cell: Cell,
    code: u8,
) {
    if appearance_for_code(code).shape == ShapeKind::Disc {
        paint_empty(gfx, geometry, palette, cell);
    }
    paint_cell(gfx, geometry, palette, cell, code, Point::ZERO);
}

#[cfg(test)]
mod tests {
    use engine::geometry::Rect;
    use engine::graphics::{CommandRecorder, DrawCommand};

    use super::*;

    const S: u32 = 30;

    fn rect_at(x: f32, y: f32) -> Rect {
        Rect::new(x, y, S as f32, S as f32)
    }

    #[test]
    fn idle_frame_draws_cells_in_row_major_order() {
        let cells = [
            CellState::BlackPusher.code(),
            CellState::Abyss.code(),
        ];
        let snapshot = BoardSnapshot::new(2, 1, &cells).unwrap();
        let palette = Palette::default();
        let mut gfx = CommandRecorder::new(snapshot.geometry(S).surface_size());

        let report = render_frame(&mut gfx, &snapshot, PointerState::default(), S, &palette);
        assert_eq!(report, FrameReport::default());

        let commands = gfx.commands();
        assert_eq!(
            commands[0],
            DrawCommand::Clear {
                color: palette.background
            }
        );
        let lines = commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Line { .. }))
            .count();
        assert_eq!(lines, 3 + 2);
        assert_eq!(
            &commands[commands.len() - 2..],
            &[
                DrawCommand::Rect {
                    rect: rect_at(1.0, 1.0),
                    color: palette.black
                },
                DrawCommand::Rect {
                    rect: rect_at(32.0, 1.0),
                    color: palette.boundary
                },
            ]
        );
    }

    #[test]
    fn disc_sits_on_an_empty_square() {
        let cells = [CellState::WhiteMover.code()];
        let snapshot = BoardSnapshot::new(1, 1, &cells).unwrap();
        let palette = Palette::default();
        let mut gfx = CommandRecorder::new(snapshot.geometry(S).surface_size());
        render_frame(&mut gfx, &snapshot, PointerState::default(), S, &palette);

        let commands = gfx.commands();
        assert_eq!(
            &commands[commands.len() - 2..],
            &[
                DrawCommand::Rect {
                    rect: rect_at(1.0, 1.0),
                    color: palette.empty
                },
                DrawCommand::Circle {
                    center: Point::new(16.0, 16.0),
                    radius: 15.0,
                    color: palette.white
                },
            ]
        );
    }

    #[test]
    fn dragged_piece_is_drawn_last_at_its_offset() {
        let cells = [
            CellState::WhitePusher.code(),
            CellState::Empty.code(),
            CellState::Empty.code(),
            CellState::BlackMover.code(),
        ];
        let snapshot = BoardSnapshot::new(2, 2, &cells).unwrap();
        let palette = Palette::default();
        let mut gfx = CommandRecorder::new(snapshot.geometry(S).surface_size());
        let pointer = PointerState {
            down: Some(Point::new(10.0, 10.0)),
            current: Some(Point::new(40.0, 10.0)),
        };

        let report = render_frame(&mut gfx, &snapshot, pointer, S, &palette);
        let deferred = report.deferred.expect("white pusher should be dragged");
        assert_eq!(deferred.cell, Cell::new(0, 0));
        assert_eq!(deferred.offset, Point::new(30.0, 0.0));

        let commands = gfx.commands();
        let tail = &commands[commands.len() - 2..];
        assert_eq!(
            tail,
            &[
                DrawCommand::Rect {
                    rect: rect_at(1.0, 1.0),
                    color: palette.empty
                },
                DrawCommand::Rect {
                    rect: rect_at(31.0, 1.0),
                    color: palette.white
                },
            ]
        );

        // The only white fill in the frame is the floating piece.
        let whites = commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Rect { color, .. } if *color == palette.white))
            .count();
        assert_eq!(whites, 1);
    }

    #[test]
    fn press_on_empty_square_defers_nothing() {
        let cells = [CellState::Empty.code(), CellState::WhitePusher.code()];
        let snapshot = BoardSnapshot::new(2, 1, &cells).unwrap();
        let palette = Palette::default();
        let mut gfx = CommandRecorder::new(snapshot.geometry(S).surface_size());

        // Pointer pressed on the empty square and then moved over the pusher.
        let pointer = PointerState {
            down: Some(Point::new(10.0, 10.0)),
            current: Some(Point::new(40.0, 10.0)),
        };
        let report = render_frame(&mut gfx, &snapshot, pointer, S, &palette);
        assert_eq!(report.deferred, None);
        assert_eq!(
            gfx.commands().last(),
            Some(&DrawCommand::Rect {
                rect: rect_at(32.0, 1.0),
                color: palette.white
            })
        );
    }

    #[cfg(not(debug_assertions))]
    #[test]
    fn unknown_codes_are_counted() {
        let cells = [42u8, CellState::Empty.code()];
        let snapshot = BoardSnapshot::new(2, 1, &cells).unwrap();
        let mut gfx = CommandRecorder::new(snapshot.geometry(S).surface_size());
        let report = render_frame(
            &mut gfx,
            &snapshot,
            PointerState::default(),
            S,
            &Palette::default(),
        );
        assert_eq!(report.unknown_cells, 1);
    }
}
