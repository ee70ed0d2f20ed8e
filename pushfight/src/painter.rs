use engine::geometry::Point;
use engine::graphics::Renderer2d;

use crate::appearance::{Palette, ShapeKind, anchor_radius, appearance_for_code};
use crate::cell::CellState;
use crate::coords::{BoardGeometry, Cell};

/// Draws `width + 1` vertical and `height + 1` horizontal hairlines across the board.
pub fn paint_grid(gfx: &mut dyn Renderer2d, geometry: &BoardGeometry, palette: &Palette) {
    let line_width = 1.0 / gfx.pixel_ratio();
    let size = geometry.surface_size();
    let (right, bottom) = (size.width as f32, size.height as f32);

    for i in 0..=geometry.width {
        let x = geometry.gridline(i);
        gfx.stroke_line(Point::new(x, 0.0), Point::new(x, bottom), line_width, palette.grid);
    }
    for j in 0..=geometry.height {
        let y = geometry.gridline(j);
        gfx.stroke_line(Point::new(0.0, y), Point::new(right, y), line_width, palette.grid);
    }
}

/// Draws one cell's appearance, shifted by `offset` (zero unless the cell is being dragged).
///
/// The anchor marker follows the same offset as the base shape.
pub fn paint_cell(
    gfx: &mut dyn Renderer2d,
    geometry: &BoardGeometry,
    palette: &Palette,
    cell: Cell,
    code: u8,
    offset: Point,
) {
    let look = appearance_for_code(code);
    let rect = geometry.cell_rect(cell).translate(offset);
    let fill = palette.tone(look.tone);

    match look.shape {
        ShapeKind::Disc => {
            gfx.fill_circle(rect.center(), geometry.cell_size as f32 / 2.0, fill);
        }
        ShapeKind::Square => gfx.fill_rect(rect, fill),
    }

    if look.anchor_marker {
        gfx.fill_circle(rect.center(), anchor_radius(geometry.cell_size), palette.anchor);
    }
}

/// Shorthand for painting an empty square at a cell's home position.
pub fn paint_empty(gfx: &mut dyn Renderer2d, geometry: &BoardGeometry, palette: &Palette, cell: Cell) {
    paint_cell(gfx, geometry, palette, cell, CellState::Empty.code(), Point::ZERO);
}
