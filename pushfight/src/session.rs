//! Glue between host input, the drag tracker, the engine and the frame renderer.

use engine::app::{FrameApp, PointerEvent};
use engine::graphics::Renderer2d;

use crate::appearance::Palette;
use crate::coords::{BoardGeometry, MIN_GEOMETRY_CELL_SIZE};
use crate::drag::{DragTracker, MoveCommand};
use crate::frame::{FrameReport, render_frame};
use crate::settings::{InputSettings, Settings};
use crate::universe::Universe;

pub struct Session<U: Universe> {
    universe: U,
    tracker: DragTracker,
    cell_size: u32,
    palette: Palette,
    input: InputSettings,
}

impl<U: Universe> Session<U> {
    pub fn new(universe: U, settings: &Settings) -> Self {
        Self {
            universe,
            tracker: DragTracker::new(),
            cell_size: settings.board.cell_size.max(MIN_GEOMETRY_CELL_SIZE),
            palette: settings.palette,
            input: settings.input,
        }
    }

    pub fn universe(&self) -> &U {
        &self.universe
    }

    pub fn tracker(&self) -> &DragTracker {
        &self.tracker
    }

    pub fn geometry(&self) -> BoardGeometry {
        BoardGeometry::new(
            self.universe.width(),
            self.universe.height(),
            self.cell_size,
        )
    }

    /// Feeds one pointer event through the tracker. A completed drag is forwarded to the
    /// engine exactly once; the engine's verdict is only logged.
    pub fn handle(&mut self, event: PointerEvent) -> Option<MoveCommand> {
        match event {
            PointerEvent::Down(p) => self.tracker.pointer_down(p),
            PointerEvent::Move(p) => self.tracker.pointer_move(p),
            PointerEvent::Up(p) => {
                let geometry = self.geometry();
                let cmd = self.tracker.pointer_up(p, &geometry)?;
                let applied = self.universe.try_move(
                    cmd.from.row,
                    cmd.from.col,
                    cmd.to.row,
                    cmd.to.col,
                );
                log::debug!(
                    "move ({},{})->({},{}) applied={applied}",
                    cmd.from.row,
                    cmd.from.col,
                    cmd.to.row,
                    cmd.to.col
                );
                return Some(cmd);
            }
            PointerEvent::Cancel => {
                if self.input.cancel_drag_on_focus_loss {
                    self.tracker.cancel();
                }
            }
        }
        None
    }

    /// Draws the board as the engine has it right now.
    ///
    /// A buffer that does not match the engine's dimensions is not drawable; the surface is
    /// cleared and the problem logged.
    pub fn draw(&mut self, gfx: &mut dyn Renderer2d) -> FrameReport {
        match self.universe.snapshot() {
            Ok(snapshot) => render_frame(
                gfx,
                &snapshot,
                self.tracker.pointer(),
                self.cell_size,
                &self.palette,
            ),
            Err(err) => {
                log::warn!("skipping board draw: {err}");
                gfx.clear(self.palette.background);
                FrameReport::default()
            }
        }
    }
}

impl<U: Universe> FrameApp for Session<U> {
    fn on_pointer(&mut self, event: PointerEvent) {
        self.handle(event);
    }

    fn render(&mut self, gfx: &mut dyn Renderer2d) {
        self.draw(gfx);
    }
}
