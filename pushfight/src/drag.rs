//! Drag-to-move gesture tracking.
//!
//! The tracker is either idle (no press recorded) or dragging (press position recorded). A
//! release always ends the drag and yields at most one `MoveCommand`; whether the engine
//! accepts the move is not the tracker's concern.

use engine::geometry::Point;

use crate::cell::CellState;
use crate::coords::{BoardGeometry, Cell};
use crate::snapshot::BoardSnapshot;

/// Raw pointer positions in surface pixels.
///
/// The renderer takes one copy per frame, so both fields come from the same moment.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerState {
    pub down: Option<Point>,
    pub current: Option<Point>,
}

impl PointerState {
    pub fn is_dragging(&self) -> bool {
        self.down.is_some()
    }

    /// `current - down` while dragging.
    pub fn drag_offset(&self) -> Option<Point> {
        Some(self.current? - self.down?)
    }
}

/// A request for the engine to move the occupant of `from` to `to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MoveCommand {
    pub from: Cell,
    pub to: Cell,
}

/// The single piece drawn under the pointer during a drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragCandidate {
    pub cell: Cell,
    pub offset: Point,
    pub state: CellState,
}

#[derive(Debug, Clone, Default)]
pub struct DragTracker {
    pointer: PointerState,
}

impl DragTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pointer(&self) -> PointerState {
        self.pointer
    }

    pub fn is_dragging(&self) -> bool {
        self.pointer.is_dragging()
    }

    pub fn pointer_down(&mut self, p: Point) {
        self.pointer = PointerState {
            down: Some(p),
            current: Some(p),
        };
        log::trace!("drag start at ({}, {})", p.x, p.y);
    }

    pub fn pointer_move(&mut self, p: Point) {
        self.pointer.current = Some(p);
    }

    /// Ends the drag. Returns a command only when both the press and the release land on
    /// board cells; otherwise the gesture is dropped.
    pub fn pointer_up(&mut self, p: Point, geometry: &BoardGeometry) -> Option<MoveCommand> {
        self.pointer.current = Some(p);
        let down = self.pointer.down.take()?;

        match (geometry.cell_at(down), geometry.cell_at(p)) {
            (Some(from), Some(to)) => Some(MoveCommand { from, to }),
            _ => {
                log::debug!("drag released off the board; no move");
                None
            }
        }
    }

    /// Abandons the drag without a move (focus loss, no release coming).
    pub fn cancel(&mut self) {
        if self.pointer.down.take().is_some() {
            log::debug!("drag cancelled");
        }
    }
}

/// The piece being dragged this frame, if any.
///
/// Re-evaluated from the snapshot every call: if the piece under the press point was moved or
/// removed by the engine since the press, there is no candidate.
pub fn drag_candidate(
    snapshot: &BoardSnapshot<'_>,
    pointer: PointerState,
    geometry: &BoardGeometry,
) -> Option<DragCandidate> {
    let down = pointer.down?;
    let offset = pointer.drag_offset()?;
    let cell = geometry.cell_at(down)?;
    let state = snapshot.state(cell)?;
    state
        .is_draggable()
        .then_some(DragCandidate { cell, offset, state })
}
