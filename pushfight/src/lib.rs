//! Pushfight board presentation: cell states, coordinate mapping, painting, drag-to-move
//! input and the per-frame renderer, over an engine exposed through [`universe::Universe`].

pub mod appearance;
pub mod cell;
pub mod coords;
pub mod drag;
pub mod error;
pub mod frame;
pub mod notation;
pub mod painter;
pub mod session;
pub mod settings;
pub mod snapshot;
pub mod universe;
