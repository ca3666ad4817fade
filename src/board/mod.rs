//! Board geometry for the snake agent
//!
//! This module contains the pure board-side logic with no I/O or network
//! dependencies: compass directions with rotation arithmetic, relative
//! actions, positions, and the rectangular cell grid parsed from a
//! snapshot.

pub mod direction;
pub mod grid;

// Re-export commonly used types
pub use direction::{Direction, RelativeAction};
pub use grid::{CellKind, Grid, GridShapeError, Position};
