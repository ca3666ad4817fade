use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::trace;

use super::direction::Direction;

/// Kind of a single board cell
///
/// Wire tags are the lowercase variant names ("free", "head", ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellKind {
    Free,
    Head,
    Body,
    Tail,
    Wall,
    Food,
}

impl CellKind {
    /// True for cells the snake dies on entering
    ///
    /// Head is deliberately not a hazard here; the classifier only looks
    /// one step ahead and the head cell is where the agent already is.
    pub fn is_hazard(&self) -> bool {
        matches!(self, CellKind::Wall | CellKind::Body | CellKind::Tail)
    }
}

/// A position on the board grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Position one unit away in a direction (y-down convention)
    pub fn stepped(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Shape error raised while building a grid from wire rows
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridShapeError {
    #[error("grid has no rows or no columns")]
    Empty,
    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// A rectangular snapshot of the board
///
/// Built fresh from each inbound snapshot and discarded after the
/// response is produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<CellKind>,
}

impl Grid {
    /// Build a grid from row-major rows, rejecting empty or ragged input
    pub fn from_rows(rows: Vec<Vec<CellKind>>) -> Result<Self, GridShapeError> {
        let height = rows.len();
        let width = rows.first().map(Vec::len).unwrap_or(0);
        if height == 0 || width == 0 {
            return Err(GridShapeError::Empty);
        }

        let mut cells = Vec::with_capacity(width * height);
        for (row, cols) in rows.into_iter().enumerate() {
            if cols.len() != width {
                return Err(GridShapeError::Ragged {
                    row,
                    expected: width,
                    found: cols.len(),
                });
            }
            cells.extend(cols);
        }

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Cell kind at (x, y), or Wall if the coordinates fall outside the grid
    ///
    /// The Wall fallback is a safety sentinel for lookahead past the board
    /// edge, not a real cell; it is logged as a diagnostic and never raised
    /// as an error.
    pub fn cell_at(&self, x: i32, y: i32) -> CellKind {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            trace!(x, y, "out-of-bounds lookup, treating as wall");
            return CellKind::Wall;
        }
        self.cells[y as usize * self.width + x as usize]
    }

    /// Cell kind at a position, with the same Wall fallback
    pub fn cell_at_pos(&self, pos: Position) -> CellKind {
        self.cell_at(pos.x, pos.y)
    }

    /// Position of the agent's head: first Head cell in row-major order
    ///
    /// Exactly one Head cell is assumed; if the snapshot carries more,
    /// the first one wins.
    pub fn head(&self) -> Option<Position> {
        self.find_first(CellKind::Head)
    }

    /// Position of the food: first Food cell in row-major order, if any
    pub fn food(&self) -> Option<Position> {
        self.find_first(CellKind::Food)
    }

    fn find_first(&self, kind: CellKind) -> Option<Position> {
        self.cells
            .iter()
            .position(|&c| c == kind)
            .map(|idx| Position::new((idx % self.width) as i32, (idx / self.width) as i32))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn free_grid(width: usize, height: usize) -> Vec<Vec<CellKind>> {
        vec![vec![CellKind::Free; width]; height]
    }

    #[test]
    fn test_from_rows_rejects_empty() {
        assert_eq!(Grid::from_rows(vec![]), Err(GridShapeError::Empty));
        assert_eq!(Grid::from_rows(vec![vec![]]), Err(GridShapeError::Empty));
    }

    #[test]
    fn test_from_rows_rejects_ragged() {
        let mut rows = free_grid(3, 3);
        rows[1].pop();
        assert_eq!(
            Grid::from_rows(rows),
            Err(GridShapeError::Ragged {
                row: 1,
                expected: 3,
                found: 2,
            })
        );
    }

    #[test]
    fn test_cell_lookup_in_bounds() {
        let mut rows = free_grid(4, 3);
        rows[2][1] = CellKind::Food;
        let grid = Grid::from_rows(rows).unwrap();

        assert_eq!(grid.cell_at(1, 2), CellKind::Food);
        assert_eq!(grid.cell_at(0, 0), CellKind::Free);
        assert_eq!(grid.width(), 4);
        assert_eq!(grid.height(), 3);
    }

    #[test]
    fn test_out_of_bounds_is_wall() {
        let grid = Grid::from_rows(free_grid(5, 5)).unwrap();

        for (x, y) in [(-1, 0), (0, -1), (5, 0), (0, 5), (-3, -3), (100, 100)] {
            assert_eq!(grid.cell_at(x, y), CellKind::Wall, "({x}, {y})");
        }
    }

    #[test]
    fn test_head_and_food_scan() {
        let mut rows = free_grid(4, 4);
        rows[1][2] = CellKind::Head;
        rows[3][0] = CellKind::Food;
        let grid = Grid::from_rows(rows).unwrap();

        assert_eq!(grid.head(), Some(Position::new(2, 1)));
        assert_eq!(grid.food(), Some(Position::new(0, 3)));
    }

    #[test]
    fn test_missing_head_and_food_are_none() {
        let grid = Grid::from_rows(free_grid(3, 3)).unwrap();
        assert_eq!(grid.head(), None);
        assert_eq!(grid.food(), None);
    }

    #[test]
    fn test_duplicate_head_first_found_wins() {
        let mut rows = free_grid(3, 3);
        rows[0][1] = CellKind::Head;
        rows[2][2] = CellKind::Head;
        let grid = Grid::from_rows(rows).unwrap();

        assert_eq!(grid.head(), Some(Position::new(1, 0)));
    }

    #[test]
    fn test_hazard_classification() {
        assert!(CellKind::Wall.is_hazard());
        assert!(CellKind::Body.is_hazard());
        assert!(CellKind::Tail.is_hazard());
        assert!(!CellKind::Free.is_hazard());
        assert!(!CellKind::Food.is_hazard());
        assert!(!CellKind::Head.is_hazard());
    }

    #[test]
    fn test_step_round_trip() {
        use crate::board::Direction;

        let p = Position::new(3, 7);
        for d in [
            Direction::Left,
            Direction::Right,
            Direction::Up,
            Direction::Down,
        ] {
            assert_eq!(p.stepped(d).stepped(d.opposite()), p);
        }
    }
}
