use crate::grid::Position;

/// An ordered walk from a start cell to a goal cell, both included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    cells: Vec<Position>,
}

impl Route {
    pub(crate) fn new(cells: Vec<Position>) -> Self {
        debug_assert!(!cells.is_empty());
        Route { cells }
    }

    pub fn cells(&self) -> &[Position] {
        &self.cells
    }

    pub fn into_cells(self) -> Vec<Position> {
        self.cells
    }

    /// Number of cells, endpoints included.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of moves, one less than the number of cells.
    pub fn steps(&self) -> usize {
        self.cells.len().saturating_sub(1)
    }

    pub fn start(&self) -> Position {
        self.cells[0]
    }

    pub fn goal(&self) -> Position {
        self.cells[self.cells.len() - 1]
    }

    pub fn contains(&self, pos: &Position) -> bool {
        self.cells.contains(pos)
    }
}

pub trait PathfindingAlgorithm {
    /// Finds a route from `start` to `goal`, or `None` when the two are not
    /// connected.
    fn find_path(&self, start: Position, goal: Position) -> Option<Route>;
}
