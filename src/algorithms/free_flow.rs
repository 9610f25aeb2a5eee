use crate::algorithms::a_star::STEP_COST;
use crate::algorithms::common::{PathfindingAlgorithm, Route};
use crate::grid::{Cell, Grid, Position};
use pathfinding::prelude::astar;

/// Routes as if there were no traffic: congested cells count as streets.
///
/// Used as the baseline when measuring how much congestion lengthens a trip.
/// Ties between equally short routes are resolved by the `pathfinding` crate,
/// so the chosen cells may differ from [`RouteFinder`](super::a_star::RouteFinder)
/// even on an uncongested grid; only the length is comparable.
#[derive(Clone, Copy)]
pub struct FreeFlowRouter<'a> {
    grid: &'a Grid,
}

impl<'a> FreeFlowRouter<'a> {
    pub fn new(grid: &'a Grid) -> Self {
        FreeFlowRouter { grid }
    }

    fn is_open(&self, pos: &Position) -> bool {
        matches!(
            self.grid.get_cell(pos.x, pos.y),
            Some(Cell::Street) | Some(Cell::Congested)
        )
    }

    fn successors(&self, pos: &Position) -> Vec<(Position, u32)> {
        [(0, -1), (1, 0), (0, 1), (-1, 0)]
            .iter()
            .map(|&(dx, dy)| pos.offset(dx, dy))
            .filter(|next| self.is_open(next))
            .map(|next| (next, STEP_COST))
            .collect()
    }
}

impl PathfindingAlgorithm for FreeFlowRouter<'_> {
    fn find_path(&self, start: Position, goal: Position) -> Option<Route> {
        if !self.is_open(&start) || !self.is_open(&goal) {
            return None;
        }

        let result = astar(
            &start,
            |p| self.successors(p),
            |p| p.manhattan(&goal),
            |p| *p == goal,
        );

        // `astar` yields `(path, cost)`; only the path is needed.
        result.map(|(path, _)| Route::new(path))
    }
}
