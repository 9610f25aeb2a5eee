use crate::algorithms::common::{PathfindingAlgorithm, Route};
use crate::grid::{Cell, Grid, Position};
use log::debug;
use rustc_hash::{FxHashMap, FxHashSet};
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Cost of a move onto a street.
pub const STEP_COST: u32 = 1;
/// Cost of a move onto a congested cell. Congested cells are never
/// traversable, so this is not charged while that rule holds.
pub const CONGESTED_STEP_COST: u32 = 10;

/// Frontier entry. Ordered so that `BinaryHeap` pops the lowest `f` first and,
/// among equal `f`, the position that joined the frontier first.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
struct FrontierEntry {
    f: u32,
    order: u64,
    pos: Position,
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed for min-heap behavior
        match other.f.cmp(&self.f) {
            Ordering::Equal => other.order.cmp(&self.order),
            other => other,
        }
    }
}

/// A* over the streets of a borrowed [`Grid`].
///
/// Nothing is cached between calls: every search reads the grid as it is at
/// call time, so congestion added or removed in between is always observed.
#[derive(Clone, Copy)]
pub struct RouteFinder<'a> {
    grid: &'a Grid,
}

impl<'a> RouteFinder<'a> {
    pub fn new(grid: &'a Grid) -> Self {
        RouteFinder { grid }
    }

    /// Finds the shortest street route from `start` to `goal`.
    ///
    /// # Arguments
    ///
    /// * `start` - The starting position, must be a street.
    /// * `goal` - The destination, must be a street.
    ///
    /// # Returns
    ///
    /// The route from `start` to `goal` inclusive, or `None` if either endpoint
    /// is not traversable or no route connects them.
    pub fn find_route(&self, start: Position, goal: Position) -> Option<Route> {
        let grid = self.grid;
        if !grid.is_traversable(start.x, start.y) || !grid.is_traversable(goal.x, goal.y) {
            debug!("No route {} -> {}: endpoint not traversable", start, goal);
            return None;
        }

        let mut frontier = BinaryHeap::new();
        // Frontier membership, mapped to the order in which each position joined.
        let mut open: FxHashMap<Position, u64> = FxHashMap::default();
        let mut closed: FxHashSet<Position> = FxHashSet::default();
        let mut g_scores: FxHashMap<Position, u32> = FxHashMap::default();
        let mut came_from: FxHashMap<Position, Position> = FxHashMap::default();
        let mut next_order = 0u64;

        open.insert(start, next_order);
        g_scores.insert(start, 0);
        frontier.push(FrontierEntry {
            f: start.manhattan(&goal),
            order: next_order,
            pos: start,
        });
        next_order += 1;

        while let Some(FrontierEntry { f, pos: current, .. }) = frontier.pop() {
            let current_g = g_scores[&current];
            // Skip entries superseded by a cheaper update or already expanded.
            if closed.contains(&current) || f != current_g + current.manhattan(&goal) {
                continue;
            }

            if current == goal {
                let route = reconstruct_route(&came_from, current);
                debug!(
                    "Route {} -> {}: {} cells, {} expanded",
                    start,
                    goal,
                    route.len(),
                    closed.len() + 1
                );
                return Some(route);
            }

            open.remove(&current);
            closed.insert(current);

            for neighbor in grid.get_neighbors(&current) {
                if closed.contains(&neighbor) {
                    continue;
                }

                let tentative_g = current_g + step_cost(grid, neighbor);
                let order = match open.get(&neighbor) {
                    None => {
                        let order = next_order;
                        next_order += 1;
                        open.insert(neighbor, order);
                        order
                    }
                    Some(_) if tentative_g >= g_scores[&neighbor] => continue,
                    Some(&order) => order,
                };

                came_from.insert(neighbor, current);
                g_scores.insert(neighbor, tentative_g);
                frontier.push(FrontierEntry {
                    f: tentative_g + neighbor.manhattan(&goal),
                    order,
                    pos: neighbor,
                });
            }
        }

        debug!("No route {} -> {}: {} cells expanded", start, goal, closed.len());
        None
    }
}

impl PathfindingAlgorithm for RouteFinder<'_> {
    fn find_path(&self, start: Position, goal: Position) -> Option<Route> {
        self.find_route(start, goal)
    }
}

fn step_cost(grid: &Grid, to: Position) -> u32 {
    match grid.get_cell(to.x, to.y) {
        Some(Cell::Congested) => CONGESTED_STEP_COST,
        _ => STEP_COST,
    }
}

fn reconstruct_route(came_from: &FxHashMap<Position, Position>, goal: Position) -> Route {
    let mut cells = vec![goal];
    let mut current = goal;
    while let Some(&prev) = came_from.get(&current) {
        cells.push(prev);
        current = prev;
    }
    cells.reverse();
    Route::new(cells)
}
