use crate::algorithms::a_star::RouteFinder;
use crate::algorithms::common::{PathfindingAlgorithm, Route};
use crate::algorithms::free_flow::FreeFlowRouter;
use crate::grid::{Grid, Position};
use std::fmt;

/// How a live route compares with the route the same trip would take with no
/// traffic at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteStatistics {
    /// Cells on the live route, `None` if congestion leaves no route.
    pub route_cells: Option<usize>,
    /// Cells on the traffic-free route, `None` if the endpoints are not
    /// connected even without traffic.
    pub free_flow_cells: Option<usize>,
    /// Congested cells on the whole grid.
    pub congested_cells: usize,
}

impl RouteStatistics {
    pub fn new(route: Option<&Route>, free_flow: Option<&Route>, congested_cells: usize) -> Self {
        RouteStatistics {
            route_cells: route.map(Route::len),
            free_flow_cells: free_flow.map(Route::len),
            congested_cells,
        }
    }

    /// Runs both searches for the given endpoints and compares them.
    pub fn measure(grid: &Grid, start: Position, goal: Position) -> Self {
        let route = RouteFinder::new(grid).find_path(start, goal);
        let free_flow = FreeFlowRouter::new(grid).find_path(start, goal);
        Self::new(route.as_ref(), free_flow.as_ref(), grid.congested_count())
    }

    /// Extra cells the live route needs compared with the traffic-free one.
    pub fn extra_cells(&self) -> Option<usize> {
        match (self.route_cells, self.free_flow_cells) {
            (Some(route), Some(free)) => Some(route.saturating_sub(free)),
            _ => None,
        }
    }

    /// True when a route would exist without traffic but congestion cuts it.
    pub fn blocked_by_congestion(&self) -> bool {
        self.route_cells.is_none() && self.free_flow_cells.is_some()
    }
}

impl fmt::Display for RouteStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.route_cells {
            Some(cells) => writeln!(f, "Route Length: {} cells", cells)?,
            None => writeln!(f, "Route Length: no route")?,
        }
        match self.free_flow_cells {
            Some(cells) => writeln!(f, "Free-Flow Length: {} cells", cells)?,
            None => writeln!(f, "Free-Flow Length: no route")?,
        }
        writeln!(f, "Congested Cells: {}", self.congested_cells)?;

        if let Some(extra) = self.extra_cells() {
            writeln!(f, "Detour: {} extra cells", extra)?;
        }
        if self.blocked_by_congestion() {
            writeln!(f, "Note: congestion blocks every route between these points")?;
        }

        Ok(())
    }
}
