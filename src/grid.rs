use log::{info, warn};
use num_enum::{IntoPrimitive, TryFromPrimitive};
use rand::Rng;
use rustc_hash::FxHashSet;
use std::fmt;
use std::str::FromStr;
use strum::{Display, EnumIter};
use thiserror::Error;

/// Grid coordinate. Signed so that positions left of or above the grid can be
/// named; such positions are simply out of bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Position { x, y }
    }

    /// Manhattan distance between two positions.
    pub fn manhattan(&self, other: &Position) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    pub fn offset(&self, dx: i32, dy: i32) -> Position {
        Position {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid position {input:?}, expected \"x,y\"")]
pub struct ParsePositionError {
    input: String,
}

impl FromStr for Position {
    type Err = ParsePositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParsePositionError { input: s.to_string() };
        let (x, y) = s.split_once(',').ok_or_else(err)?;
        let x = x.trim().parse().map_err(|_| err())?;
        let y = y.trim().parse().map_err(|_| err())?;
        Ok(Position { x, y })
    }
}

/// Terrain kind of a single cell. The discriminants are the persisted encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum Cell {
    Empty = 0,
    Street = 1,
    House = 2,
    Building = 3,
    Park = 4,
    Congested = 5,
}

// Up, right, down, left. Search output depends on this order.
const DIRECTIONS: [(i32, i32); 4] = [(0, -1), (1, 0), (0, 1), (-1, 0)];

/// The city map: a fixed-size rectangle of terrain cells plus an index of the
/// cells currently congested.
///
/// The index always holds exactly the positions whose cell is
/// [`Cell::Congested`]; every write goes through [`Grid::set_cell`], which
/// keeps the two in step.
#[derive(Debug, Clone)]
pub struct Grid {
    width: usize,
    height: usize,
    name: String,
    cells: Vec<Cell>,
    congested: FxHashSet<Position>,
}

impl Grid {
    /// Creates a grid with every cell [`Cell::Empty`].
    pub fn new(width: usize, height: usize, name: impl Into<String>) -> Self {
        Grid {
            width,
            height,
            name: name.into(),
            cells: vec![Cell::Empty; width * height],
            congested: FxHashSet::default(),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        self.index(x, y).is_some()
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        let x = usize::try_from(x).ok()?;
        let y = usize::try_from(y).ok()?;
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }

    /// Writes a cell. Returns false, leaving the grid untouched, when the
    /// coordinate is out of bounds.
    pub fn set_cell(&mut self, x: i32, y: i32, cell: Cell) -> bool {
        let Some(idx) = self.index(x, y) else {
            return false;
        };
        self.cells[idx] = cell;
        let pos = Position { x, y };
        if cell == Cell::Congested {
            self.congested.insert(pos);
        } else {
            self.congested.remove(&pos);
        }
        true
    }

    pub fn get_cell(&self, x: i32, y: i32) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Only streets can be driven on. Congested cells are blocked outright.
    pub fn is_traversable(&self, x: i32, y: i32) -> bool {
        self.get_cell(x, y) == Some(Cell::Street)
    }

    /// Turns a street into a congested cell.
    pub fn add_congestion(&mut self, x: i32, y: i32) -> bool {
        if self.get_cell(x, y) != Some(Cell::Street) {
            return false;
        }
        self.set_cell(x, y, Cell::Congested)
    }

    /// Reverts a congested cell back to a street.
    pub fn remove_congestion(&mut self, x: i32, y: i32) -> bool {
        if self.get_cell(x, y) != Some(Cell::Congested) {
            return false;
        }
        self.set_cell(x, y, Cell::Street)
    }

    pub fn clear_all_congestion(&mut self) {
        for pos in std::mem::take(&mut self.congested) {
            match self.index(pos.x, pos.y) {
                Some(idx) if self.cells[idx] == Cell::Congested => self.cells[idx] = Cell::Street,
                _ => warn!("Skipping stale congestion entry at {}", pos),
            }
        }
    }

    /// Clears existing congestion, then congests up to `count` random streets.
    ///
    /// Candidates are sampled with replacement from the streets present after
    /// clearing, so picking an already congested street wastes an attempt.
    /// Gives up after `count * 10` attempts. Returns how many cells were
    /// actually congested.
    pub fn generate_random_congestion<R: Rng + ?Sized>(&mut self, count: usize, rng: &mut R) -> usize {
        self.clear_all_congestion();

        let streets: Vec<Position> = self
            .positions()
            .filter(|pos| self.is_traversable(pos.x, pos.y))
            .collect();
        if streets.is_empty() {
            info!("No streets on '{}', no congestion generated", self.name);
            return 0;
        }

        let max_attempts = count.saturating_mul(10);
        let mut placed = 0;
        let mut attempts = 0;
        while placed < count && attempts < max_attempts {
            let pos = streets[rng.gen_range(0..streets.len())];
            if self.add_congestion(pos.x, pos.y) {
                placed += 1;
            }
            attempts += 1;
        }

        info!(
            "Generated {}/{} congested cells on '{}' in {} attempts",
            placed, count, self.name, attempts
        );
        placed
    }

    /// Resets every cell to empty and drops all congestion.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
        self.congested.clear();
    }

    /// Positions currently congested, in no particular order.
    pub fn congested(&self) -> impl Iterator<Item = Position> + '_ {
        self.congested.iter().copied()
    }

    pub fn congested_count(&self) -> usize {
        self.congested.len()
    }

    pub fn street_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell == Cell::Street).count()
    }

    /// Every in-bounds position, row by row.
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        let (width, height) = (self.width as i32, self.height as i32);
        (0..height).flat_map(move |y| (0..width).map(move |x| Position { x, y }))
    }

    /// Traversable 4-directional neighbors, in up, right, down, left order.
    pub fn get_neighbors(&self, pos: &Position) -> Vec<Position> {
        DIRECTIONS
            .iter()
            .map(|&(dx, dy)| pos.offset(dx, dy))
            .filter(|next| self.is_traversable(next.x, next.y))
            .collect()
    }
}
