//! Ready-made 20x15 demo cities.

use crate::grid::{Cell, Grid};
use clap::ValueEnum;

pub const SAMPLE_WIDTH: usize = 20;
pub const SAMPLE_HEIGHT: usize = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SampleCity {
    Small,
    Big,
    Maze,
}

impl SampleCity {
    pub fn build(self) -> Grid {
        match self {
            SampleCity::Small => small_city(),
            SampleCity::Big => big_city(),
            SampleCity::Maze => maze_city(),
        }
    }
}

fn horizontal_street(grid: &mut Grid, y: i32) {
    for x in 0..grid.width() as i32 {
        grid.set_cell(x, y, Cell::Street);
    }
}

fn vertical_street(grid: &mut Grid, x: i32) {
    for y in 0..grid.height() as i32 {
        grid.set_cell(x, y, Cell::Street);
    }
}

fn place(grid: &mut Grid, cell: Cell, cells: &[(i32, i32)]) {
    for &(x, y) in cells {
        grid.set_cell(x, y, cell);
    }
}

/// Fills every non-street cell using `pick(x, y)`.
fn fill_blocks(grid: &mut Grid, pick: impl Fn(i32, i32) -> Cell) {
    for pos in grid.positions().collect::<Vec<_>>() {
        if !grid.is_traversable(pos.x, pos.y) {
            grid.set_cell(pos.x, pos.y, pick(pos.x, pos.y));
        }
    }
}

/// Three avenues crossed by three streets, with a few houses, buildings and
/// parks in between. Most of the map stays empty.
pub fn small_city() -> Grid {
    let mut grid = Grid::new(SAMPLE_WIDTH, SAMPLE_HEIGHT, "Small City");

    for y in [3, 7, 11] {
        horizontal_street(&mut grid, y);
    }
    for x in [5, 10, 15] {
        vertical_street(&mut grid, x);
    }

    for y in [1, 5, 9] {
        for x in [2, 3, 7, 8, 12, 13, 17, 18] {
            grid.set_cell(x, y, Cell::House);
        }
    }
    for x in [6, 11, 16] {
        place(&mut grid, Cell::Building, &[(x, 1), (x, 2), (x, 5), (x, 6)]);
    }
    place(
        &mut grid,
        Cell::Park,
        &[(2, 13), (3, 13), (2, 14), (3, 14), (12, 13), (13, 13), (12, 14), (13, 14)],
    );

    grid
}

/// A dense street grid with every block built up.
pub fn big_city() -> Grid {
    let mut grid = Grid::new(SAMPLE_WIDTH, SAMPLE_HEIGHT, "Big City");

    for y in [2, 5, 8, 11, 14] {
        horizontal_street(&mut grid, y);
    }
    for x in [3, 7, 11, 15, 19] {
        vertical_street(&mut grid, x);
    }

    fill_blocks(&mut grid, |x, y| if (x + y) % 3 == 0 { Cell::Building } else { Cell::House });

    for x in [1, 9, 17] {
        place(&mut grid, Cell::Park, &[(x, 0), (x, 1), (x, 12), (x, 13)]);
    }

    grid
}

/// A ring road around a lattice of isolated street stubs, joined to the
/// ring by a handful of connectors.
pub fn maze_city() -> Grid {
    let mut grid = Grid::new(SAMPLE_WIDTH, SAMPLE_HEIGHT, "Maze City");

    horizontal_street(&mut grid, 0);
    horizontal_street(&mut grid, 14);
    vertical_street(&mut grid, 0);
    vertical_street(&mut grid, 19);

    for y in (2..13).step_by(2) {
        for x in (2..18).step_by(2) {
            grid.set_cell(x, y, Cell::Street);
        }
    }

    for x in [2, 6, 10, 14, 18] {
        place(&mut grid, Cell::Street, &[(x, 1), (x, 3)]);
    }
    for x in [4, 8, 12, 16] {
        place(&mut grid, Cell::Street, &[(x, 5), (x, 7)]);
    }
    for x in [2, 6, 10, 14] {
        place(&mut grid, Cell::Street, &[(x, 9), (x, 11)]);
    }
    place(&mut grid, Cell::Street, &[(18, 9), (18, 13)]);

    fill_blocks(&mut grid, |x, y| {
        if (x * y) % 5 == 0 {
            Cell::Building
        } else if (x * y) % 7 == 0 {
            Cell::Park
        } else {
            Cell::House
        }
    });

    grid
}
