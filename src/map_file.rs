//! JSON map files.
//!
//! A map file stores the grid name, its dimensions and the cells row by row
//! using the numeric [`Cell`] encoding:
//!
//! ```json
//! { "name": "Downtown", "width": 3, "height": 1, "grid": [[1, 1, 2]] }
//! ```

use crate::grid::{Cell, Grid};
use log::info;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapFile {
    pub name: String,
    pub width: usize,
    pub height: usize,
    pub grid: Vec<Vec<u8>>,
}

#[derive(Debug, Error)]
pub enum MapError {
    #[error("map I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("malformed map JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("map dimensions must be positive, got {width}x{height}")]
    EmptyDimensions { width: usize, height: usize },
    #[error("map declares {expected} rows but has {actual}")]
    RowCount { expected: usize, actual: usize },
    #[error("row {row} has {actual} cells, expected {expected}")]
    RowWidth { row: usize, expected: usize, actual: usize },
    #[error("unknown cell value {value} at ({x}, {y})")]
    UnknownCell { x: usize, y: usize, value: u8 },
}

impl Grid {
    pub fn to_map_file(&self) -> MapFile {
        let grid = (0..self.height() as i32)
            .map(|y| {
                (0..self.width() as i32)
                    .map(|x| self.get_cell(x, y).map_or(0, u8::from))
                    .collect()
            })
            .collect();

        MapFile {
            name: self.name().to_string(),
            width: self.width(),
            height: self.height(),
            grid,
        }
    }

    /// Builds a fresh grid from a decoded map file, checking that the cell
    /// rows match the declared dimensions. Congested cells in the file are
    /// indexed as congestion.
    pub fn from_map_file(map: &MapFile) -> Result<Grid, MapError> {
        if map.width == 0 || map.height == 0 {
            return Err(MapError::EmptyDimensions {
                width: map.width,
                height: map.height,
            });
        }
        if map.grid.len() != map.height {
            return Err(MapError::RowCount {
                expected: map.height,
                actual: map.grid.len(),
            });
        }

        let mut grid = Grid::new(map.width, map.height, map.name.clone());
        for (y, row) in map.grid.iter().enumerate() {
            if row.len() != map.width {
                return Err(MapError::RowWidth {
                    row: y,
                    expected: map.width,
                    actual: row.len(),
                });
            }
            for (x, &value) in row.iter().enumerate() {
                let cell = Cell::try_from(value).map_err(|_| MapError::UnknownCell { x, y, value })?;
                grid.set_cell(x as i32, y as i32, cell);
            }
        }
        Ok(grid)
    }

    pub fn save_to_path(&self, path: impl AsRef<Path>) -> Result<(), MapError> {
        let path = path.as_ref();
        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(&mut writer, &self.to_map_file())?;
        writer.flush()?;
        info!("Saved map '{}' to {}", self.name(), path.display());
        Ok(())
    }

    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Grid, MapError> {
        let path = path.as_ref();
        let reader = BufReader::new(File::open(path)?);
        let map: MapFile = serde_json::from_reader(reader)?;
        let grid = Grid::from_map_file(&map)?;
        info!(
            "Loaded map '{}' ({}x{}, {} congested) from {}",
            grid.name(),
            grid.width(),
            grid.height(),
            grid.congested_count(),
            path.display()
        );
        Ok(grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Position;

    fn map(width: usize, height: usize, grid: Vec<Vec<u8>>) -> MapFile {
        MapFile {
            name: "Test".to_string(),
            width,
            height,
            grid,
        }
    }

    #[test]
    fn encodes_rows_top_to_bottom() {
        let mut grid = Grid::new(3, 2, "Saved City");
        grid.set_cell(0, 0, Cell::Street);
        grid.set_cell(1, 1, Cell::House);
        grid.set_cell(2, 1, Cell::Building);

        let file = grid.to_map_file();
        assert_eq!(file.name, "Saved City");
        assert_eq!(file.grid, vec![vec![1, 0, 0], vec![0, 2, 3]]);
    }

    #[test]
    fn decodes_cells_and_rebuilds_congestion() {
        let grid = Grid::from_map_file(&map(3, 2, vec![vec![1, 5, 1], vec![4, 0, 5]])).unwrap();
        assert_eq!(grid.get_cell(1, 0), Some(Cell::Congested));
        assert_eq!(grid.get_cell(0, 1), Some(Cell::Park));
        let mut congested: Vec<_> = grid.congested().collect();
        congested.sort();
        assert_eq!(congested, vec![Position::new(1, 0), Position::new(2, 1)]);
    }

    #[test]
    fn rejects_malformed_maps() {
        assert!(matches!(
            Grid::from_map_file(&map(0, 1, vec![vec![]])),
            Err(MapError::EmptyDimensions { .. })
        ));
        assert!(matches!(
            Grid::from_map_file(&map(2, 2, vec![vec![0, 0]])),
            Err(MapError::RowCount { expected: 2, actual: 1 })
        ));
        assert!(matches!(
            Grid::from_map_file(&map(2, 2, vec![vec![0, 0], vec![0]])),
            Err(MapError::RowWidth { row: 1, expected: 2, actual: 1 })
        ));
        assert!(matches!(
            Grid::from_map_file(&map(2, 1, vec![vec![0, 9]])),
            Err(MapError::UnknownCell { x: 1, y: 0, value: 9 })
        ));
    }

    #[test]
    fn parses_json_layout() {
        let json = r#"{ "name": "Downtown", "width": 3, "height": 1, "grid": [[1, 1, 2]] }"#;
        let file: MapFile = serde_json::from_str(json).unwrap();
        let grid = Grid::from_map_file(&file).unwrap();
        assert_eq!(grid.name(), "Downtown");
        assert!(grid.is_traversable(1, 0));
        assert_eq!(grid.get_cell(2, 0), Some(Cell::House));
    }

    #[test]
    fn missing_fields_are_json_errors() {
        let err = serde_json::from_str::<MapFile>(r#"{ "name": "x", "width": 1 }"#).unwrap_err();
        assert!(MapError::from(err).to_string().starts_with("malformed map JSON"));
    }

    #[test]
    fn save_and_load_from_disk() {
        let path = std::env::temp_dir().join(format!("city_routing_map_{}.json", std::process::id()));
        let mut grid = Grid::new(5, 5, "Disk City");
        grid.set_cell(0, 0, Cell::Street);
        grid.set_cell(1, 0, Cell::Street);
        grid.add_congestion(1, 0);
        grid.set_cell(2, 2, Cell::Building);

        grid.save_to_path(&path).unwrap();
        let loaded = Grid::load_from_path(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded.to_map_file(), grid.to_map_file());
        assert_eq!(loaded.congested().collect::<Vec<_>>(), vec![Position::new(1, 0)]);
    }

    #[test]
    fn missing_file_is_io_error() {
        let path = std::env::temp_dir().join("city_routing_does_not_exist.json");
        assert!(matches!(Grid::load_from_path(path), Err(MapError::Io(_))));
    }
}
