use crate::grid::Position;
use crate::samples::SampleCity;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Only print warnings and errors
    #[arg(long, global = true, default_value_t = false)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Write one of the built-in demo cities to a map file
    Sample {
        #[arg(long, value_enum, default_value_t = SampleCity::Small)]
        kind: SampleCity,

        #[arg(long)]
        out: PathBuf,
    },

    /// Find a route between two street cells of a map file
    Route {
        #[arg(long)]
        map: PathBuf,

        /// Start cell as "x,y"
        #[arg(long)]
        from: Position,

        /// Destination cell as "x,y"
        #[arg(long)]
        to: Position,

        /// Number of random congested cells to generate before searching
        #[arg(long, default_value_t = 0)]
        congestion: usize,

        /// Seed for congestion generation; random when omitted
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_route_command() {
        let config = Config::parse_from([
            "city_routing", "route", "--map", "maps/city.json", "--from", "0,5", "--to", "9,5",
            "--congestion", "3", "--seed", "42",
        ]);
        assert!(!config.quiet);
        match config.command {
            Command::Route { map, from, to, congestion, seed } => {
                assert_eq!(map, PathBuf::from("maps/city.json"));
                assert_eq!(from, Position::new(0, 5));
                assert_eq!(to, Position::new(9, 5));
                assert_eq!(congestion, 3);
                assert_eq!(seed, Some(42));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn parses_sample_command() {
        let config = Config::parse_from(["city_routing", "--quiet", "sample", "--kind", "maze", "--out", "m.json"]);
        assert!(config.quiet);
        assert!(matches!(config.command, Command::Sample { kind: SampleCity::Maze, .. }));
    }

    #[test]
    fn rejects_bad_position() {
        let result = Config::try_parse_from([
            "city_routing", "route", "--map", "m.json", "--from", "zero", "--to", "1,1",
        ]);
        assert!(result.is_err());
    }
}
