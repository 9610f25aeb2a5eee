use clap::Parser;

use city_routing::algorithms::a_star::RouteFinder;
use city_routing::config::{Command, Config};
use city_routing::grid::Grid;
use city_routing::statistics::RouteStatistics;
use log::LevelFilter;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() {
    let config = Config::parse();

    let level = if config.quiet {
        LevelFilter::Warn
    } else {
        LevelFilter::Info
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    match config.command {
        Command::Sample { kind, out } => {
            let grid = kind.build();
            if let Err(e) = grid.save_to_path(&out) {
                eprintln!("Failed to write sample map: {}", e);
                std::process::exit(1);
            }
            println!("Created: {}", out.display());
        }
        Command::Route {
            map,
            from,
            to,
            congestion,
            seed,
        } => {
            let mut grid = match Grid::load_from_path(&map) {
                Ok(grid) => grid,
                Err(e) => {
                    eprintln!("Failed to load map: {}", e);
                    std::process::exit(1);
                }
            };

            if congestion > 0 {
                let mut rng = match seed {
                    Some(seed) => StdRng::seed_from_u64(seed),
                    None => StdRng::from_entropy(),
                };
                grid.generate_random_congestion(congestion, &mut rng);
            }

            println!("Map: {} ({}x{})", grid.name(), grid.width(), grid.height());
            println!("Route: {} -> {}", from, to);

            match RouteFinder::new(&grid).find_route(from, to) {
                Some(route) => {
                    let cells: Vec<String> = route.cells().iter().map(ToString::to_string).collect();
                    println!("{}", cells.join(" "));
                }
                None => println!("No route found"),
            }

            println!("\n=== ROUTE STATISTICS ===");
            println!("{}", RouteStatistics::measure(&grid, from, to));
        }
    }
}
