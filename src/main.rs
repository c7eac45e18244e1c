#![warn(clippy::complexity)]
#![warn(clippy::perf)]
#![warn(clippy::style)]
#![warn(clippy::suspicious)]
use rail_route::{Config, GraphEngine, StationCatalog};
use std::process::ExitCode;
use std::sync::Arc;

fn main() -> ExitCode {
    rail_route::logging::init();

    let config = Config::from_env();
    let engine = Arc::new(GraphEngine::new(config.distance_source()));

    if let Err(e) = engine.load() {
        log::error!("{e}");
        return ExitCode::FAILURE;
    }

    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.as_slice() {
        [] => list_stations(&config, &engine),
        [from, to] => print_route(&engine, from, to),
        _ => {
            eprintln!("Usage: rail-route [FROM TO]");
            ExitCode::FAILURE
        }
    }
}

fn list_stations(config: &Config, engine: &Arc<GraphEngine>) -> ExitCode {
    match StationCatalog::from_path(&config.stations_path, Arc::clone(engine)) {
        Ok(catalog) => match catalog.search(None, true) {
            Ok(stations) => {
                println!("Connected stations ({}):", stations.len());
                for station in stations {
                    println!("  {:<6} {}", station.short_name, station.long_name);
                }
                ExitCode::SUCCESS
            }
            Err(e) => {
                log::error!("{e}");
                ExitCode::FAILURE
            }
        },
        Err(e) => {
            // Without a catalog the graph still knows the codes
            log::warn!("Station catalog unavailable ({e}), listing codes only");
            let stations = engine.stations();
            println!("Stations in network ({}):", stations.len());
            for code in stations {
                println!("  {code}");
            }
            ExitCode::SUCCESS
        }
    }
}

fn print_route(engine: &GraphEngine, from: &str, to: &str) -> ExitCode {
    for code in [from, to] {
        if !engine.has_station(code) {
            eprintln!("Station '{code}' is not in the network.");
            return ExitCode::FAILURE;
        }
    }

    match engine.find_shortest_path(from, to) {
        Ok(Some(result)) => {
            let path: Vec<&str> = result.path.iter().map(|code| code.as_str()).collect();
            println!("{from} -> {to}: {:.2} km", result.distance_km);
            println!("  {}", path.join(" - "));
            ExitCode::SUCCESS
        }
        Ok(None) => {
            eprintln!("No path exists between {from} and {to}.");
            ExitCode::FAILURE
        }
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
