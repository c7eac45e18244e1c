mod edge;
mod route;
mod station;
mod station_graph;

pub use edge::Edge;
pub use route::{NewRoute, Page, Route};
pub use station::{Station, StationCode};
pub use station_graph::{round_km, Neighbors, PathResult, ShortestPath, StationGraph, Stations};
