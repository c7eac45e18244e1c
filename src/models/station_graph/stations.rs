use super::{Neighbors, StationGraph};
use crate::models::StationCode;

/// Extension trait for station membership queries on `StationGraph`
pub trait Stations {
    /// Iterate station codes in insertion order
    fn stations(&self) -> indexmap::map::Keys<'_, StationCode, Neighbors>;

    /// True if the code has an adjacency entry
    fn contains(&self, code: &str) -> bool;

    /// Get the neighbor map of a station
    fn neighbors(&self, code: &str) -> Option<&Neighbors>;

    /// Get the weight of the directed edge `from -> to`
    fn distance(&self, from: &str, to: &str) -> Option<f64>;
}

impl Stations for StationGraph {
    fn stations(&self) -> indexmap::map::Keys<'_, StationCode, Neighbors> {
        self.adjacency.keys()
    }

    fn contains(&self, code: &str) -> bool {
        self.adjacency.contains_key(code)
    }

    fn neighbors(&self, code: &str) -> Option<&Neighbors> {
        self.adjacency.get(code)
    }

    fn distance(&self, from: &str, to: &str) -> Option<f64> {
        self.neighbors(from)?.get(to).copied()
    }
}
