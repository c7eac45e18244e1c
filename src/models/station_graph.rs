mod shortest_path;
mod stations;

pub use shortest_path::{round_km, PathResult, ShortestPath};
pub use stations::Stations;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use super::{Edge, StationCode};

/// Neighbor code to edge weight in kilometers
pub type Neighbors = IndexMap<StationCode, f64>;

/// Adjacency-list distance graph keyed by station code
///
/// Keys keep insertion order, so station listings and Dijkstra neighbor
/// iteration are deterministic for a given load order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StationGraph {
    adjacency: IndexMap<StationCode, Neighbors>,
}

impl StationGraph {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an undirected graph, inserting every edge in both directions
    #[must_use]
    pub fn from_edges<'a>(edges: impl IntoIterator<Item = &'a Edge>) -> Self {
        let mut graph = Self::new();
        for edge in edges {
            graph.add_edge(edge.parent.clone(), edge.child.clone(), edge.distance_km);
            graph.add_edge(edge.child.clone(), edge.parent.clone(), edge.distance_km);
        }
        graph
    }

    /// Insert a single directed edge, overwriting any previous weight
    pub fn add_edge(&mut self, from: StationCode, to: StationCode, distance_km: f64) {
        self.adjacency.entry(from).or_default().insert(to, distance_km);
    }

    /// Insert a station with an explicit (possibly empty) neighbor map
    pub fn insert_station(&mut self, code: StationCode, neighbors: Neighbors) {
        self.adjacency.insert(code, neighbors);
    }

    /// Number of stations with an adjacency entry
    #[must_use]
    pub fn station_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of directed adjacency entries (twice the track count after a load)
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(IndexMap::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }
}

impl<S, N, T> FromIterator<(S, N)> for StationGraph
where
    S: Into<StationCode>,
    N: IntoIterator<Item = (T, f64)>,
    T: Into<StationCode>,
{
    fn from_iter<I: IntoIterator<Item = (S, N)>>(iter: I) -> Self {
        let adjacency = iter
            .into_iter()
            .map(|(code, neighbors)| {
                let neighbors = neighbors
                    .into_iter()
                    .map(|(to, distance)| (to.into(), distance))
                    .collect();
                (code.into(), neighbors)
            })
            .collect();
        Self { adjacency }
    }
}
