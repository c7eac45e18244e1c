use parking_lot::RwLock;
use std::sync::Arc;
use crate::error::GraphError;
use crate::models::{PathResult, ShortestPath, StationCode, StationGraph, Stations};
use crate::source::{ensure_valid, DistanceSource};

/// Process-wide owner of the distance graph
///
/// Construct once at startup and share it as `Arc<GraphEngine>`. The graph is
/// loaded from the source at most once; afterwards every query works on an
/// immutable snapshot and never blocks other readers.
pub struct GraphEngine {
    source: Arc<dyn DistanceSource>,
    graph: RwLock<Option<Arc<StationGraph>>>,
}

impl GraphEngine {
    #[must_use]
    pub fn new(source: Arc<dyn DistanceSource>) -> Self {
        Self {
            source,
            graph: RwLock::new(None),
        }
    }

    /// Load the graph from the distance source unless it is already loaded,
    /// returning the graph that is now in place
    ///
    /// Concurrent first calls serialize on the write lock; only one of them
    /// reads the source, the others find the graph in place. Every edge is
    /// checked for a finite, non-negative distance whatever the source.
    ///
    /// # Errors
    /// Returns `GraphError::DataUnavailable` if the source cannot be read or
    /// returns an invalid distance. The engine stays in the state it was in
    /// before the call.
    pub fn load(&self) -> Result<Arc<StationGraph>, GraphError> {
        if let Some(graph) = self.snapshot() {
            return Ok(graph);
        }

        let mut slot = self.graph.write();
        if let Some(graph) = slot.as_ref() {
            return Ok(Arc::clone(graph));
        }

        log::debug!("Loading distance graph");
        let edges = self
            .source
            .all_edges()
            .and_then(ensure_valid)
            .inspect_err(|e| {
                log::warn!("Distance graph load failed: {e}");
            })?;

        let graph = StationGraph::from_edges(&edges);
        log::info!(
            "Loaded distance graph: {} stations, {} tracks",
            graph.station_count(),
            edges.len()
        );

        let graph = Arc::new(graph);
        *slot = Some(Arc::clone(&graph));
        Ok(graph)
    }

    /// Replace the graph wholesale and mark the engine loaded
    ///
    /// Edges are taken as given; pass both directions for an undirected graph.
    pub fn set_graph(&self, graph: StationGraph) {
        crate::dev_log!(
            "Graph injected: {} stations, {} directed edges",
            graph.station_count(),
            graph.edge_count()
        );
        *self.graph.write() = Some(Arc::new(graph));
    }

    /// Drop the cached graph so the next `load` reads the source again
    pub fn reset(&self) {
        *self.graph.write() = None;
    }

    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.graph.read().is_some()
    }

    /// Current graph snapshot, `None` before the first load
    #[must_use]
    pub fn snapshot(&self) -> Option<Arc<StationGraph>> {
        self.graph.read().clone()
    }

    /// Every station code with an adjacency entry, in load order
    ///
    /// Does not trigger a load; an unloaded engine has no stations.
    #[must_use]
    pub fn stations(&self) -> Vec<StationCode> {
        self.snapshot()
            .map(|graph| graph.stations().cloned().collect())
            .unwrap_or_default()
    }

    /// True if the station has at least one recorded distance
    ///
    /// Does not trigger a load; call `load` first.
    #[must_use]
    pub fn has_station(&self, code: &str) -> bool {
        self.snapshot().is_some_and(|graph| graph.contains(code))
    }

    /// Find the least-cost path between two stations, loading the graph first
    ///
    /// `Ok(None)` covers both an unknown station and a disconnected pair; use
    /// `has_station` to tell them apart.
    ///
    /// # Errors
    /// Returns `GraphError::DataUnavailable` only when the implicit load fails
    pub fn find_shortest_path(&self, from: &str, to: &str) -> Result<Option<PathResult>, GraphError> {
        let graph = self.load()?;

        #[cfg(feature = "perf_timing")]
        let started = std::time::Instant::now();

        let result = graph.shortest_path(from, to);

        #[cfg(feature = "perf_timing")]
        log::debug!(
            "Shortest path {from} -> {to} computed in {:.3}ms",
            started.elapsed().as_secs_f64() * 1000.0
        );

        Ok(result)
    }
}

impl std::fmt::Debug for GraphEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GraphEngine")
            .field("loaded", &self.is_loaded())
            .finish_non_exhaustive()
    }
}
