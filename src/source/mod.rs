mod csv_file;
mod json_file;

pub use csv_file::CsvDistanceSource;
pub use json_file::JsonDistanceSource;

use crate::error::SourceError;
use crate::models::Edge;

/// Supplier of the raw weighted edges the graph is built from
///
/// An empty network is a valid answer, not an error.
pub trait DistanceSource: Send + Sync {
    /// Fetch every distance record
    ///
    /// Records are checked again by `GraphEngine::load`, so a source that
    /// passes invalid distances through still cannot produce a loaded graph.
    ///
    /// # Errors
    /// Returns an error if the backing store cannot be read
    fn all_edges(&self) -> Result<Vec<Edge>, SourceError>;
}

/// Distance source over a fixed list of edges
#[derive(Debug, Clone, Default)]
pub struct MemoryDistanceSource {
    edges: Vec<Edge>,
}

impl MemoryDistanceSource {
    #[must_use]
    pub fn new(edges: Vec<Edge>) -> Self {
        Self { edges }
    }
}

impl DistanceSource for MemoryDistanceSource {
    fn all_edges(&self) -> Result<Vec<Edge>, SourceError> {
        Ok(self.edges.clone())
    }
}

/// Reject records that would break Dijkstra's non-negative weight requirement
pub(crate) fn ensure_valid(edges: Vec<Edge>) -> Result<Vec<Edge>, SourceError> {
    if let Some(edge) = edges.iter().find(|edge| !edge.has_valid_distance()) {
        return Err(SourceError::InvalidDistance {
            parent: edge.parent.clone(),
            child: edge.child.clone(),
            distance_km: edge.distance_km,
        });
    }
    Ok(edges)
}
