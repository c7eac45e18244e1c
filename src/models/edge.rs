use serde::{Deserialize, Serialize};
use super::StationCode;

/// One track segment between two stations, as stored by a distance source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// Line the segment belongs to. Informational only.
    pub line_name: String,
    pub parent: StationCode,
    pub child: StationCode,
    pub distance_km: f64,
}

impl Edge {
    #[must_use]
    pub fn new(
        line_name: impl Into<String>,
        parent: impl Into<StationCode>,
        child: impl Into<StationCode>,
        distance_km: f64,
    ) -> Self {
        Self {
            line_name: line_name.into(),
            parent: parent.into(),
            child: child.into(),
            distance_km,
        }
    }

    /// Distances must be finite and non-negative for Dijkstra to hold
    #[must_use]
    pub fn has_valid_distance(&self) -> bool {
        self.distance_km.is_finite() && self.distance_km >= 0.0
    }
}
