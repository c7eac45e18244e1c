use std::path::Path;
use std::sync::Arc;
use crate::engine::GraphEngine;
use crate::error::{GraphError, SourceError};
use crate::models::Station;

/// Station listing backed by a catalog and the shared graph engine
pub struct StationCatalog {
    stations: Vec<Station>,
    engine: Arc<GraphEngine>,
}

impl StationCatalog {
    #[must_use]
    pub fn new(stations: Vec<Station>, engine: Arc<GraphEngine>) -> Self {
        Self { stations, engine }
    }

    /// Load the catalog from the `[{ "shortName", "longName" }]` seed file
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed
    pub fn from_path(path: impl AsRef<Path>, engine: Arc<GraphEngine>) -> Result<Self, SourceError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| SourceError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let stations: Vec<Station> = serde_json::from_str(&content)?;
        Ok(Self::new(stations, engine))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Search stations by name, sorted by long name
    ///
    /// `term` matches case-insensitively anywhere in the short or long name,
    /// taken as given (a single space matches names containing a space). An
    /// empty term lists every station.
    /// With `connected_only`, stations without any recorded distance are
    /// dropped; the graph is loaded first in that case.
    ///
    /// # Errors
    /// Returns `GraphError::DataUnavailable` if `connected_only` needs the
    /// graph and it cannot be loaded
    pub fn search(&self, term: Option<&str>, connected_only: bool) -> Result<Vec<&Station>, GraphError> {
        if connected_only {
            self.engine.load()?;
        }

        let term = term.filter(|term| !term.is_empty());
        let mut found: Vec<&Station> = self
            .stations
            .iter()
            .filter(|station| term.is_none_or(|term| station.matches(term)))
            .filter(|station| !connected_only || self.engine.has_station(station.short_name.as_str()))
            .collect();

        found.sort_by(|a, b| a.long_name.cmp(&b.long_name));
        Ok(found)
    }
}
