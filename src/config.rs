use std::env;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use crate::constants::{DEFAULT_DISTANCES_PATH, DEFAULT_STATIONS_PATH};
use crate::source::{CsvDistanceSource, DistanceSource, JsonDistanceSource};

/// Environment variable holding the distance file path
pub const DISTANCES_PATH_VAR: &str = "RAIL_DISTANCES_PATH";

/// Environment variable holding the station catalog file path
pub const STATIONS_PATH_VAR: &str = "RAIL_STATIONS_PATH";

/// Runtime configuration, read from the environment with file defaults
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub distances_path: PathBuf,
    pub stations_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            distances_path: PathBuf::from(DEFAULT_DISTANCES_PATH),
            stations_path: PathBuf::from(DEFAULT_STATIONS_PATH),
        }
    }
}

impl Config {
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; empty values fall back to the defaults
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let path_or = |key: &str, fallback: PathBuf| {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .map_or(fallback, PathBuf::from)
        };

        Self {
            distances_path: path_or(DISTANCES_PATH_VAR, defaults.distances_path),
            stations_path: path_or(STATIONS_PATH_VAR, defaults.stations_path),
        }
    }

    /// Distance source for the configured file, chosen by extension
    ///
    /// `.csv` files use the CSV reader, anything else the JSON seed format.
    #[must_use]
    pub fn distance_source(&self) -> Arc<dyn DistanceSource> {
        if is_csv(&self.distances_path) {
            Arc::new(CsvDistanceSource::from_path(&self.distances_path))
        } else {
            Arc::new(JsonDistanceSource::from_path(&self.distances_path))
        }
    }
}

fn is_csv(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(lookup_from(&[]));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_reads_both_paths() {
        let config = Config::from_lookup(lookup_from(&[
            (DISTANCES_PATH_VAR, "/srv/rail/distances.csv"),
            (STATIONS_PATH_VAR, "/srv/rail/stations.json"),
        ]));

        assert_eq!(config.distances_path, PathBuf::from("/srv/rail/distances.csv"));
        assert_eq!(config.stations_path, PathBuf::from("/srv/rail/stations.json"));
    }

    #[test]
    fn test_blank_value_falls_back() {
        let config = Config::from_lookup(lookup_from(&[(DISTANCES_PATH_VAR, "  ")]));
        assert_eq!(config.distances_path, PathBuf::from(DEFAULT_DISTANCES_PATH));
    }

    #[test]
    fn test_is_csv() {
        assert!(is_csv(Path::new("data/distances.csv")));
        assert!(is_csv(Path::new("DISTANCES.CSV")));
        assert!(!is_csv(Path::new("distances.json")));
        assert!(!is_csv(Path::new("distances")));
    }

    #[test]
    fn test_distance_source_reads_configured_csv() {
        let config = Config {
            distances_path: Path::new(env!("CARGO_MANIFEST_DIR")).join("test-data/distances.csv"),
            ..Config::default()
        };

        let edges = config.distance_source().all_edges().expect("fixture should parse");
        assert_eq!(edges.len(), 7);
    }
}
