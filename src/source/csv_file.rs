use serde::Deserialize;
use std::path::{Path, PathBuf};
use super::{ensure_valid, DistanceSource};
use crate::error::SourceError;
use crate::models::Edge;

/// One row of `line_name,parent_station,child_station,distance_km`
#[derive(Debug, Deserialize)]
struct DistanceRow {
    line_name: String,
    parent_station: String,
    child_station: String,
    distance_km: f64,
}

impl From<DistanceRow> for Edge {
    fn from(row: DistanceRow) -> Self {
        Edge::new(row.line_name, row.parent_station, row.child_station, row.distance_km)
    }
}

#[derive(Debug, Clone)]
enum Origin {
    File(PathBuf),
    Inline(String),
}

/// Distance source reading a headered CSV export of the distance table
#[derive(Debug, Clone)]
pub struct CsvDistanceSource {
    origin: Origin,
}

impl CsvDistanceSource {
    #[must_use]
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        Self {
            origin: Origin::File(path.as_ref().to_path_buf()),
        }
    }

    #[must_use]
    pub fn from_csv(content: impl Into<String>) -> Self {
        Self {
            origin: Origin::Inline(content.into()),
        }
    }
}

/// Parse distance rows from CSV content with a header line
///
/// # Errors
/// Returns an error if a row is missing a column or has a non-numeric distance
pub fn parse_distances_csv(content: &str) -> Result<Vec<Edge>, SourceError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    let mut edges = Vec::new();
    for record in reader.deserialize::<DistanceRow>() {
        edges.push(record?.into());
    }

    Ok(edges)
}

impl DistanceSource for CsvDistanceSource {
    fn all_edges(&self) -> Result<Vec<Edge>, SourceError> {
        let edges = match &self.origin {
            Origin::File(path) => {
                let content = std::fs::read_to_string(path).map_err(|source| SourceError::Io {
                    path: path.clone(),
                    source,
                })?;
                parse_distances_csv(&content)?
            }
            Origin::Inline(content) => parse_distances_csv(content)?,
        };

        ensure_valid(edges)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_fixture_file() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("test-data/distances.csv");
        let edges = CsvDistanceSource::from_path(path).all_edges().expect("fixture should parse");

        assert_eq!(edges.len(), 7);
        assert_eq!(edges[4], Edge::new("MOB", "SDY", "ZW", 10.0));
    }

    #[test]
    fn test_trims_whitespace() {
        let source = CsvDistanceSource::from_csv(
            "line_name,parent_station,child_station,distance_km\nMOB , MX , CGE , 0.65\n",
        );
        let edges = source.all_edges().expect("should parse");

        assert_eq!(edges, vec![Edge::new("MOB", "MX", "CGE", 0.65)]);
    }

    #[test]
    fn test_non_numeric_distance() {
        let source = CsvDistanceSource::from_csv(
            "line_name,parent_station,child_station,distance_km\nMOB,MX,CGE,far\n",
        );

        let error = source.all_edges().expect_err("non-numeric distance should fail");
        assert!(matches!(error, SourceError::Csv(_)));
    }

    #[test]
    fn test_header_only_is_empty_network() {
        let source = CsvDistanceSource::from_csv("line_name,parent_station,child_station,distance_km\n");
        assert!(source.all_edges().expect("header only is valid").is_empty());
    }

    #[test]
    fn test_missing_file() {
        let error = CsvDistanceSource::from_path("nope.csv")
            .all_edges()
            .expect_err("missing file should fail");

        assert!(matches!(error, SourceError::Io { .. }));
    }
}
