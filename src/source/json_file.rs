use serde::Deserialize;
use std::path::{Path, PathBuf};
use super::{ensure_valid, DistanceSource};
use crate::error::SourceError;
use crate::models::Edge;

#[derive(Debug, Deserialize)]
struct LineRecord {
    name: String,
    distances: Vec<SegmentRecord>,
}

#[derive(Debug, Deserialize)]
struct SegmentRecord {
    parent: String,
    child: String,
    distance: f64,
}

#[derive(Debug, Clone)]
enum Origin {
    File(PathBuf),
    Inline(String),
}

/// Distance source reading the per-line JSON seed format
///
/// ```json
/// [{ "name": "MOB", "distances": [{ "parent": "MX", "child": "CGE", "distance": 0.65 }] }]
/// ```
///
/// File-backed sources read the file on every `all_edges` call, so a missing
/// file only surfaces when the graph is loaded.
#[derive(Debug, Clone)]
pub struct JsonDistanceSource {
    origin: Origin,
}

impl JsonDistanceSource {
    #[must_use]
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        Self {
            origin: Origin::File(path.as_ref().to_path_buf()),
        }
    }

    #[must_use]
    pub fn from_json(content: impl Into<String>) -> Self {
        Self {
            origin: Origin::Inline(content.into()),
        }
    }
}

/// Parse the per-line JSON seed format into edges
///
/// # Errors
/// Returns an error if the JSON does not match the seed format
pub fn parse_lines_json(content: &str) -> Result<Vec<Edge>, SourceError> {
    let lines: Vec<LineRecord> = serde_json::from_str(content)?;

    let edges = lines
        .into_iter()
        .flat_map(|line| {
            let LineRecord { name, distances } = line;
            distances
                .into_iter()
                .map(move |segment| Edge::new(name.clone(), segment.parent, segment.child, segment.distance))
        })
        .collect();

    Ok(edges)
}

impl DistanceSource for JsonDistanceSource {
    fn all_edges(&self) -> Result<Vec<Edge>, SourceError> {
        let edges = match &self.origin {
            Origin::File(path) => {
                let content = std::fs::read_to_string(path).map_err(|source| SourceError::Io {
                    path: path.clone(),
                    source,
                })?;
                parse_lines_json(&content)?
            }
            Origin::Inline(content) => parse_lines_json(content)?,
        };

        ensure_valid(edges)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture_path() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("test-data/distances.json")
    }

    #[test]
    fn test_parse_fixture_file() {
        let source = JsonDistanceSource::from_path(fixture_path());
        let edges = source.all_edges().expect("fixture should parse");

        assert_eq!(edges.len(), 7);
        assert_eq!(edges[0], Edge::new("MOB", "MX", "CGE", 0.65));
        assert_eq!(edges[5].line_name, "MVR-ce");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let source = JsonDistanceSource::from_path("does/not/exist.json");
        let error = source.all_edges().expect_err("missing file should fail");

        assert!(matches!(error, SourceError::Io { .. }));
        assert!(error.to_string().contains("does/not/exist.json"));
    }

    #[test]
    fn test_malformed_json() {
        let source = JsonDistanceSource::from_json(r#"[{ "name": "MOB" }]"#);
        let error = source.all_edges().expect_err("missing distances should fail");

        assert!(matches!(error, SourceError::Json(_)));
    }

    #[test]
    fn test_empty_network() {
        let source = JsonDistanceSource::from_json("[]");
        assert!(source.all_edges().expect("empty list is valid").is_empty());
    }

    #[test]
    fn test_negative_distance_rejected() {
        let source = JsonDistanceSource::from_json(
            r#"[{ "name": "MOB", "distances": [{ "parent": "MX", "child": "CGE", "distance": -0.65 }] }]"#,
        );

        let error = source.all_edges().expect_err("negative distance should fail");
        assert!(matches!(error, SourceError::InvalidDistance { .. }));
    }
}
