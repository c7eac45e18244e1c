use std::fmt;
use std::path::PathBuf;
use thiserror::Error;
use crate::models::StationCode;

/// Failure to read edges from a distance source
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid distance JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid distance CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("invalid distance {distance_km} km between {parent} and {child}")]
    InvalidDistance {
        parent: StationCode,
        child: StationCode,
        distance_km: f64,
    },
}

/// Graph engine errors
#[derive(Debug, Error)]
pub enum GraphError {
    /// The distance source could not be read. The engine state is unchanged.
    #[error("distance data unavailable: {0}")]
    DataUnavailable(#[from] SourceError),
}

/// Route request fields subject to validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteField {
    FromStation,
    ToStation,
    AnalyticCode,
}

impl RouteField {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FromStation => "fromStationId",
            Self::ToStation => "toStationId",
            Self::AnalyticCode => "analyticCode",
        }
    }
}

impl fmt::Display for RouteField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single rejected field of a route request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: RouteField,
    pub message: String,
}

impl FieldError {
    #[must_use]
    pub fn new(field: RouteField, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Route planning errors
#[derive(Debug, Error)]
pub enum RouteError {
    #[error("invalid route request: {}", format_field_errors(.0))]
    Validation(Vec<FieldError>),

    #[error("no path exists between {from} and {to}")]
    NoPath { from: StationCode, to: StationCode },

    #[error(transparent)]
    Graph(#[from] GraphError),
}

impl RouteError {
    /// Field errors of a validation failure, empty for other variants
    #[must_use]
    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            Self::Validation(errors) => errors,
            _ => &[],
        }
    }
}

fn format_field_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_unavailable_wraps_source_error() {
        let error = GraphError::from(SourceError::InvalidDistance {
            parent: StationCode::from("MX"),
            child: StationCode::from("CGE"),
            distance_km: -1.0,
        });

        assert_eq!(
            error.to_string(),
            "distance data unavailable: invalid distance -1 km between MX and CGE"
        );
    }

    #[test]
    fn test_validation_message_lists_fields() {
        let error = RouteError::Validation(vec![
            FieldError::new(RouteField::FromStation, "The origin station is required."),
            FieldError::new(RouteField::AnalyticCode, "The analytic code is required."),
        ]);

        assert_eq!(
            error.to_string(),
            "invalid route request: fromStationId: The origin station is required.; \
             analyticCode: The analytic code is required."
        );
        assert_eq!(error.field_errors().len(), 2);
    }

    #[test]
    fn test_field_errors_empty_for_no_path() {
        let error = RouteError::NoPath {
            from: StationCode::from("A"),
            to: StationCode::from("D"),
        };

        assert!(error.field_errors().is_empty());
        assert_eq!(error.to_string(), "no path exists between A and D");
    }
}
