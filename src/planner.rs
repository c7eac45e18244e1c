use serde::{Deserialize, Serialize};
use std::sync::Arc;
use crate::constants::{MAX_ANALYTIC_CODE_LEN, MAX_STATION_CODE_LEN};
use crate::engine::GraphEngine;
use crate::error::{FieldError, RouteError, RouteField};
use crate::models::{NewRoute, Page, Route, StationCode};
use crate::storage::RouteRepository;

/// Incoming request to compute and store a route
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteRequest {
    #[serde(rename = "fromStationId")]
    pub from_station: String,
    #[serde(rename = "toStationId")]
    pub to_station: String,
    pub analytic_code: String,
}

impl RouteRequest {
    #[must_use]
    pub fn new(
        from_station: impl Into<String>,
        to_station: impl Into<String>,
        analytic_code: impl Into<String>,
    ) -> Self {
        Self {
            from_station: from_station.into(),
            to_station: to_station.into(),
            analytic_code: analytic_code.into(),
        }
    }

    /// Check required fields and length limits, collecting every failure
    ///
    /// # Errors
    /// Returns the list of rejected fields
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let checks = [
            (RouteField::FromStation, &self.from_station, MAX_STATION_CODE_LEN, "The origin station is required."),
            (RouteField::ToStation, &self.to_station, MAX_STATION_CODE_LEN, "The destination station is required."),
            (RouteField::AnalyticCode, &self.analytic_code, MAX_ANALYTIC_CODE_LEN, "The analytic code is required."),
        ];

        let errors: Vec<FieldError> = checks
            .into_iter()
            .filter_map(|(field, value, max_len, required_message)| {
                if value.trim().is_empty() {
                    Some(FieldError::new(field, required_message))
                } else if value.chars().count() > max_len {
                    Some(FieldError::new(
                        field,
                        format!("The {field} may not be greater than {max_len} characters."),
                    ))
                } else {
                    None
                }
            })
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Route-booking workflow on top of the shared graph engine
pub struct RoutePlanner {
    engine: Arc<GraphEngine>,
    repository: Arc<dyn RouteRepository>,
}

impl RoutePlanner {
    #[must_use]
    pub fn new(engine: Arc<GraphEngine>, repository: Arc<dyn RouteRepository>) -> Self {
        Self { engine, repository }
    }

    /// Validate the request, compute the shortest path and store the route
    ///
    /// Stations missing from the network are reported per field before any
    /// path is computed, so `NoPath` always means both stations exist but
    /// are not connected.
    ///
    /// # Errors
    /// - `RouteError::Validation` for missing/oversized fields or unknown stations
    /// - `RouteError::NoPath` when no route connects the stations
    /// - `RouteError::Graph` when the distance data cannot be loaded
    pub fn plan_and_store(&self, request: &RouteRequest, user_id: Option<u64>) -> Result<Route, RouteError> {
        request.validate().map_err(RouteError::Validation)?;

        self.engine.load()?;
        self.ensure_known_stations(request)?;

        let Some(result) = self
            .engine
            .find_shortest_path(&request.from_station, &request.to_station)?
        else {
            log::debug!(
                "No path between {} and {}",
                request.from_station,
                request.to_station
            );
            return Err(RouteError::NoPath {
                from: StationCode::from(request.from_station.as_str()),
                to: StationCode::from(request.to_station.as_str()),
            });
        };

        let route = self.repository.create(NewRoute {
            user_id,
            from_station: StationCode::from(request.from_station.as_str()),
            to_station: StationCode::from(request.to_station.as_str()),
            analytic_code: request.analytic_code.clone(),
            distance_km: result.distance_km,
            path: result.path,
        });

        log::info!(
            "Stored route {} {} -> {} ({} km, analytic code {})",
            route.id,
            route.from_station,
            route.to_station,
            route.distance_km,
            route.analytic_code
        );

        Ok(route)
    }

    /// A user's stored routes, newest first
    #[must_use]
    pub fn routes_for_user(&self, user_id: u64, page: usize, per_page: usize) -> Page<Route> {
        self.repository.find_by_user_paginated(user_id, page, per_page)
    }

    fn ensure_known_stations(&self, request: &RouteRequest) -> Result<(), RouteError> {
        let errors: Vec<FieldError> = [
            (RouteField::FromStation, &request.from_station),
            (RouteField::ToStation, &request.to_station),
        ]
        .into_iter()
        .filter(|(_, code)| !self.engine.has_station(code))
        .map(|(field, code)| FieldError::new(field, format!("Station '{code}' is not in the network.")))
        .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            log::debug!("Rejected route request: {errors:?}");
            Err(RouteError::Validation(errors))
        }
    }
}
