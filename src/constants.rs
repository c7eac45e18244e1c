/// Decimal places kept on reported distances
pub const DISTANCE_DECIMALS: i32 = 2;

/// Longest station code accepted by the route planner
pub const MAX_STATION_CODE_LEN: usize = 10;

/// Longest analytic (cost-center) code accepted by the route planner
pub const MAX_ANALYTIC_CODE_LEN: usize = 50;

/// Route history page size when the caller does not ask for one
pub const DEFAULT_PER_PAGE: usize = 10;

/// Upper bound on the route history page size
pub const MAX_PER_PAGE: usize = 100;

/// Distance file used when `RAIL_DISTANCES_PATH` is not set
pub const DEFAULT_DISTANCES_PATH: &str = "test-data/distances.json";

/// Station catalog file used when `RAIL_STATIONS_PATH` is not set
pub const DEFAULT_STATIONS_PATH: &str = "test-data/stations.json";
