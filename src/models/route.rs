use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use super::StationCode;

/// A computed route tagged with an analytic code, as stored
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    pub id: Uuid,
    pub user_id: Option<u64>,
    pub from_station: StationCode,
    pub to_station: StationCode,
    pub analytic_code: String,
    pub distance_km: f64,
    pub path: Vec<StationCode>,
    pub created_at: DateTime<Utc>,
}

/// Route data before the repository assigns an id and timestamp
#[derive(Debug, Clone, PartialEq)]
pub struct NewRoute {
    pub user_id: Option<u64>,
    pub from_station: StationCode,
    pub to_station: StationCode,
    pub analytic_code: String,
    pub distance_km: f64,
    pub path: Vec<StationCode>,
}

impl NewRoute {
    #[must_use]
    pub fn into_route(self, id: Uuid, created_at: DateTime<Utc>) -> Route {
        Route {
            id,
            user_id: self.user_id,
            from_station: self.from_station,
            to_station: self.to_station,
            analytic_code: self.analytic_code,
            distance_km: self.distance_km,
            path: self.path,
            created_at,
        }
    }
}

/// One page of a listing
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 1-based page number
    pub page: usize,
    pub per_page: usize,
    pub total: usize,
}

impl<T> Page<T> {
    /// Last page number, at least 1 even for an empty listing
    #[must_use]
    pub fn last_page(&self) -> usize {
        if self.per_page == 0 {
            return 1;
        }
        self.total.div_ceil(self.per_page).max(1)
    }

    #[must_use]
    pub fn has_more(&self) -> bool {
        self.page < self.last_page()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(total: usize, page: usize, per_page: usize) -> Page<u8> {
        Page {
            items: Vec::new(),
            page,
            per_page,
            total,
        }
    }

    #[test]
    fn test_last_page() {
        assert_eq!(page(0, 1, 10).last_page(), 1);
        assert_eq!(page(10, 1, 10).last_page(), 1);
        assert_eq!(page(11, 1, 10).last_page(), 2);
        assert_eq!(page(25, 1, 5).last_page(), 5);
    }

    #[test]
    fn test_has_more() {
        assert!(page(11, 1, 10).has_more());
        assert!(!page(11, 2, 10).has_more());
        assert!(!page(0, 1, 10).has_more());
    }

    #[test]
    fn test_route_serializes_camel_case() {
        let route = NewRoute {
            user_id: Some(7),
            from_station: StationCode::from("MX"),
            to_station: StationCode::from("CGE"),
            analytic_code: "ANA-001".to_string(),
            distance_km: 0.65,
            path: vec![StationCode::from("MX"), StationCode::from("CGE")],
        }
        .into_route(Uuid::nil(), DateTime::<Utc>::UNIX_EPOCH);

        let json = serde_json::to_value(&route).expect("serialize");

        assert_eq!(json["fromStation"], "MX");
        assert_eq!(json["analyticCode"], "ANA-001");
        assert_eq!(json["userId"], 7);
        assert_eq!(json["distanceKm"], 0.65);
    }
}
