use chrono::Utc;
use parking_lot::Mutex;
use uuid::Uuid;
use super::{clamp_per_page, RouteRepository};
use crate::models::{NewRoute, Page, Route};

/// In-process route store, insertion ordered
#[derive(Debug, Default)]
pub struct MemoryRouteRepository {
    routes: Mutex<Vec<Route>>,
}

impl MemoryRouteRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.routes.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.lock().is_empty()
    }

    /// Every stored route, oldest first
    #[must_use]
    pub fn all(&self) -> Vec<Route> {
        self.routes.lock().clone()
    }
}

impl RouteRepository for MemoryRouteRepository {
    fn create(&self, route: NewRoute) -> Route {
        let route = route.into_route(Uuid::new_v4(), Utc::now());
        self.routes.lock().push(route.clone());
        route
    }

    fn find_by_user_paginated(&self, user_id: u64, page: usize, per_page: usize) -> Page<Route> {
        let page = page.max(1);
        let per_page = clamp_per_page(per_page);
        let routes = self.routes.lock();

        let owned: Vec<&Route> = routes
            .iter()
            .rev()
            .filter(|route| route.user_id == Some(user_id))
            .collect();

        let items = owned
            .iter()
            .skip((page - 1).saturating_mul(per_page))
            .take(per_page)
            .map(|route| (*route).clone())
            .collect();

        Page {
            items,
            page,
            per_page,
            total: owned.len(),
        }
    }
}
