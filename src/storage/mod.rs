mod memory;

pub use memory::MemoryRouteRepository;

use crate::constants::MAX_PER_PAGE;
use crate::models::{NewRoute, Page, Route};

/// Keep a requested page size within `1..=MAX_PER_PAGE`
#[must_use]
pub fn clamp_per_page(per_page: usize) -> usize {
    per_page.clamp(1, MAX_PER_PAGE)
}

/// Persistence for computed routes
pub trait RouteRepository: Send + Sync {
    /// Store a route, assigning its id and creation time
    fn create(&self, route: NewRoute) -> Route;

    /// List a user's routes, newest first
    ///
    /// `page` is 1-based (0 is read as 1); `per_page` is clamped with
    /// [`clamp_per_page`].
    fn find_by_user_paginated(&self, user_id: u64, page: usize, per_page: usize) -> Page<Route>;
}
