use std::sync::Arc;

use rocket::{Build, Rocket};
use travel_core::service::{CategoryQueryService, RouteQueryService};

pub type SharedRouteQueryService = Arc<dyn RouteQueryService + Send + Sync>;
pub type SharedCategoryQueryService = Arc<dyn CategoryQueryService + Send + Sync>;

/// Put one service implementation behind both query handles in Rocket state.
pub fn manage_services<S>(rocket: Rocket<Build>, service: S) -> Rocket<Build>
where
    S: RouteQueryService + CategoryQueryService + Send + Sync + 'static,
{
    let service = Arc::new(service);
    let route_service: SharedRouteQueryService = service.clone();
    let category_service: SharedCategoryQueryService = service;
    rocket.manage(route_service).manage(category_service)
}
