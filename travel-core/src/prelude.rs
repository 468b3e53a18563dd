pub use crate::error::InvalidArgument;
pub use crate::repo::{InMemoryRouteRepo, RouteRepo};
pub use crate::route::{Category, CategoryId, Route, RouteId};
pub use crate::service::error::QueryError;
pub use crate::service::{CategoryQueryService, RouteQueryService, RouteService};
pub use crate::utils::paging::{PageBean, PageRequest, PageSize};
