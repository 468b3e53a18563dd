use crate::route::{Category, CategoryId, Route, RouteId};
use crate::utils::paging::{PageBean, PageRequest};

mod memory;

pub use memory::InMemoryRouteRepo;

/// Read access to the route catalog.
#[async_trait::async_trait]
pub trait RouteRepo {
    type Error: std::error::Error + Send + Sync + 'static;

    async fn get_category(&self, cid: CategoryId) -> Result<Option<Category>, Self::Error>;

    /// All categories ordered by `cid`.
    async fn get_all_categories(&self) -> Result<Vec<Category>, Self::Error>;

    /// Routes of a category ordered by `rid` ascending.
    ///
    /// `total_items` counts every route of the category regardless of the requested page.
    async fn get_routes_by_category(&self, cid: CategoryId, page: PageRequest)
    -> Result<PageBean<Route>, Self::Error>;

    async fn get_route(&self, rid: RouteId) -> Result<Option<Route>, Self::Error>;
}
