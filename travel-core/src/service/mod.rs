use error::QueryError;

use crate::repo::RouteRepo;
use crate::route::{Category, CategoryId, Route, RouteId};
use crate::utils::paging::{PageBean, PageRequest, PageSize};

pub mod error;


/// Paginated lookup of routes by category.
#[async_trait::async_trait]
pub trait RouteQueryService {
    /// Fetch the 1-based `page_number` of routes in category `cid`.
    ///
    /// Fails with [`QueryError::InvalidArgument`] when `page_number < 1` and with
    /// [`QueryError::NotFound`] when the category does not exist. A page past the
    /// last one is returned empty with the true total count.
    async fn get_page(&self, cid: CategoryId, page_number: i64) -> Result<PageBean<Route>, QueryError>;

    async fn get_route(&self, rid: RouteId) -> Result<Route, QueryError>;
}

#[async_trait::async_trait]
pub trait CategoryQueryService {
    async fn list_categories(&self) -> Result<Vec<Category>, QueryError>;
}

/// Query services backed by a [`RouteRepo`].
#[derive(Debug, Clone)]
pub struct RouteService<Repo> {
    repo: Repo,
    page_size: PageSize,
}

impl<Repo> RouteService<Repo> {
    pub fn new(repo: Repo, page_size: PageSize) -> Self {
        Self { repo, page_size }
    }

    pub fn page_size(&self) -> PageSize {
        self.page_size
    }
}

fn backend_unavailable<E>(operation: &'static str) -> impl FnOnce(E) -> QueryError
where
    E: std::error::Error + Send + Sync + 'static,
{
    move |e| {
        log::error!("Route repository failed on {}: {}", operation, e);
        QueryError::BackendUnavailable { source: e.into() }
    }
}

#[async_trait::async_trait]
impl<Repo> RouteQueryService for RouteService<Repo>
where
    Repo: RouteRepo + Send + Sync,
{
    async fn get_page(&self, cid: CategoryId, page_number: i64) -> Result<PageBean<Route>, QueryError> {
        let request = PageRequest::new(page_number, self.page_size)?;
        log::debug!("Listing routes of category {} on page {}", cid, request.page());

        let category = self
            .repo
            .get_category(cid)
            .await
            .map_err(backend_unavailable("get_category"))?;
        if category.is_none() {
            Err(QueryError::NotFound {
                entity: "category",
                id: cid.into(),
            })?
        }

        let page = self
            .repo
            .get_routes_by_category(cid, request)
            .await
            .map_err(backend_unavailable("get_routes_by_category"))?;
        Ok(page)
    }

    async fn get_route(&self, rid: RouteId) -> Result<Route, QueryError> {
        log::debug!("Fetching route {}", rid);
        self.repo
            .get_route(rid)
            .await
            .map_err(backend_unavailable("get_route"))?
            .ok_or(QueryError::NotFound {
                entity: "route",
                id: rid.into(),
            })
    }
}

#[async_trait::async_trait]
impl<Repo> CategoryQueryService for RouteService<Repo>
where
    Repo: RouteRepo + Send + Sync,
{
    async fn list_categories(&self) -> Result<Vec<Category>, QueryError> {
        self.repo
            .get_all_categories()
            .await
            .map_err(backend_unavailable("get_all_categories"))
    }
}
