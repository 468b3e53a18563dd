use std::collections::BTreeMap;
use std::convert::Infallible;

use super::RouteRepo;
use crate::route::{Category, CategoryId, Route, RouteId};
use crate::utils::paging::{PageBean, PageRequest};

#[derive(Debug, Clone, Default)]
pub struct InMemoryRouteRepo {
    categories: BTreeMap<CategoryId, Category>,
    routes: BTreeMap<RouteId, Route>,
}

impl InMemoryRouteRepo {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn insert_category(&mut self, category: Category) {
        self.categories.insert(category.cid, category);
    }

    /// Insert or replace a route. The owning category is not checked.
    pub fn insert_route(&mut self, route: Route) {
        self.routes.insert(route.rid, route);
    }
}

#[async_trait::async_trait]
impl RouteRepo for InMemoryRouteRepo {
    type Error = Infallible;

    async fn get_category(&self, cid: CategoryId) -> Result<Option<Category>, Self::Error> {
        Ok(self.categories.get(&cid).cloned())
    }

    async fn get_all_categories(&self) -> Result<Vec<Category>, Self::Error> {
        Ok(self.categories.values().cloned().collect())
    }

    async fn get_routes_by_category(
        &self,
        cid: CategoryId,
        page: PageRequest,
    ) -> Result<PageBean<Route>, Self::Error> {
        let matching = self
            .routes
            .values()
            .filter(|r| r.cid == cid)
            .cloned()
            .collect::<Vec<_>>();
        Ok(page.slice(&matching))
    }

    async fn get_route(&self, rid: RouteId) -> Result<Option<Route>, Self::Error> {
        Ok(self.routes.get(&rid).cloned())
    }
}
