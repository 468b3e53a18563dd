use rocket::response::Redirect;
use rocket::serde::json::Json;
use rocket::{get, uri};

use crate::http::model::HealthStatus;

#[get("/")]
pub async fn index() -> Redirect {
    let redirect_uri = uri!(api::list_categories());
    Redirect::temporary(redirect_uri)
}

#[get("/api/health")]
pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus { status: "ok" })
}

pub mod api {
    use rocket::form::error::ErrorKind;
    use rocket::form::Errors;
    use rocket::serde::json::Json;
    use rocket::{get, State};
    use travel_core::route::{CategoryId, RouteId};
    use travel_core::service::{CategoryQueryService, RouteQueryService};

    use crate::app::{SharedCategoryQueryService, SharedRouteQueryService};
    use crate::http::model::{CategoryModel, PageBeanModel, RouteModel};
    use crate::http::response::ApiError;

    #[get("/api/categories")]
    pub async fn list_categories(
        service: &State<SharedCategoryQueryService>,
    ) -> Result<Json<Vec<CategoryModel>>, ApiError> {
        let categories = service.list_categories().await?;
        Ok(Json(categories.into_iter().map(CategoryModel::from).collect()))
    }

    #[get("/api/routes?<cid>&<page>")]
    pub async fn route_page(
        cid: Option<i32>,
        page: Result<i64, Errors<'_>>,
        service: &State<SharedRouteQueryService>,
    ) -> Result<Json<PageBeanModel<RouteModel>>, ApiError> {
        let cid = cid.ok_or(ApiError::MissingParameter { name: "cid" })?;
        // only an absent page defaults to the first one
        let page_number = match page {
            Ok(page_number) => page_number,
            Err(errors) if errors.iter().all(|e| matches!(e.kind, ErrorKind::Missing)) => 1,
            Err(_) => Err(ApiError::MissingParameter { name: "page" })?,
        };
        let routes = service.get_page(CategoryId::from(cid), page_number).await?;
        Ok(Json(routes.into()))
    }

    #[get("/api/routes/<rid>")]
    pub async fn route_detail(rid: i32, service: &State<SharedRouteQueryService>) -> Result<Json<RouteModel>, ApiError> {
        let route = service.get_route(RouteId::from(rid)).await?;
        Ok(Json(route.into()))
    }
}
