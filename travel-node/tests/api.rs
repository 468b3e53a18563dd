use rocket::http::{Header, Status};
use rocket::local::asynchronous::{Client, LocalResponse};
use serde_json::Value;
use time::{Date, Month};
use travel_core::prelude::*;

fn catalog() -> InMemoryRouteRepo {
    let mut repo = InMemoryRouteRepo::new();
    repo.insert_category(Category {
        cid: CategoryId::from(3),
        name: "Outbound".to_string(),
    });
    repo.insert_category(Category {
        cid: CategoryId::from(5),
        name: "Cruise".to_string(),
    });
    for rid in 1..=7 {
        let mut route = Route::new(RouteId::from(rid), CategoryId::from(3), format!("Outbound route {rid}"), 3999.0);
        route.introduce = Some("seven days".to_string());
        route.listed_on = Some(Date::from_calendar_date(2018, Month::October, 14).unwrap());
        route.favorite_count = 12;
        route.seller_id = Some(1);
        repo.insert_route(route);
    }
    repo
}

async fn client_with<Repo>(repo: Repo) -> Client
where
    Repo: RouteRepo + Send + Sync + 'static,
{
    let service = RouteService::new(repo, PageSize::new(5).unwrap());
    let rocket = travel_node::manage_services(rocket::build(), service);
    let rocket = travel_node::mount_endpoints(rocket);
    Client::tracked(rocket).await.expect("valid rocket instance")
}

async fn client() -> Client {
    client_with(catalog()).await
}

async fn json(response: LocalResponse<'_>) -> Value {
    let body = response.into_string().await.expect("response has a body");
    serde_json::from_str(&body).expect("response body is json")
}

#[rocket::async_test]
async fn route_pages_of_category() {
    let client = client().await;

    let response = client.get("/api/routes?cid=3&page=1").dispatch().await;
    assert_eq!(response.status(), Status::Ok);
    let body = json(response).await;
    assert_eq!(body["totalCount"], 7);
    assert_eq!(body["totalPage"], 2);
    assert_eq!(body["currentPage"], 1);
    assert_eq!(body["pageSize"], 5);
    let list = body["list"].as_array().unwrap();
    assert_eq!(list.len(), 5);
    assert_eq!(list[0]["rid"], 1);
    assert_eq!(list[0]["rname"], "Outbound route 1");
    assert_eq!(list[0]["routeIntroduce"], "seven days");
    assert_eq!(list[0]["rdate"], "2018-10-14");
    assert_eq!(list[0]["isThemeTour"], false);
    assert_eq!(list[0]["count"], 12);
    assert_eq!(list[0]["cid"], 3);
    assert_eq!(list[0]["sid"], 1);
    assert_eq!(list[0]["sourceId"], Value::Null);

    let body = json(client.get("/api/routes?cid=3&page=2").dispatch().await).await;
    assert_eq!(body["list"].as_array().unwrap().len(), 2);
    assert_eq!(body["totalCount"], 7);

    let body = json(client.get("/api/routes?cid=3&page=3").dispatch().await).await;
    assert_eq!(body["list"].as_array().unwrap().len(), 0);
    assert_eq!(body["totalCount"], 7);
    assert_eq!(body["currentPage"], 3);
}

#[rocket::async_test]
async fn page_defaults_to_first() {
    let client = client().await;
    let body = json(client.get("/api/routes?cid=3").dispatch().await).await;
    assert_eq!(body["currentPage"], 1);
    assert_eq!(body["list"].as_array().unwrap().len(), 5);
}

#[rocket::async_test]
async fn invalid_requests_are_bad_requests() {
    let client = client().await;

    for uri in ["/api/routes?cid=3&page=0", "/api/routes?cid=3&page=-2"] {
        let response = client.get(uri).dispatch().await;
        assert_eq!(response.status(), Status::BadRequest);
        let body = json(response).await;
        assert!(body["error"].as_str().unwrap().contains("page number"));
    }

    let response = client.get("/api/routes?page=1").dispatch().await;
    assert_eq!(response.status(), Status::BadRequest);
}

#[rocket::async_test]
async fn malformed_page_is_rejected_not_defaulted() {
    let client = client().await;

    for uri in [
        "/api/routes?cid=3&page=abc",
        "/api/routes?cid=3&page=2.5",
        "/api/routes?cid=3&page=99999999999999999999",
    ] {
        let response = client.get(uri).dispatch().await;
        assert_eq!(response.status(), Status::BadRequest, "{uri}");
        let body = json(response).await;
        assert_eq!(body["error"], "missing or malformed query parameter 'page'");
    }

    let response = client.get("/api/routes?cid=abc&page=1").dispatch().await;
    assert_eq!(response.status(), Status::BadRequest);
    let body = json(response).await;
    assert_eq!(body["error"], "missing or malformed query parameter 'cid'");
}

#[rocket::async_test]
async fn unknown_resources_are_not_found() {
    let client = client().await;

    let response = client.get("/api/routes?cid=99&page=1").dispatch().await;
    assert_eq!(response.status(), Status::NotFound);
    let body = json(response).await;
    assert_eq!(body["error"], "category 99 is not found");

    let response = client.get("/api/routes/999").dispatch().await;
    assert_eq!(response.status(), Status::NotFound);

    let response = client.get("/api/nothing-here").dispatch().await;
    assert_eq!(response.status(), Status::NotFound);
}

#[rocket::async_test]
async fn route_detail() {
    let client = client().await;
    let response = client.get("/api/routes/4").dispatch().await;
    assert_eq!(response.status(), Status::Ok);
    let body = json(response).await;
    assert_eq!(body["rid"], 4);
    assert_eq!(body["rname"], "Outbound route 4");
}

#[rocket::async_test]
async fn list_categories() {
    let client = client().await;
    let body = json(client.get("/api/categories").dispatch().await).await;
    let categories = body.as_array().unwrap();
    assert_eq!(categories.len(), 2);
    assert_eq!(categories[0]["cid"], 3);
    assert_eq!(categories[0]["cname"], "Outbound");
    assert_eq!(categories[1]["cid"], 5);
}

#[rocket::async_test]
async fn index_redirects_to_categories() {
    let client = client().await;
    let response = client.get("/").dispatch().await;
    assert_eq!(response.status(), Status::TemporaryRedirect);
    assert_eq!(response.headers().get_one("Location"), Some("/api/categories"));
}

#[rocket::async_test]
async fn health() {
    let client = client().await;
    let response = client
        .get("/api/health")
        .header(Header::new("Accept", "application/json"))
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Ok);
    assert_eq!(json(response).await["status"], "ok");
}

#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("connection refused")]
struct ConnectionRefused;

struct UnavailableRepo;

#[async_trait::async_trait]
impl RouteRepo for UnavailableRepo {
    type Error = ConnectionRefused;

    async fn get_category(&self, _: CategoryId) -> Result<Option<Category>, Self::Error> {
        Err(ConnectionRefused)
    }

    async fn get_all_categories(&self) -> Result<Vec<Category>, Self::Error> {
        Err(ConnectionRefused)
    }

    async fn get_routes_by_category(&self, _: CategoryId, _: PageRequest) -> Result<PageBean<Route>, Self::Error> {
        Err(ConnectionRefused)
    }

    async fn get_route(&self, _: RouteId) -> Result<Option<Route>, Self::Error> {
        Err(ConnectionRefused)
    }
}

#[rocket::async_test]
async fn backend_outage_is_service_unavailable() {
    let client = client_with(UnavailableRepo).await;
    for uri in ["/api/routes?cid=3&page=1", "/api/routes/1", "/api/categories"] {
        let response = client.get(uri).dispatch().await;
        assert_eq!(response.status(), Status::ServiceUnavailable);
    }
}
