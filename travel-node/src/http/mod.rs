use rocket::{Catcher, Route};

mod model;
mod response;
mod routes;

pub fn api_routes() -> Vec<Route> {
    rocket::routes![
        routes::index,
        routes::health,
        routes::api::list_categories,
        routes::api::route_page,
        routes::api::route_detail,
    ]
}

pub fn catchers() -> Vec<Catcher> {
    rocket::catchers![response::not_found, response::unprocessable]
}
