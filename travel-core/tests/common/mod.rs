pub mod catalog {
    use travel_core::prelude::*;

    pub const OUTBOUND: i32 = 3;
    pub const EMPTY: i32 = 8;

    pub fn category(cid: i32, name: &str) -> Category {
        Category {
            cid: CategoryId::from(cid),
            name: name.to_string(),
        }
    }

    pub fn route(rid: i32, cid: i32) -> Route {
        let mut route = Route::new(RouteId::from(rid), CategoryId::from(cid), format!("route {rid}"), 1999.0);
        route.favorite_count = rid as u32;
        route
    }

    /// Category 3 holds exactly 7 routes, category 8 holds none and
    /// category 1 holds `domestic_count` routes interleaved with the others.
    pub fn repo(domestic_count: i32) -> InMemoryRouteRepo {
        let mut repo = InMemoryRouteRepo::new();
        repo.insert_category(category(1, "Domestic"));
        repo.insert_category(category(OUTBOUND, "Outbound"));
        repo.insert_category(category(EMPTY, "Self-drive"));
        for rid in 1..=7 {
            repo.insert_route(route(rid * 10, OUTBOUND));
        }
        for rid in 0..domestic_count {
            repo.insert_route(route(rid * 10 + 1, 1));
        }
        repo
    }
}
