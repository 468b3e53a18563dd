#[rocket::launch]
fn rocket() -> _ {
    travel_node::build_rocket()
}
