use clap::Parser;
use cli::CliArgs;
use rocket::fairing::AdHoc;
use rocket::{Build, Rocket};
use travel_core::service::RouteService;
use travel_core::utils::paging::PageSize;
use travel_migration::run_migrations;
use travel_storage::PostgresDb;

pub use app::{manage_services, SharedCategoryQueryService, SharedRouteQueryService};

mod app;
mod cli;
mod http;

pub fn build_rocket() -> Rocket<Build> {
    env_logger::init();

    let cli = CliArgs::parse();

    rocket::custom(cli.rocket_config())
        .manage(cli)
        .attach(init_database())
        .attach(init_services())
        .attach(init_endpoints())
}

/// Mount the HTTP API on a rocket that already manages the query services.
pub fn mount_endpoints(rocket: Rocket<Build>) -> Rocket<Build> {
    rocket.mount("/", http::api_routes()).register("/", http::catchers())
}

fn init_database() -> AdHoc {
    AdHoc::on_ignite("Database Setup", |rocket| async move {
        let cli = rocket.state::<CliArgs>().expect("No CLI arguments provided");
        if cli.skip_migration {
            log::info!("Skipping database migrations");
        } else {
            log::info!("Applying database migrations");
            run_migrations(&cli.db).await.expect("Failed to apply migrations");
            log::info!("Applied database migrations successfully");
        }
        let db = PostgresDb::connect(&cli.db, cli.log_sql)
            .await
            .expect("Unable to connect to database");
        rocket.manage(db)
    })
}

fn init_services() -> AdHoc {
    AdHoc::on_ignite("Inject services", |rocket| async move {
        let cli = rocket.state::<CliArgs>().expect("No CLI arguments provided");
        let db = rocket.state::<PostgresDb>().expect("No PostgresDb provided");
        let page_size = PageSize::try_from(cli.page_size).expect("Invalid page size");
        let route_service = RouteService::new(db.clone(), page_size);
        log::info!("Serving route pages of {} items", route_service.page_size());
        manage_services(rocket, route_service)
    })
}

fn init_endpoints() -> AdHoc {
    AdHoc::on_ignite("Inject endpoints", |rocket| async move { mount_endpoints(rocket) })
}
