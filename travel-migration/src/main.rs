use sea_orm_migration::prelude::*;

#[tokio::main]
async fn main() {
    cli::run_cli(travel_migration::Migrator).await;
}
