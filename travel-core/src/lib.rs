pub mod error;
pub mod prelude;
pub mod repo;
pub mod route;
pub mod service;
pub mod utils;
