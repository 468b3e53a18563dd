pub mod category;
pub mod route;
