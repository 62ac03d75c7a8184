mod app;
pub mod auth;
pub mod default_route;
pub mod error;
pub mod profile_route;
pub mod resource_route;

pub use app::*;
