pub mod admin_route;
pub mod dashboard_route;
