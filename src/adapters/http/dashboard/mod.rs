//! HTTP adapter for the contractor dashboard.

mod dto;
mod handlers;
mod routes;

pub use dto::DashboardResponse;
pub use handlers::DashboardHandlers;
pub use routes::dashboard_routes;
