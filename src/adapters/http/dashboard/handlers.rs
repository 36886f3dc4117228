//! HTTP handlers for dashboard endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::ApiError;
use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::{GetDashboardHandler, GetDashboardQuery};

use super::dto::DashboardResponse;

#[derive(Clone)]
pub struct DashboardHandlers {
    dashboard_handler: Arc<GetDashboardHandler>,
}

impl DashboardHandlers {
    pub fn new(dashboard_handler: Arc<GetDashboardHandler>) -> Self {
        Self { dashboard_handler }
    }
}

/// GET /api/dashboard - Totals and recent proposals for the caller
pub async fn get_dashboard(
    State(handlers): State<DashboardHandlers>,
    RequireAuth(user): RequireAuth,
) -> Response {
    let query = GetDashboardQuery { owner_id: user.id };
    match handlers.dashboard_handler.handle(query).await {
        Ok(view) => Json(DashboardResponse::from(view)).into_response(),
        Err(e) => ApiError(e).into_response(),
    }
}
