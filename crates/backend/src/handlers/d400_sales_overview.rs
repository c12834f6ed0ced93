use axum::{extract::Query, http::StatusCode, Json};
use chrono::Local;
use contracts::dashboards::d400_sales_overview::{SalesOverviewRequest, SalesOverviewResponse};

use crate::dashboards::d400_sales_overview::service;
use crate::shared::config;
use crate::shared::error::DashboardError;

fn status_for(error: &DashboardError) -> StatusCode {
    match error {
        DashboardError::RangeTooLarge { .. } => StatusCode::BAD_REQUEST,
        DashboardError::InvalidConfig(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// GET /api/d400/sales_overview?date_from=YYYY-MM-DD&date_to=YYYY-MM-DD
pub async fn get_sales_overview(
    Query(params): Query<SalesOverviewRequest>,
) -> Result<Json<SalesOverviewResponse>, (StatusCode, String)> {
    match service::build_sales_overview(params, config::get()) {
        Ok(response) => Ok(Json(response)),
        Err(e) => {
            let status = status_for(&e);
            if status.is_server_error() {
                tracing::error!("Failed to build sales overview: {}", e);
            } else {
                tracing::warn!("Rejected sales overview request: {}", e);
            }
            Err((status, e.to_string()))
        }
    }
}

/// GET /api/d400/default_range
pub async fn get_default_range() -> Json<SalesOverviewRequest> {
    let today = Local::now().date_naive();
    Json(service::default_range(today, config::get()))
}
