use contracts::dashboards::d400_sales_overview::{SalesOverviewRequest, SalesOverviewResponse};

use crate::shared::api_utils::get_json;

const API_BASE: &str = "/api/d400";

/// Range configured on the server for the first load
pub async fn get_default_range() -> Result<SalesOverviewRequest, String> {
    get_json(&format!("{}/default_range", API_BASE)).await
}

/// Daily and monthly series for a date range
pub async fn get_sales_overview(
    request: &SalesOverviewRequest,
) -> Result<SalesOverviewResponse, String> {
    get_json(&sales_overview_path(request)?).await
}

fn sales_overview_path(request: &SalesOverviewRequest) -> Result<String, String> {
    let query = serde_qs::to_string(request)
        .map_err(|e| format!("Failed to encode request: {}", e))?;
    Ok(format!("{}/sales_overview?{}", API_BASE, query))
}
