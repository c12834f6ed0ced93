use axum::{http::Method, middleware, routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use crate::handlers;
use crate::system::middleware::request_logger;

/// Application routes
///
/// Anything that isn't an API route is served from `static_dir` (the built frontend).
pub fn configure_routes(static_dir: &str) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers(Any);

    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // D400 SALES OVERVIEW
        // ========================================
        .route(
            "/api/d400/sales_overview",
            get(handlers::d400_sales_overview::get_sales_overview),
        )
        .route(
            "/api/d400/default_range",
            get(handlers::d400_sales_overview::get_default_range),
        )
        .fallback_service(ServeDir::new(static_dir))
        .layer(middleware::from_fn(request_logger))
        .layer(cors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::dashboards::d400_sales_overview::{SalesOverviewRequest, SalesOverviewResponse};
    use tokio::net::TcpListener;

    use crate::shared::config;

    /// Serve the router on an ephemeral port, returns the base URL
    async fn spawn_server() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let app = configure_routes("dist");
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn test_health() {
        let base = spawn_server().await;
        let response = reqwest::get(format!("{}/health", base)).await.unwrap();
        assert_eq!(response.status().as_u16(), 200);
        assert_eq!(response.text().await.unwrap(), "ok");
    }

    #[tokio::test]
    async fn test_sales_overview_json() {
        let base = spawn_server().await;
        let url = format!(
            "{}/api/d400/sales_overview?date_from=2024-01-30&date_to=2024-02-02",
            base
        );
        let response = reqwest::get(url).await.unwrap();
        assert_eq!(response.status().as_u16(), 200);

        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(body["date_from"], "2024-01-30");
        assert_eq!(body["date_to"], "2024-02-02");
        assert_eq!(body["range_label"], "January 30th, 2024 - February 2nd, 2024");

        let daily = body["daily"].as_array().unwrap();
        assert_eq!(daily.len(), 3);
        assert_eq!(daily[0]["date"], "2024-01-30");
        assert_eq!(daily[2]["date"], "2024-02-01");
        for field in ["sales", "transactions", "revenue", "aov"] {
            assert!(daily[0][field].is_number(), "daily.{} is not a number", field);
        }

        let monthly = body["monthly"].as_array().unwrap();
        let months: Vec<&str> = monthly.iter().filter_map(|m| m["date"].as_str()).collect();
        assert_eq!(months, vec!["2024-01", "2024-02"]);

        let typed: SalesOverviewResponse = serde_json::from_value(body).unwrap();
        let daily_transactions: u64 = typed.daily.iter().map(|d| u64::from(d.transactions)).sum();
        let monthly_transactions: u64 = typed.monthly.iter().map(|m| m.transactions).sum();
        assert_eq!(monthly_transactions, daily_transactions);
    }

    #[tokio::test]
    async fn test_malformed_date_is_bad_request() {
        let base = spawn_server().await;
        let url = format!(
            "{}/api/d400/sales_overview?date_from=2024-13-01&date_to=2024-02-02",
            base
        );
        let response = reqwest::get(url).await.unwrap();
        assert_eq!(response.status().as_u16(), 400);

        let missing = reqwest::get(format!("{}/api/d400/sales_overview?date_from=2024-01-01", base))
            .await
            .unwrap();
        assert_eq!(missing.status().as_u16(), 400);
    }

    #[tokio::test]
    async fn test_range_too_large_is_bad_request() {
        let base = spawn_server().await;
        let url = format!(
            "{}/api/d400/sales_overview?date_from=2000-01-01&date_to=2024-01-01",
            base
        );
        let response = reqwest::get(url).await.unwrap();
        assert_eq!(response.status().as_u16(), 400);
        assert!(response.text().await.unwrap().contains("exceeds the limit"));
    }

    #[tokio::test]
    async fn test_default_range_body() {
        let base = spawn_server().await;
        let response = reqwest::get(format!("{}/api/d400/default_range", base))
            .await
            .unwrap();
        assert_eq!(response.status().as_u16(), 200);

        let range: SalesOverviewRequest = response.json().await.unwrap();
        assert_eq!(
            (range.date_to - range.date_from).num_days(),
            i64::from(config::get().dashboard.default_range_days)
        );
    }
}
