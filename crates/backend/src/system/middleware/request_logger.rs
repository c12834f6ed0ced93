use axum::body::to_bytes;
use axum::body::Body;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;
use contracts::shared::number_format::format_number;

/// Response size with thousands grouped by dots: 1234567 -> "1.234.567"
fn format_size(n: usize) -> String {
    format_number(n as u64, '.')
}

/// HTTP request logging middleware
///
/// Logs duration, response size, status code, method and path.
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let uri = req.uri().clone();

    let response = next.run(req).await;
    let (parts, body) = response.into_parts();

    // Buffer the body to report its real size
    let bytes = match to_bytes(body, usize::MAX).await {
        Ok(b) => b,
        Err(e) => {
            tracing::warn!(
                "{:>5}ms | {:>12} | {} {:>6} {} ({})",
                start.elapsed().as_millis(),
                "error",
                parts.status.as_u16(),
                method,
                uri.path(),
                e
            );
            return Response::from_parts(parts, Body::default());
        }
    };

    let duration = start.elapsed();
    if parts.status.is_success() {
        tracing::info!(
            "{:>5}ms | {:>12} | {} {:>6} {}",
            duration.as_millis(),
            format_size(bytes.len()),
            parts.status.as_u16(),
            method,
            uri
        );
    } else {
        tracing::warn!(
            "{:>5}ms | {:>12} | {} {:>6} {}",
            duration.as_millis(),
            format_size(bytes.len()),
            parts.status.as_u16(),
            method,
            uri
        );
    }

    Response::from_parts(parts, Body::from(bytes))
}
