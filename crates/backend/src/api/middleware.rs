use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::middleware::Next;
use axum::response::Response;
use chrono::Local;
use contracts::shared::format::format_thousands;
use std::time::Instant;

/// ANSI color for the status column: cyan for success, yellow for client errors, red otherwise
pub fn status_color(status: StatusCode) -> &'static str {
    if status.is_success() {
        "36"
    } else if status.is_client_error() || status.is_redirection() {
        "33"
    } else {
        "31"
    }
}

/// One colored console line per request: time, latency, body size, status, method, path
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let (parts, body) = next.run(req).await.into_parts();

    // Buffer the body to report its real size
    let (body, size) = match to_bytes(body, usize::MAX).await {
        Ok(bytes) => {
            let size = format_thousands(bytes.len() as i64);
            (Body::from(bytes), size)
        }
        Err(e) => {
            tracing::warn!("Failed to buffer response body for {}: {}", path, e);
            (Body::default(), "error".to_string())
        }
    };

    println!(
        "\x1b[{}m{}\x1b[0m | {:>5}ms | {:>12} | {} {:>6} {}",
        status_color(parts.status),
        Local::now().format("%H:%M:%S"),
        start.elapsed().as_millis(),
        size,
        parts.status.as_u16(),
        method,
        path
    );

    Response::from_parts(parts, body)
}
