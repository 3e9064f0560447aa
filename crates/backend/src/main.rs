pub mod api;
pub mod dashboards;
pub mod routes;
pub mod shared;

use axum::http::{header, Method};
use axum::Router;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use shared::config::Config;

/// Console plus `target/logs/backend.log`, filtered by `RUST_LOG` (default `info`)
fn init_tracing() -> anyhow::Result<()> {
    let log_dir = std::path::Path::new("target").join("logs");
    std::fs::create_dir_all(&log_dir)?;

    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_dir.join("backend.log"))?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::sync::Arc::new(log_file))
                .with_ansi(false),
        )
        .init();

    Ok(())
}

/// API routes, the built frontend as fallback, request logging and CORS
fn build_app(config: &Config) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    routes::configure_routes(config.ui.clone())
        .fallback_service(ServeDir::new(&config.server.static_dir))
        .layer(axum::middleware::from_fn(api::middleware::request_logger))
        .layer(cors)
}

async fn bind(port: u16) -> anyhow::Result<TcpListener> {
    let addr: SocketAddr = ([0, 0, 0, 0], port).into();
    tracing::info!("Binding server to http://{}", addr);

    TcpListener::bind(addr).await.map_err(|e| {
        if e.kind() == std::io::ErrorKind::AddrInUse {
            tracing::error!("Port {} is already in use, stop the other process or change server.port", port);
        } else {
            tracing::error!("Failed to bind to port {}: {}", port, e);
        }
        e.into()
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing()?;

    let config = shared::config::load_config()?;

    // Nothing to show without data, so a load failure stops startup
    let dataset_path = shared::config::get_dataset_path(&config);
    if let Err(e) = shared::data::dataset::initialize_dataset(&dataset_path) {
        tracing::error!("Failed to load dataset: {:#}", e);
        return Err(e);
    }

    let glossary = shared::glossary::glossary()?;
    tracing::info!("Loaded glossary with {} columns", glossary.len());

    let app = build_app(&config);
    let listener = bind(config.server.port).await?;
    tracing::info!("Serving on port {}", config.server.port);

    axum::serve(listener, app).await?;

    Ok(())
}
