use crate::config::ServerConfig;
use crate::server::{routes, static_files};
use crate::state::AppState;
use axum::{
    extract::DefaultBodyLimit,
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use std::net::SocketAddr;
use tokio::signal;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tracing::{info, warn};

/// Build the Axum application
pub fn build_app(state: AppState) -> Router {
    // CORS defaults to local origins; override only for explicit demo use.
    let cors = if state.config.allow_any_origin {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let local = |host: &str| {
            HeaderValue::from_str(&format!("http://{}:{}", host, state.config.port))
        };
        let origins: Vec<HeaderValue> = ["localhost", "127.0.0.1"]
            .into_iter()
            .filter_map(|host| local(host).ok())
            .collect();
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    };
    let max_body_bytes = state.config.max_body_bytes;

    // API routes
    let api_routes = Router::new()
        .route("/respond", post(routes::respond))
        .route("/topics", get(routes::list_topics));

    Router::new()
        .route("/", get(static_files::index))
        .route("/health", get(routes::health))
        .route("/metrics", get(routes::metrics))
        .nest("/api", api_routes)
        .fallback(static_files::serve_static)
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(max_body_bytes))
        .layer(CompressionLayer::new())
        .layer(cors)
        .with_state(state)
}

/// Initialize metrics exporter and return handle for rendering
pub fn init_metrics() -> anyhow::Result<PrometheusHandle> {
    let handle = PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| anyhow::anyhow!("Failed to install metrics: {}", e))?;

    metrics::describe_counter!(
        "biasio_responses_total",
        "Total number of composed responses by topic and region"
    );
    metrics::describe_counter!(
        "biasio_rejected_total",
        "Total number of requests rejected for lacking a message"
    );
    metrics::describe_histogram!(
        "biasio_compose_latency_us",
        metrics::Unit::Microseconds,
        "Response composition latency in microseconds"
    );

    info!("Metrics exporter initialized");
    Ok(handle)
}

/// Run the server
pub async fn run_server(config: ServerConfig, addr: SocketAddr) -> anyhow::Result<()> {
    let mut state = AppState::new(config)?;
    info!(
        "Loaded topic catalog with {} topics",
        state.composer.catalog().len()
    );

    match init_metrics() {
        Ok(handle) => state = state.with_metrics(handle),
        Err(e) => warn!("Metrics disabled: {}", e),
    }

    let app = build_app(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Listen for shutdown signals (SIGTERM, SIGINT)
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    warn!("Shutdown signal received, stopping server...");
}
