//! Newsprobe HTTP server.
//!
//! Exposes the analysis pipeline as a single `POST /analyze` endpoint plus
//! a static landing page. Every request is independent and stateless; the
//! shared [`AppState`] holds only the immutable analyzer.

mod routes;
mod state;

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use axum::{Router, routing::post};
use newsprobe_core::{Analyzer, AnalyzerConfig, NewsprobeError};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeFile,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing_subscriber::EnvFilter;

use state::AppState;

/// Bind address when `NEWSPROBE_ADDR` is unset.
const DEFAULT_ADDR: &str = "127.0.0.1:3000";

/// Whole-request bound, sitting above the fetch timeout so the fetch gives
/// up first and the client still gets a structured error record.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any);

    Router::new()
        .route_service("/", ServeFile::new(static_dir().join("index.html")))
        .route("/analyze", post(routes::analyze))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(REQUEST_TIMEOUT_SECS)))
        .layer(cors)
        .with_state(state)
}

fn static_dir() -> PathBuf {
    env::var("NEWSPROBE_STATIC_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("static"))
}

/// Builds the analyzer from `NEWSPROBE_CONFIG`, the platform config file,
/// or built-in defaults, in that order.
fn load_analyzer() -> Result<Analyzer, NewsprobeError> {
    let config = match env::var("NEWSPROBE_CONFIG") {
        Ok(path) => AnalyzerConfig::load(&path)?,
        Err(_) => AnalyzerConfig::load_default()?,
    };
    Analyzer::new(config)
}

#[tokio::main]
async fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let analyzer = match load_analyzer() {
        Ok(analyzer) => analyzer,
        Err(e) => {
            tracing::error!(error = %e, "failed to build analyzer from configuration");
            std::process::exit(1);
        }
    };

    let state = AppState::new(analyzer);
    let app = create_router(state);

    let addr = env::var("NEWSPROBE_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string());
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(addr = %addr, error = %e, "failed to bind");
            std::process::exit(1);
        }
    };

    tracing::info!("newsprobe server listening on http://{}", addr);

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error = %e, "server error");
        std::process::exit(1);
    }
}
