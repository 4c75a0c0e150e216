//! Web server for the dashboard
//!
//! Provides an HTTP server using Axum to serve the dashboard page
//! and JSON API endpoints.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

use crate::dashboard::Dashboard;

use super::routes;

/// Shared application state
pub struct AppState {
    pub dashboard: Dashboard,
    pub api_endpoint: Option<String>,
}

/// Configuration for the web server
pub struct ServerConfig {
    pub port: u16,
    pub open_browser: bool,
    pub api_endpoint: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8501,
            open_browser: true,
            api_endpoint: None,
        }
    }
}

/// Build the router without binding a socket
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(routes::api_routes())
        .merge(routes::static_routes())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Start the web server and serve the dashboard until the process is stopped
pub async fn start_server(
    dashboard: Dashboard,
    config: ServerConfig,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let state = Arc::new(AppState {
        dashboard,
        api_endpoint: config.api_endpoint.clone(),
    });

    let addr = SocketAddr::from(([127, 0, 0, 1], config.port));
    let listener = TcpListener::bind(addr).await?;

    let url = format!("http://localhost:{}", config.port);
    tracing::info!(%addr, "dashboard server listening");
    eprintln!("Serving dashboard at {}", url);

    if config.open_browser {
        eprintln!("Opening browser...");
        if let Err(e) = open::that(&url) {
            tracing::warn!(error = %e, "could not open browser");
            eprintln!("Please open {} manually", url);
        }
    }

    eprintln!("Press Ctrl+C to stop the server");

    axum::serve(listener, app(state)).await?;

    Ok(())
}
