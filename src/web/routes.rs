//! HTTP routes for the dashboard
//!
//! Provides API endpoints for the descriptors and static file serving.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::{StatusCode, header},
    response::{Html, IntoResponse},
    routing::get,
};
use rust_embed::RustEmbed;
use serde::Serialize;

use super::server::AppState;
use crate::config::ThemeConfig;
use crate::dashboard::Dashboard;

/// Embedded static assets
#[derive(RustEmbed)]
#[folder = "web-assets/"]
struct Assets;

/// Frontend configuration
#[derive(Serialize)]
struct FrontendConfig {
    api_endpoint: Option<String>,
    theme: ThemeConfig,
}

/// Create API routes
pub fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/dashboard", get(get_dashboard))
        .route("/api/config", get(get_config))
        .route("/api/health", get(health_check))
}

/// Create static file routes
pub fn static_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(index_html))
        .route("/{*path}", get(static_handler))
}

/// GET /api/dashboard - Returns every chart and metric descriptor
async fn get_dashboard(State(state): State<Arc<AppState>>) -> Json<Dashboard> {
    Json(state.dashboard.clone())
}

/// GET /api/config - Returns frontend configuration
async fn get_config(State(state): State<Arc<AppState>>) -> Json<FrontendConfig> {
    Json(FrontendConfig {
        api_endpoint: state.api_endpoint.clone(),
        theme: state.dashboard.theme.clone(),
    })
}

/// GET /api/health - Health check endpoint
async fn health_check() -> &'static str {
    "ok"
}

/// GET / - Serve index.html
async fn index_html() -> impl IntoResponse {
    match Assets::get("index.html") {
        Some(content) => Html(content.data.into_owned()).into_response(),
        None => (StatusCode::NOT_FOUND, "index.html not found").into_response(),
    }
}

/// Static file handler for embedded assets
async fn static_handler(Path(path): Path<String>) -> impl IntoResponse {
    let path = path.trim_start_matches('/');

    match Assets::get(path) {
        Some(content) => {
            let mime = mime_guess::from_path(path).first_or_octet_stream();
            (
                [(header::CONTENT_TYPE, mime.as_ref().to_string())],
                content.data.into_owned(),
            )
                .into_response()
        }
        None => (StatusCode::NOT_FOUND, format!("File not found: {}", path)).into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DashboardConfig;
    use crate::dashboard::build_dashboard;
    use crate::dataset::StudyDataset;

    fn state() -> Arc<AppState> {
        let dashboard = build_dashboard(
            &StudyDataset::student_dropout(),
            &DashboardConfig::default(),
        )
        .unwrap();
        Arc::new(AppState {
            dashboard,
            api_endpoint: Some("http://example.test".to_string()),
        })
    }

    #[tokio::test]
    async fn test_health_check() {
        assert_eq!(health_check().await, "ok");
    }

    #[tokio::test]
    async fn test_get_dashboard() {
        let Json(dashboard) = get_dashboard(State(state())).await;
        assert_eq!(dashboard.feature_importance.entries.len(), 10);
        assert_eq!(dashboard.metrics.cards.len(), 4);
    }

    #[tokio::test]
    async fn test_get_config() {
        let Json(config) = get_config(State(state())).await;
        assert_eq!(config.api_endpoint.as_deref(), Some("http://example.test"));
        assert_eq!(config.theme.text_color, "#8B0000");
    }

    #[tokio::test]
    async fn test_index_served() {
        let response = index_html().await.into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_static_asset_mime() {
        let response = static_handler(Path("app.js".to_string()))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers().get(header::CONTENT_TYPE).unwrap();
        assert!(content_type.to_str().unwrap().contains("javascript"));
    }

    #[tokio::test]
    async fn test_missing_asset() {
        let response = static_handler(Path("nope.css".to_string()))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
