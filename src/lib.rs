//! # Scheme Admin
//!
//! Host and headless client for the scheme administration screen.
//!
//! ## Features
//!
//! - **Web UI hosting**: serves the Leptos bundle (embedded or from disk) with SPA fallback
//! - **UI configuration**: `/ui-config.json` tells the browser which scheme service to call
//! - **Health Checks**: Kubernetes-ready health endpoints
//! - **Headless commands**: `list`, `update` and `delete` through the same state machine as the UI
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use scheme_admin::config::Settings;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let settings = Arc::new(Settings::new()?);
//!     let app = scheme_admin::create_app(settings.clone());
//!     let listener = tokio::net::TcpListener::bind("127.0.0.1:3000").await?;
//!     axum::serve(listener, app).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! - **scheme-admin-core**: record model, errors, `SchemeApi` port, list/modal state machine
//! - **Adapters**: `reqwest` client, UI and health handlers
//! - **Config**: layered configuration (file, environment, CLI)

pub mod adapters;
pub mod cli;
pub mod commands;
pub mod config;

use crate::adapters::health_handler::HealthHandler;
use crate::adapters::ui_handler::UIHandler;
use crate::config::Settings;
use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::services::{ServeDir, ServeFile};

/// Creates the Axum application router with all endpoints configured.
///
/// The UI comes from `ui.dist_dir` when set, otherwise from the bundle
/// embedded at build time.
pub fn create_app(settings: Arc<Settings>) -> Router {
    let health_handler = Arc::new(HealthHandler::new(settings.clone()));

    let router = Router::new()
        .route("/health", get({
            let handler = health_handler.clone();
            move || {
                let h = handler.clone();
                async move { h.health().await }
            }
        }))
        .route("/health/ready", get({
            let handler = health_handler.clone();
            move || {
                let h = handler.clone();
                async move { h.ready().await }
            }
        }))
        .route("/health/live", get({
            let handler = health_handler.clone();
            move || {
                let h = handler.clone();
                async move { h.live().await }
            }
        }))
        .route("/ui-config.json", get(UIHandler::config))
        .with_state(settings.clone());

    match &settings.ui.dist_dir {
        Some(dir) => {
            let index = ServeFile::new(dir.join("index.html"));
            router.fallback_service(ServeDir::new(dir).fallback(index))
        }
        None => router.fallback(UIHandler::serve),
    }
}
