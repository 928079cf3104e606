use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::adapters::ui_handler::UIHandler;
use crate::config::Settings;

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub checks: HealthChecks,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthChecks {
    pub config: String,
    pub ui_bundle: String,
}

pub struct HealthHandler {
    settings: Arc<Settings>,
    start_time: std::time::Instant,
}

impl HealthHandler {
    pub fn new(settings: Arc<Settings>) -> Self {
        Self {
            settings,
            start_time: std::time::Instant::now(),
        }
    }

    fn ui_check(&self) -> &'static str {
        if UIHandler::has_bundle(&self.settings) {
            "ok"
        } else {
            "missing"
        }
    }

    /// Basic health check - returns 200 if server is running
    pub async fn health(&self) -> impl IntoResponse {
        let status = HealthStatus {
            status: "healthy".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            uptime_seconds: self.start_time.elapsed().as_secs(),
            checks: HealthChecks {
                config: "ok".to_string(),
                ui_bundle: self.ui_check().to_string(),
            },
        };

        (StatusCode::OK, Json(status))
    }

    /// Readiness check - the host is only useful once it has a UI to serve
    pub async fn ready(&self) -> impl IntoResponse {
        if UIHandler::has_bundle(&self.settings) {
            (StatusCode::OK, Json(serde_json::json!({
                "status": "ready",
                "api_base_url": self.settings.api.base_url,
            })))
        } else {
            (StatusCode::SERVICE_UNAVAILABLE, Json(serde_json::json!({
                "status": "not_ready",
                "message": "UI bundle not found",
            })))
        }
    }

    /// Liveness check - returns 200 if server is alive
    pub async fn live(&self) -> impl IntoResponse {
        (StatusCode::OK, Json(serde_json::json!({
            "status": "alive",
            "message": "Server is alive"
        })))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ApiSettings, LoggingSettings, ServerSettings, UiSettings};

    fn settings(ui: UiSettings) -> Arc<Settings> {
        Arc::new(Settings {
            server: ServerSettings {
                host: "127.0.0.1".to_string(),
                port: 3000,
            },
            api: ApiSettings::default(),
            ui,
            logging: LoggingSettings::default(),
        })
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let handler = HealthHandler::new(settings(UiSettings::default()));
        let response = handler.health().await.into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_ready_with_ui_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), "<html></html>").unwrap();
        let handler = HealthHandler::new(settings(UiSettings {
            dist_dir: Some(dir.path().to_path_buf()),
        }));

        let response = handler.ready().await.into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_not_ready_with_empty_ui_dir() {
        let dir = tempfile::tempdir().unwrap();
        let handler = HealthHandler::new(settings(UiSettings {
            dist_dir: Some(dir.path().to_path_buf()),
        }));

        let response = handler.ready().await.into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_live_endpoint() {
        let handler = HealthHandler::new(settings(UiSettings::default()));
        let response = handler.live().await.into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
