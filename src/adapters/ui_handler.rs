use axum::{
    extract::State,
    http::{header, StatusCode, Uri},
    response::IntoResponse,
    Json,
};
use rust_embed::RustEmbed;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::config::Settings;

/// Built Leptos bundle, embedded at compile time when present
#[derive(RustEmbed)]
#[folder = "ui/dist"]
#[allow_missing = true]
struct UiAssets;

/// Runtime settings handed to the browser UI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    pub api_base_url: String,
}

pub struct UIHandler;

impl UIHandler {
    /// Whether a UI bundle can be served, from disk or embedded
    pub fn has_bundle(settings: &Settings) -> bool {
        match &settings.ui.dist_dir {
            Some(dir) => dir.join("index.html").is_file(),
            None => UiAssets::get("index.html").is_some(),
        }
    }

    /// `GET /ui-config.json`
    pub async fn config(State(settings): State<Arc<Settings>>) -> Json<UiConfig> {
        Json(UiConfig {
            api_base_url: settings.api.base_url.clone(),
        })
    }

    /// Serve an embedded asset, falling back to `index.html` for client-side routes
    pub async fn serve(uri: Uri) -> impl IntoResponse {
        let path = uri.path().trim_start_matches('/');
        let path = if path.is_empty() { "index.html" } else { path };

        if let Some(content) = UiAssets::get(path) {
            let mime = mime_guess::from_path(path).first_or_octet_stream();
            return ([(header::CONTENT_TYPE, mime.as_ref())], content.data).into_response();
        }

        match UiAssets::get("index.html") {
            Some(content) => (
                [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
                content.data,
            )
                .into_response(),
            None => (
                StatusCode::NOT_FOUND,
                "UI bundle not built; run `trunk build` in ui/ or set ui.dist_dir",
            )
                .into_response(),
        }
    }
}
