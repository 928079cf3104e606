use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
    response::IntoResponse,
    routing::{get, post, put},
    Json, Router,
};
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

/// Scheme service stand-in bound to a random local port
pub struct FakeUpstream {
    pub addr: SocketAddr,
    pub base_url: String,
    pub state: Arc<UpstreamState>,
}

#[derive(Default)]
pub struct UpstreamState {
    pub schemes: Mutex<Vec<Value>>,
    pub required_cookie: Option<String>,
    /// Bodies received by update/delete, in arrival order
    pub received: Mutex<Vec<(String, Value)>>,
}

impl UpstreamState {
    fn authorized(&self, headers: &HeaderMap) -> bool {
        match &self.required_cookie {
            None => true,
            Some(expected) => headers
                .get(header::COOKIE)
                .and_then(|v| v.to_str().ok())
                .map(|v| v == expected)
                .unwrap_or(false),
        }
    }
}

impl FakeUpstream {
    pub async fn start(schemes: Vec<Value>, required_cookie: Option<&str>) -> Self {
        let state = Arc::new(UpstreamState {
            schemes: Mutex::new(schemes),
            required_cookie: required_cookie.map(str::to_string),
            received: Mutex::new(Vec::new()),
        });

        let app = Router::new()
            .route("/getschemes", get(list))
            .route("/updatescheme/:id", put(update))
            .route("/deletescheme/:id", post(delete))
            .route("/garbage/getschemes", get(|| async { "<html>not json</html>" }))
            .route(
                "/slow/getschemes",
                get(|| async {
                    tokio::time::sleep(std::time::Duration::from_secs(2)).await;
                    Json(json!({ "schemes": [] }))
                }),
            )
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        FakeUpstream {
            addr,
            base_url,
            state,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub fn scheme_ids(&self) -> Vec<String> {
        self.state
            .schemes
            .lock()
            .unwrap()
            .iter()
            .filter_map(|s| s["_id"].as_str().map(str::to_string))
            .collect()
    }

    pub fn received(&self) -> Vec<(String, Value)> {
        self.state.received.lock().unwrap().clone()
    }
}

/// A base URL nothing listens on
pub async fn closed_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

pub fn scheme(id: &str, name: &str) -> Value {
    json!({
        "_id": id,
        "srno": 1,
        "schemename": name,
        "ministry": "Health",
        "desc": "Description",
        "place": "Mumbai",
        "moneygranted": 1000,
        "moneyspent": "250",
        "timeOfschemeAdded": "2024-02-01T09:30:00.000Z",
        "__v": 0
    })
}

async fn list(State(state): State<Arc<UpstreamState>>, headers: HeaderMap) -> impl IntoResponse {
    if !state.authorized(&headers) {
        return (StatusCode::UNAUTHORIZED, Json(json!({ "error": "Unauthorized" }))).into_response();
    }
    let schemes = state.schemes.lock().unwrap().clone();
    Json(json!({ "schemes": schemes })).into_response()
}

async fn update(
    State(state): State<Arc<UpstreamState>>,
    Path(id): Path<String>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> impl IntoResponse {
    if !state.authorized(&headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    state.received.lock().unwrap().push((id.clone(), body.clone()));
    if id == "explode" {
        return (StatusCode::INTERNAL_SERVER_ERROR, "database unavailable").into_response();
    }

    let mut schemes = state.schemes.lock().unwrap();
    match schemes.iter_mut().find(|s| s["_id"] == id.as_str()) {
        Some(slot) => {
            *slot = body;
            Json(json!({ "message": "Scheme updated" })).into_response()
        }
        None => (StatusCode::NOT_FOUND, "no such scheme").into_response(),
    }
}

async fn delete(
    State(state): State<Arc<UpstreamState>>,
    Path(id): Path<String>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> impl IntoResponse {
    if !state.authorized(&headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    state.received.lock().unwrap().push((id.clone(), body));

    let mut schemes = state.schemes.lock().unwrap();
    let before = schemes.len();
    schemes.retain(|s| s["_id"] != id.as_str());
    if schemes.len() < before {
        Json(json!({ "message": "Scheme deleted" })).into_response()
    } else {
        (StatusCode::NOT_FOUND, "no such scheme").into_response()
    }
}
