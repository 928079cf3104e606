//! API client for the scheme service, running in the browser

use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder, Response};
use scheme_admin_core::{
    CredentialProvider, Credentials, Endpoint, SchemeApi, SchemeError, SchemeListResponse,
    SchemeRecord, SchemeResult, DEFAULT_API_BASE_URL,
};
use serde::Deserialize;
use web_sys::RequestCredentials;

/// Served by the host next to the bundle
const UI_CONFIG_PATH: &str = "/ui-config.json";

#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    pub api_base_url: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }
}

/// Ask the host which scheme service to talk to.
/// Falls back to the hosted service when the UI runs without the host (e.g. `trunk serve`).
pub async fn load_ui_config() -> UiConfig {
    let response = match Request::get(UI_CONFIG_PATH).send().await {
        Ok(response) if response.ok() => response,
        Ok(response) => {
            log::info!("No UI config from host (status {}), using defaults", response.status());
            return UiConfig::default();
        }
        Err(e) => {
            log::info!("No UI config from host ({}), using defaults", e);
            return UiConfig::default();
        }
    };

    match response.json::<UiConfig>().await {
        Ok(config) => config,
        Err(e) => {
            log::warn!("Ignoring malformed UI config: {}", e);
            UiConfig::default()
        }
    }
}

/// `SchemeApi` over `fetch`, sending the browser's session cookie
#[derive(Debug, Clone, PartialEq)]
pub struct BrowserSchemeApi {
    base_url: String,
    credentials: Credentials,
}

impl BrowserSchemeApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            credentials: Credentials::BrowserSession,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, endpoint: &Endpoint<'_>) -> RequestBuilder {
        let url = endpoint.url(&self.base_url);
        log::debug!("{} {}", endpoint.method(), url);

        let builder = match endpoint {
            Endpoint::List => Request::get(&url),
            Endpoint::Update(_) => Request::put(&url),
            Endpoint::Delete(_) => Request::post(&url),
        };

        match self.credentials() {
            Credentials::BrowserSession => builder.credentials(RequestCredentials::Include),
            // Browsers refuse a scripted Cookie header
            Credentials::Cookie(_) | Credentials::None => {
                builder.credentials(RequestCredentials::Omit)
            }
        }
    }

    async fn send_json(&self, endpoint: Endpoint<'_>, record: &SchemeRecord) -> SchemeResult<()> {
        let request = self
            .request(&endpoint)
            .json(record)
            .map_err(|e| SchemeError::Validation(format!("Failed to encode scheme: {}", e)))?;
        let response = request
            .send()
            .await
            .map_err(|e| SchemeError::Transport(e.to_string()))?;
        check_status(response).await.map(|_| ())
    }
}

impl CredentialProvider for BrowserSchemeApi {
    fn credentials(&self) -> Credentials {
        self.credentials.clone()
    }
}

async fn check_status(response: Response) -> SchemeResult<Response> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let message = response.text().await.unwrap_or_default();
    log::warn!("Scheme service returned {}: {}", status, message);
    Err(SchemeError::from_status(status, message))
}

#[async_trait(?Send)]
impl SchemeApi for BrowserSchemeApi {
    async fn list_schemes(&self) -> SchemeResult<Vec<SchemeRecord>> {
        let response = self
            .request(&Endpoint::List)
            .send()
            .await
            .map_err(|e| SchemeError::Transport(e.to_string()))?;
        let response = check_status(response).await?;
        let body = response
            .json::<SchemeListResponse>()
            .await
            .map_err(|e| SchemeError::Decode(e.to_string()))?;
        Ok(body.schemes)
    }

    async fn update_scheme(&self, id: &str, record: &SchemeRecord) -> SchemeResult<()> {
        self.send_json(Endpoint::Update(id), record).await
    }

    async fn delete_scheme(&self, id: &str, record: &SchemeRecord) -> SchemeResult<()> {
        self.send_json(Endpoint::Delete(id), record).await
    }
}
