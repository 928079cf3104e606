//! Scheme service client over `reqwest`
//!
//! Native implementation of the `SchemeApi` port, used by the headless
//! commands. Credentials come from an injected provider on every request.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use scheme_admin_core::{
    CredentialProvider, Endpoint, SchemeApi, SchemeError, SchemeListResponse, SchemeRecord,
    SchemeResult,
};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

use crate::config::ApiSettings;

pub struct HttpSchemeApi {
    client: Client,
    base_url: String,
    credentials: Arc<dyn CredentialProvider + Send + Sync>,
}

impl HttpSchemeApi {
    pub fn new(
        base_url: impl Into<String>,
        timeout: Option<Duration>,
        credentials: Arc<dyn CredentialProvider + Send + Sync>,
    ) -> Self {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().unwrap_or_default();

        Self {
            client,
            base_url: base_url.into(),
            credentials,
        }
    }

    pub fn from_settings(api: &ApiSettings) -> Self {
        Self::new(
            api.base_url.clone(),
            api.timeout_seconds.map(Duration::from_secs),
            Arc::new(api.credentials()),
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, endpoint: &Endpoint<'_>) -> RequestBuilder {
        let url = endpoint.url(&self.base_url);
        debug!(method = endpoint.method(), %url, "scheme service request");

        let builder = match endpoint {
            Endpoint::List => self.client.get(url),
            Endpoint::Update(_) => self.client.put(url),
            Endpoint::Delete(_) => self.client.post(url),
        };

        match self.credentials.credentials().cookie_header() {
            Some(cookie) => builder.header(reqwest::header::COOKIE, cookie),
            None => builder,
        }
    }

    async fn send(&self, builder: RequestBuilder) -> SchemeResult<Response> {
        let response = builder
            .send()
            .await
            .map_err(|e| SchemeError::Transport(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = response.text().await.unwrap_or_default();
        warn!(status = status.as_u16(), "scheme service returned an error");
        Err(SchemeError::from_status(status.as_u16(), message))
    }
}

#[async_trait(?Send)]
impl SchemeApi for HttpSchemeApi {
    async fn list_schemes(&self) -> SchemeResult<Vec<SchemeRecord>> {
        let response = self.send(self.request(&Endpoint::List)).await?;
        let body: SchemeListResponse = response
            .json()
            .await
            .map_err(|e| SchemeError::Decode(e.to_string()))?;
        Ok(body.schemes)
    }

    async fn update_scheme(&self, id: &str, record: &SchemeRecord) -> SchemeResult<()> {
        self.send(self.request(&Endpoint::Update(id)).json(record))
            .await
            .map(|_| ())
    }

    async fn delete_scheme(&self, id: &str, record: &SchemeRecord) -> SchemeResult<()> {
        self.send(self.request(&Endpoint::Delete(id)).json(record))
            .await
            .map(|_| ())
    }
}
