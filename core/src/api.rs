//! Port for the remote scheme service
//!
//! Implementations live next to their HTTP stack: `reqwest` for the native
//! host, `gloo-net` for the browser.

use async_trait::async_trait;

use crate::error::SchemeResult;
use crate::record::SchemeRecord;

/// Origin of the hosted scheme service
pub const DEFAULT_API_BASE_URL: &str = "https://mehdb.vercel.app";

/// Session material attached to every request
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Credentials {
    /// Send nothing
    #[default]
    None,
    /// Let the browser attach its cookie jar (`credentials: include`)
    BrowserSession,
    /// Send an explicit `Cookie` header
    Cookie(String),
}

impl Credentials {
    pub fn cookie_header(&self) -> Option<&str> {
        match self {
            Credentials::Cookie(value) if !value.is_empty() => Some(value),
            _ => None,
        }
    }
}

/// Supplies credentials to the network layer.
///
/// Called once per request so that a refreshed session is picked up
/// without rebuilding the client.
pub trait CredentialProvider {
    fn credentials(&self) -> Credentials;
}

impl CredentialProvider for Credentials {
    fn credentials(&self) -> Credentials {
        self.clone()
    }
}

/// Endpoints exposed by the scheme service
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint<'a> {
    List,
    Update(&'a str),
    Delete(&'a str),
}

impl Endpoint<'_> {
    /// Path relative to the service origin, with the id encoded as one segment
    pub fn path(&self) -> String {
        match self {
            Endpoint::List => "/getschemes".to_string(),
            Endpoint::Update(id) => format!("/updatescheme/{}", urlencoding::encode(id)),
            Endpoint::Delete(id) => format!("/deletescheme/{}", urlencoding::encode(id)),
        }
    }

    pub fn method(&self) -> &'static str {
        match self {
            Endpoint::List => "GET",
            Endpoint::Update(_) => "PUT",
            Endpoint::Delete(_) => "POST",
        }
    }

    /// Absolute URL against `base_url`, tolerating a trailing slash on the base
    pub fn url(&self, base_url: &str) -> String {
        format!("{}{}", base_url.trim_end_matches('/'), self.path())
    }
}

/// Operations the scheme screen needs from the service.
///
/// Futures are not required to be `Send`: the browser implementation runs on
/// the single-threaded event loop.
#[async_trait(?Send)]
pub trait SchemeApi {
    /// `GET /getschemes`
    async fn list_schemes(&self) -> SchemeResult<Vec<SchemeRecord>>;

    /// `PUT /updatescheme/{id}` with the full record as body
    async fn update_scheme(&self, id: &str, record: &SchemeRecord) -> SchemeResult<()>;

    /// `POST /deletescheme/{id}` with the full record as body
    async fn delete_scheme(&self, id: &str, record: &SchemeRecord) -> SchemeResult<()>;
}

#[async_trait(?Send)]
impl<T: SchemeApi + ?Sized> SchemeApi for &T {
    async fn list_schemes(&self) -> SchemeResult<Vec<SchemeRecord>> {
        (**self).list_schemes().await
    }

    async fn update_scheme(&self, id: &str, record: &SchemeRecord) -> SchemeResult<()> {
        (**self).update_scheme(id, record).await
    }

    async fn delete_scheme(&self, id: &str, record: &SchemeRecord) -> SchemeResult<()> {
        (**self).delete_scheme(id, record).await
    }
}
