// Hand-crafted async HTTP client for the Orion context broker (NGSIv2).
//
// Resource endpoints live under /v2/; version metadata under /version.
// Auth: optional `Authorization: Bearer` header.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;
use url::Url;

use crate::Error;

/// Default request timeout when the caller does not override it.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

// ── Connection parameters ────────────────────────────────────────────

/// Connection parameters captured at construction time.
///
/// `tls` selects the URL scheme; the broker terminates TLS itself or
/// behind a proxy, so no certificate options are exposed here.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub host: String,
    pub port: u16,
    pub tls: bool,
    pub token: Option<SecretString>,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            host: "localhost".into(),
            port: 1026,
            tls: false,
            token: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

// ── Tenant scope ─────────────────────────────────────────────────────

/// Tenant partition forwarded with every resource request as the
/// `Fiware-Service` / `Fiware-ServicePath` header pair.
#[derive(Debug, Clone, Default)]
pub struct Scope {
    pub service: Option<String>,
    pub service_path: Option<String>,
}

impl Scope {
    pub fn new(service: Option<String>, service_path: Option<String>) -> Self {
        Self {
            service,
            service_path,
        }
    }

    /// Returns `true` when neither header would be sent.
    pub fn is_empty(&self) -> bool {
        self.service.is_none() && self.service_path.is_none()
    }
}

// ── Error response shape from the broker ─────────────────────────────

#[derive(serde::Deserialize)]
struct ErrorResponse {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    description: Option<String>,
}

// ── Client ───────────────────────────────────────────────────────────

/// Async client for the Orion NGSIv2 API.
///
/// Construction captures connection parameters and builds the HTTP
/// client; no network I/O happens until an operation is issued.
pub struct OrionClient {
    http: reqwest::Client,
    base_url: Url,
}

impl OrionClient {
    /// Build a client from connection parameters.
    ///
    /// When a token is present it is injected as a sensitive
    /// `Authorization: Bearer` default header on every request.
    pub fn new(config: &ClientConfig) -> Result<Self, Error> {
        let scheme = if config.tls { "https" } else { "http" };
        let base_url = Url::parse(&format!(
            "{scheme}://{host}:{port}/",
            host = config.host,
            port = config.port
        ))?;

        let mut headers = HeaderMap::new();
        if let Some(ref token) = config.token {
            let mut value = HeaderValue::from_str(&format!(
                "Bearer {}",
                token.expose_secret()
            ))
            .map_err(|e| Error::InvalidToken {
                message: e.to_string(),
            })?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("orionctl/", env!("CARGO_PKG_VERSION")))
            .default_headers(headers)
            .build()
            .map_err(|e| Error::ClientBuild {
                message: e.to_string(),
            })?;

        Ok(Self { http, base_url })
    }

    // ── URL builder ──────────────────────────────────────────────────

    /// Join a relative path (e.g. `"v2/subscriptions"`) onto the base URL.
    fn url(&self, path: &str) -> Result<Url, Error> {
        // base_url always ends with `/`, so joining a relative path works.
        Ok(self.base_url.join(path)?)
    }

    /// Scope headers for a request builder.
    fn scoped(&self, req: reqwest::RequestBuilder, scope: &Scope) -> reqwest::RequestBuilder {
        let req = match scope.service {
            Some(ref service) => req.header("Fiware-Service", service),
            None => req,
        };
        match scope.service_path {
            Some(ref path) => req.header("Fiware-ServicePath", path),
            None => req,
        }
    }

    // ── HTTP verbs ───────────────────────────────────────────────────

    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        scope: &Scope,
    ) -> Result<T, Error> {
        let url = self.url(path)?;
        debug!("GET {url}");

        let resp = self.scoped(self.http.get(url), scope).send().await?;
        self.handle_response(resp).await
    }

    /// POST a resource and return the identifier the broker assigned,
    /// taken verbatim from the last segment of the `Location` header.
    pub(crate) async fn post_created<B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
        scope: &Scope,
    ) -> Result<String, Error> {
        let url = self.url(path)?;
        debug!("POST {url}");

        let resp = self
            .scoped(self.http.post(url), scope)
            .json(body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(self.parse_error(status, resp).await);
        }

        resp.headers()
            .get(reqwest::header::LOCATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|loc| loc.rsplit('/').next())
            .filter(|id| !id.is_empty())
            .map(str::to_owned)
            .ok_or(Error::MissingLocation)
    }

    pub(crate) async fn delete(&self, path: &str, scope: &Scope) -> Result<(), Error> {
        let url = self.url(path)?;
        debug!("DELETE {url}");

        let resp = self.scoped(self.http.delete(url), scope).send().await?;
        self.handle_empty(resp).await
    }

    // ── Response handling ────────────────────────────────────────────

    async fn handle_response<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, Error> {
        let status = resp.status();
        if status.is_success() {
            let body = resp.text().await?;
            serde_json::from_str(&body).map_err(|e| {
                let preview = &body[..body.len().min(200)];
                Error::Deserialization {
                    message: format!("{e} (body preview: {preview:?})"),
                    body,
                }
            })
        } else {
            Err(self.parse_error(status, resp).await)
        }
    }

    async fn handle_empty(&self, resp: reqwest::Response) -> Result<(), Error> {
        let status = resp.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(self.parse_error(status, resp).await)
        }
    }

    async fn parse_error(&self, status: reqwest::StatusCode, resp: reqwest::Response) -> Error {
        let raw = resp.text().await.unwrap_or_default();

        if let Ok(err) = serde_json::from_str::<ErrorResponse>(&raw) {
            Error::Api {
                status: status.as_u16(),
                error: err.error.unwrap_or_else(|| status.to_string()),
                description: err.description,
            }
        } else {
            Error::Api {
                status: status.as_u16(),
                error: if raw.is_empty() {
                    status.to_string()
                } else {
                    raw
                },
                description: None,
            }
        }
    }
}
