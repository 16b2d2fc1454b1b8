//! HTTP client for the contact backend.

use crate::error::{Error, Result};
use crate::types::{ContactRequest, ContactResponse, HealthResponse};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

/// Path of the contact submission endpoint.
pub const CONTACT_PATH: &str = "/api/contact";

/// Path of the contact health endpoint.
pub const HEALTH_PATH: &str = "/api/contact/health";

/// Client for the contact backend.
///
/// `base_url` is the backend origin. An empty string means "same origin",
/// which a standalone process cannot resolve; requests then fail with
/// [`Error::UrlError`] before touching the network.
#[derive(Debug, Clone)]
pub struct BackendClient {
    /// Backend origin, without a trailing slash.
    base_url: String,
    /// HTTP client.
    http_client: Client,
}

impl BackendClient {
    /// Creates a new backend client.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            http_client: Client::new(),
        }
    }

    /// Resolves an endpoint path against the backend origin.
    ///
    /// # Errors
    ///
    /// Returns an error if the combined URL is not absolute.
    pub fn endpoint(&self, path: &str) -> Result<Url> {
        Ok(Url::parse(&format!("{}{path}", self.base_url))?)
    }

    /// Submits a contact message.
    ///
    /// A 2xx response is returned as-is, including `ok: false` bodies; the
    /// caller decides what a rejection means.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be sent, the status is not
    /// 2xx, or the body is not a contact response.
    pub async fn submit_contact(&self, request: &ContactRequest) -> Result<ContactResponse> {
        let url = self.endpoint(CONTACT_PATH)?;
        debug!(%url, "Submitting contact message");

        let response = self.http_client.post(url).json(request).send().await?;
        let contact: ContactResponse = read_json(response).await?;

        debug!(
            ok = contact.ok,
            email_dispatched = contact.email_dispatched,
            "Contact response"
        );
        Ok(contact)
    }

    /// Fetches the backend's email health report.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be sent, the status is not
    /// 2xx, or the body is not JSON.
    pub async fn fetch_health(&self) -> Result<HealthResponse> {
        let url = self.endpoint(HEALTH_PATH)?;
        debug!(%url, "Fetching contact health");

        let response = self.http_client.get(url).send().await?;
        read_json(response).await
    }
}

/// Reads a JSON body, turning non-2xx statuses into [`Error::Status`].
async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        // Prefer the backend's own error string when the body carries one
        let message = serde_json::from_str::<ContactResponse>(&body)
            .ok()
            .and_then(|r| r.error)
            .unwrap_or_else(|| status.canonical_reason().unwrap_or("Unknown").to_string());
        return Err(Error::status(status.as_u16(), message));
    }

    serde_json::from_str(&body).map_err(Into::into)
}
