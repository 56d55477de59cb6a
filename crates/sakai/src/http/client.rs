//! HTTP client for the Sakai direct API.

use reqwest::header::{COOKIE, HeaderMap};
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, instrument, trace};

use crate::auth::SessionCookie;
use crate::error::Error;
use crate::types::BaseUrl;

/// Thin wrapper over a shared `reqwest::Client` bound to one base URL.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::Client,
    base_url: BaseUrl,
}

impl HttpClient {
    /// Create a new HTTP client for the given base URL.
    pub fn new(base_url: BaseUrl) -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("sakai/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client, base_url })
    }

    /// Returns the base URL this client is configured for.
    #[allow(dead_code)]
    pub fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// GET a JSON resource, attaching the session cookie when present.
    #[instrument(skip(self, cookie), fields(base_url = %self.base_url))]
    pub async fn get_json<R>(&self, path: &str, cookie: Option<&SessionCookie>) -> Result<R, Error>
    where
        R: DeserializeOwned,
    {
        let url = self.base_url.endpoint(path);
        debug!(%url, "GET");

        let mut request = self.client.get(&url);
        if let Some(cookie) = cookie {
            request = request.header(COOKIE, cookie.header_value()?);
        }

        let response = request.send().await?;
        self.handle_response(response).await
    }

    /// POST with query parameters and no body, returning the response headers.
    #[instrument(skip(self, params, cookie), fields(base_url = %self.base_url))]
    pub async fn post_query<Q>(
        &self,
        path: &str,
        params: &Q,
        cookie: Option<&SessionCookie>,
    ) -> Result<HeaderMap, Error>
    where
        Q: Serialize,
    {
        let url = self.base_url.endpoint(path);
        debug!(%url, "POST");

        let mut request = self.client.post(&url).query(params);
        if let Some(cookie) = cookie {
            request = request.header(COOKIE, cookie.header_value()?);
        }

        // The URL carries the credentials; keep it out of the error.
        let response = request
            .send()
            .await
            .map_err(|e| Error::Transport(e.without_url()))?;
        let status = response.status();
        trace!(status = %status, "response");

        if status.is_success() {
            Ok(response.headers().clone())
        } else {
            Err(Self::status_error(response).await)
        }
    }

    /// Decode a successful response or turn it into [`Error::Status`].
    async fn handle_response<R: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<R, Error> {
        let status = response.status();
        trace!(status = %status, "response");

        if status.is_success() {
            let body = response.json::<R>().await?;
            Ok(body)
        } else {
            Err(Self::status_error(response).await)
        }
    }

    async fn status_error(response: reqwest::Response) -> Error {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        debug!(status, "request rejected");
        Error::Status { status, body }
    }
}
