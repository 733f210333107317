//! Shared request execution for the Reaper HTTP API.

use log::debug;
use reaperctl::ReaperError;
use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;

/// Entry point for requests against one configured Reaper host.
///
/// The host is threaded through explicitly from the command line or the
/// environment; nothing here is process-global. Each call performs exactly
/// one HTTP round trip, with the transport's default timeouts and no retry.
pub struct ReaperApi {
    client: Client,
    base_url: String,
}

impl ReaperApi {
    /// `host` is `host[:port]`, without a scheme. The service speaks plain
    /// HTTP.
    pub fn new(host: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: format!("http://{host}"),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str, query: &[(&str, String)]) -> String {
        let mut url = format!("{}{}", self.base_url, path);
        for (i, (key, value)) in query.iter().enumerate() {
            url.push(if i == 0 { '?' } else { '&' });
            url.push_str(key);
            url.push('=');
            url.push_str(&urlencoding::encode(value));
        }
        url
    }

    /// Performs one request and returns the response body when the status is
    /// exactly `expect`. Any other status is a rejection carrying the whole
    /// body verbatim, so the service's own message reaches the user.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        expect: StatusCode,
        op: &str,
    ) -> Result<String, ReaperError> {
        let url = self.url(path, query);
        debug!("{method} {url}");

        let response = self
            .client
            .request(method, &url)
            .send()
            .await
            .map_err(|e| ReaperError::from_transport_error(e, op))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ReaperError::from_transport_error(e, op))?;

        if status != expect {
            return Err(ReaperError::Rejected {
                op: op.to_string(),
                status: status.as_u16(),
                body,
            });
        }
        Ok(body)
    }

    /// Like [`request`](Self::request), decoding the body into `T`.
    pub async fn request_json<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        expect: StatusCode,
        op: &str,
    ) -> Result<T, ReaperError> {
        let body = self.request(method, path, query, expect, op).await?;
        serde_json::from_str(&body).map_err(|e| ReaperError::from_decode_error(e, op))
    }
}

/// Percent-encodes a user-supplied path segment.
pub fn encode_segment(segment: &str) -> String {
    urlencoding::encode(segment).into_owned()
}
