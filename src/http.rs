//! HTTP transport seam.
//!
//! The client consumes whatever transport the caller supplies through
//! [`HttpClient`]; retry, timeout, and deadline policy all live on that
//! side of the seam. A `reqwest::Client` implements the trait and is the
//! default transport for live use; tests script responses instead.

use std::time::Duration;

use async_trait::async_trait;

use crate::error::Error;

/// Minimal HTTP capability the client needs: one buffered GET.
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn get(&self, url: &str) -> Result<HttpResponse, Error>;
}

/// A fully buffered HTTP response.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// A 200 response with the given body.
    pub fn ok(body: impl Into<Vec<u8>>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }
}

#[async_trait]
impl HttpClient for reqwest::Client {
    async fn get(&self, url: &str) -> Result<HttpResponse, Error> {
        let response = reqwest::Client::get(self, url)
            .send()
            .await
            .map_err(|e| Error::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| Error::Transport(e.to_string()))?
            .to_vec();

        Ok(HttpResponse { status, body })
    }
}

/// Build the default transport: 30s request timeout, 10s connect timeout.
pub fn default_transport() -> Result<reqwest::Client, Error> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(30))
        .connect_timeout(Duration::from_secs(10))
        .build()
        .map_err(|e| Error::Config(format!("failed to build HTTP transport: {e}")))
}
