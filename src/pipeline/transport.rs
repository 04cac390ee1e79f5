//! HTTP transport: the single POST to the vision server.
//!
//! [`Transport`] is the seam between the pipeline and the network. The
//! probe itself uses [`HttpTransport`]; tests swap in a double that records
//! the body and replies with a canned status.

use crate::config::ProbeConfig;
use crate::error::ProbeError;
use reqwest::header::CONTENT_TYPE;
use std::future::Future;
use std::time::Duration;
use tracing::debug;

/// Status code and body text of whatever the server sent back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Sends one JSON document and returns the raw reply.
///
/// Implementations must not retry. Any HTTP status, 200 or not, is a
/// successful send; only failing to get a response at all is an error.
pub trait Transport {
    fn post_json(
        &self,
        url: &str,
        body: Vec<u8>,
    ) -> impl Future<Output = Result<RawResponse, ProbeError>> + Send;
}

/// [`Transport`] backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    timeout_secs: Option<u64>,
}

impl HttpTransport {
    /// Build a client honouring `config.timeout_secs`. Without a timeout the
    /// call waits for the server however long it takes.
    pub fn new(config: &ProbeConfig) -> Result<Self, ProbeError> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build().map_err(|e| ProbeError::Transport {
            endpoint: config.endpoint.clone(),
            reason: e.to_string(),
        })?;
        Ok(Self {
            client,
            timeout_secs: config.timeout_secs,
        })
    }

    fn map_error(&self, url: &str, e: reqwest::Error) -> ProbeError {
        match self.timeout_secs {
            Some(secs) if e.is_timeout() => ProbeError::Timeout {
                endpoint: url.to_string(),
                secs,
            },
            _ => ProbeError::Transport {
                endpoint: url.to_string(),
                // The top-level reqwest message is just "error sending request".
                reason: error_chain(&e),
            },
        }
    }
}

impl Transport for HttpTransport {
    async fn post_json(&self, url: &str, body: Vec<u8>) -> Result<RawResponse, ProbeError> {
        debug!("POST {} ({} bytes)", url, body.len());

        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| self.map_error(url, e))?;

        let status = response.status().as_u16();
        let text = response.text().await.map_err(|e| self.map_error(url, e))?;
        debug!("HTTP {} with {} bytes of body", status, text.len());

        Ok(RawResponse::new(status, text))
    }
}

fn error_chain(e: &(dyn std::error::Error + 'static)) -> String {
    let mut msg = e.to_string();
    let mut source = e.source();
    while let Some(inner) = source {
        msg.push_str(": ");
        msg.push_str(&inner.to_string());
        source = inner.source();
    }
    msg
}
