//! Response handling: turn a [`RawResponse`] into an [`Outcome`].

use crate::error::ProbeError;
use crate::pipeline::transport::RawResponse;
use crate::request::ChatResponse;
use std::fmt;
use tracing::warn;

/// What the server said, in printable form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Status 200: `choices[0].message.content`.
    Description(String),
    /// Any other status, with the body verbatim.
    ServerError { status: u16, body: String },
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Description(_))
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Description(text) => f.write_str(text),
            Outcome::ServerError { status, body } => write!(f, "Error: {status} - {body}"),
        }
    }
}

/// Interpret the server's reply.
///
/// Only status 200 is parsed; every other status (including other 2xx codes)
/// becomes [`Outcome::ServerError`] and never fails.
pub fn handle_response(raw: RawResponse) -> Result<Outcome, ProbeError> {
    if raw.status != 200 {
        warn!("Server answered HTTP {}", raw.status);
        return Ok(Outcome::ServerError {
            status: raw.status,
            body: raw.body,
        });
    }

    let parsed: ChatResponse =
        serde_json::from_str(&raw.body).map_err(|e| ProbeError::MalformedResponse {
            detail: e.to_string(),
            body: raw.body.clone(),
        })?;

    let choice = parsed
        .choices
        .into_iter()
        .next()
        .ok_or(ProbeError::MissingChoice)?;

    Ok(Outcome::Description(choice.message.content))
}
