//! Result of a probe.

use crate::prompts::RESULT_LABEL;
use serde::Serialize;
use std::path::PathBuf;

/// Everything the probe learned from one request.
#[derive(Debug, Clone, Serialize)]
pub struct ProbeOutput {
    /// Endpoint the request went to.
    pub endpoint: String,
    /// Model named in the request.
    pub model: String,
    /// Image that was sent.
    pub image: PathBuf,
    /// Length of the base64 payload.
    pub encoded_len: usize,
    /// HTTP status the server answered with.
    pub status: u16,
    /// `true` only for status 200 with a well-formed body.
    pub success: bool,
    /// The description, or the `Error: <status> - <body>` diagnostic.
    pub result: String,
    /// Wall-clock time of the HTTP exchange.
    pub elapsed_ms: u64,
}

impl ProbeOutput {
    /// The line the CLI prints: `Image description: <result>`.
    pub fn display_line(&self) -> String {
        format!("{RESULT_LABEL}: {}", self.result)
    }
}
