//! Error types for the llava-probe library.
//!
//! Only one failure mode is *not* an error: a server that answers with a
//! non-200 status. That case becomes [`crate::pipeline::response::Outcome::ServerError`]
//! and is printed like any other result. Everything else (missing image,
//! refused connection, a 200 body of the wrong shape) is a [`ProbeError`]
//! and aborts the probe.

use std::path::PathBuf;
use thiserror::Error;

/// All fatal errors returned by the llava-probe library.
#[derive(Debug, Error)]
pub enum ProbeError {
    // ── Input errors ──────────────────────────────────────────────────────
    /// Image file was not found at the given path.
    #[error("Image file not found: '{path}'\nCheck the path exists and is readable.")]
    FileNotFound { path: PathBuf },

    /// Process does not have read permission on the file.
    #[error("Permission denied reading '{path}'\nTry: chmod +r {path:?}")]
    PermissionDenied { path: PathBuf },

    /// The file exists but reading it failed part-way.
    #[error("Failed to read image '{path}': {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── Transport errors ──────────────────────────────────────────────────
    /// The endpoint is not an absolute http/https URL.
    #[error("Invalid endpoint '{endpoint}': {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },

    /// The request never produced an HTTP response (refused, reset, DNS…).
    #[error("Request to '{endpoint}' failed: {reason}\nIs the llava server running?")]
    Transport { endpoint: String, reason: String },

    /// A configured timeout elapsed before the server answered.
    #[error("Request to '{endpoint}' timed out after {secs}s")]
    Timeout { endpoint: String, secs: u64 },

    // ── Response errors ───────────────────────────────────────────────────
    /// Status 200 but the body is not JSON or lacks `choices[].message.content`.
    #[error("Malformed response from server: {detail}\nBody: {body}")]
    MalformedResponse { detail: String, body: String },

    /// Status 200 with an empty `choices` array.
    #[error("Server response contained no choices")]
    MissingChoice,

    // ── Config errors ─────────────────────────────────────────────────────
    /// Builder validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
