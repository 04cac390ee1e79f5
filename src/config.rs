//! Configuration for a single probe request.
//!
//! Every value the probe sends is a field on [`ProbeConfig`]. The defaults are
//! the values a stock llava server expects, so `ProbeConfig::default()` sends
//! exactly the canonical smoke-test request.

use crate::error::ProbeError;
use crate::prompts::{DEFAULT_SYSTEM_PROMPT, DEFAULT_USER_PROMPT};

/// Address the llava server listens on out of the box.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8080";

/// Model identifier placed in the request body.
pub const DEFAULT_MODEL: &str = "llava";

/// Upper bound on the response length requested from the server.
pub const DEFAULT_MAX_TOKENS: u32 = 500;

/// MIME type declared in the image data URI.
///
/// The llava server only accepts `data:image/png;base64,` URIs, so this is
/// declared regardless of the file's real format.
pub const DEFAULT_MIME_TYPE: &str = "image/png";

/// Configuration for one probe.
///
/// Built via [`ProbeConfig::builder()`] or using [`ProbeConfig::default()`].
///
/// # Example
/// ```rust
/// use llava_probe::ProbeConfig;
///
/// let config = ProbeConfig::builder()
///     .endpoint("http://127.0.0.1:9090")
///     .max_tokens(256)
///     .build()
///     .unwrap();
/// assert_eq!(config.model, "llava");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeConfig {
    /// URL the request is POSTed to. Default: `http://localhost:8080`.
    pub endpoint: String,

    /// Value of the `model` field. Default: `llava`.
    pub model: String,

    /// Value of the `max_tokens` field. Default: 500.
    pub max_tokens: u32,

    /// Content of the system message.
    pub system_prompt: String,

    /// Text part of the user message. Default: `What's in this image?`.
    pub prompt: String,

    /// MIME type written into the data URI. Default: `image/png`.
    pub mime_type: String,

    /// Request timeout in seconds. Default: `None`, wait indefinitely.
    pub timeout_secs: Option<u64>,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
            prompt: DEFAULT_USER_PROMPT.to_string(),
            mime_type: DEFAULT_MIME_TYPE.to_string(),
            timeout_secs: None,
        }
    }
}

impl ProbeConfig {
    /// Create a new builder for `ProbeConfig`.
    pub fn builder() -> ProbeConfigBuilder {
        ProbeConfigBuilder {
            config: Self::default(),
        }
    }
}

/// Builder for [`ProbeConfig`].
#[derive(Debug)]
pub struct ProbeConfigBuilder {
    config: ProbeConfig,
}

impl ProbeConfigBuilder {
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.config.endpoint = endpoint.into();
        self
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.config.model = model.into();
        self
    }

    pub fn max_tokens(mut self, n: u32) -> Self {
        self.config.max_tokens = n;
        self
    }

    pub fn system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.config.system_prompt = prompt.into();
        self
    }

    pub fn prompt(mut self, prompt: impl Into<String>) -> Self {
        self.config.prompt = prompt.into();
        self
    }

    pub fn mime_type(mut self, mime: impl Into<String>) -> Self {
        self.config.mime_type = mime.into();
        self
    }

    pub fn timeout_secs(mut self, secs: Option<u64>) -> Self {
        self.config.timeout_secs = secs;
        self
    }

    /// Build the configuration, validating constraints.
    pub fn build(self) -> Result<ProbeConfig, ProbeError> {
        let c = &self.config;
        validate_endpoint(&c.endpoint)?;
        if c.model.trim().is_empty() {
            return Err(ProbeError::InvalidConfig("model must not be empty".into()));
        }
        if c.mime_type.trim().is_empty() {
            return Err(ProbeError::InvalidConfig(
                "MIME type must not be empty".into(),
            ));
        }
        if c.max_tokens == 0 {
            return Err(ProbeError::InvalidConfig("max_tokens must be ≥ 1".into()));
        }
        if c.timeout_secs == Some(0) {
            return Err(ProbeError::InvalidConfig(
                "timeout must be ≥ 1 second when set".into(),
            ));
        }
        Ok(self.config)
    }
}

/// Check the endpoint is an absolute http(s) URL.
pub fn validate_endpoint(endpoint: &str) -> Result<reqwest::Url, ProbeError> {
    let url = reqwest::Url::parse(endpoint).map_err(|e| ProbeError::InvalidEndpoint {
        endpoint: endpoint.to_string(),
        reason: e.to_string(),
    })?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ProbeError::InvalidEndpoint {
            endpoint: endpoint.to_string(),
            reason: format!("unsupported scheme '{other}', expected http or https"),
        }),
    }
}
