//! # llava-probe
//!
//! Smoke-test a local multimodal chat-completion server (llava) with a
//! single image.
//!
//! ## Pipeline Overview
//!
//! ```text
//! image file
//!  │
//!  ├─ 1. Input     read the whole file into memory
//!  ├─ 2. Encode    bytes → standard base64
//!  ├─ 3. Request   system message + user [text, image_url] parts
//!  ├─ 4. POST      one JSON request to http://localhost:8080, no retry
//!  ├─ 5. Response  200 → choices[0].message.content, else "Error: <status> - <body>"
//!  └─ 6. Output    "Image description: …"
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use llava_probe::{describe_image, ProbeConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let output = describe_image("cat.png", &ProbeConfig::default()).await?;
//!     println!("{}", output.display_line());
//!     Ok(())
//! }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `llava-probe` binary (clap + anyhow + tracing-subscriber + indicatif) |

// ── Modules ──────────────────────────────────────────────────────────────

pub mod config;
pub mod describe;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod prompts;
pub mod request;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{ProbeConfig, ProbeConfigBuilder};
pub use describe::{describe_image, describe_image_with};
pub use error::ProbeError;
pub use output::ProbeOutput;
pub use pipeline::encode::{encode_image, EncodedImage};
pub use pipeline::response::Outcome;
pub use pipeline::transport::{HttpTransport, RawResponse, Transport};
pub use request::{build_request, ChatRequest};
