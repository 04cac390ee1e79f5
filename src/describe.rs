//! Top-level probe entry points.
//!
//! [`describe_image`] is the whole program: load, encode, build, send, and
//! interpret. [`describe_image_with`] does the same over any [`Transport`],
//! which is how the tests drive it without a server.

use crate::config::ProbeConfig;
use crate::error::ProbeError;
use crate::output::ProbeOutput;
use crate::pipeline::encode::encode_image;
use crate::pipeline::input::load_image;
use crate::pipeline::response::handle_response;
use crate::pipeline::transport::{HttpTransport, Transport};
use crate::request::build_request;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};

/// Send `image_path` to the configured server over HTTP and return what it said.
///
/// # Errors
/// Returns [`ProbeError`] for an unreadable image, an invalid endpoint, a
/// failed connection, or a 200 response without `choices[0].message.content`.
/// A non-200 status is **not** an error; see [`ProbeOutput::success`].
pub async fn describe_image(
    image_path: impl AsRef<Path>,
    config: &ProbeConfig,
) -> Result<ProbeOutput, ProbeError> {
    let transport = HttpTransport::new(config)?;
    describe_image_with(&transport, image_path, config).await
}

/// [`describe_image`] over a caller-supplied transport.
///
/// The image is read before the transport is touched, so a missing file never
/// reaches the network.
pub async fn describe_image_with<T: Transport>(
    transport: &T,
    image_path: impl AsRef<Path>,
    config: &ProbeConfig,
) -> Result<ProbeOutput, ProbeError> {
    let image_path = image_path.as_ref();
    let bytes = load_image(image_path).await?;
    crate::config::validate_endpoint(&config.endpoint)?;
    let image = encode_image(&bytes, &config.mime_type);

    let request = build_request(&image, config);
    let body = serde_json::to_vec(&request).map_err(|e| {
        ProbeError::InvalidConfig(format!("request could not be serialised: {e}"))
    })?;

    info!(
        "Asking '{}' at {} about {}",
        config.model,
        config.endpoint,
        image_path.display()
    );
    let start = Instant::now();
    let raw = transport.post_json(&config.endpoint, body).await?;
    let elapsed = start.elapsed();
    debug!("Server answered HTTP {} in {:?}", raw.status, elapsed);

    let status = raw.status;
    let outcome = handle_response(raw)?;

    Ok(ProbeOutput {
        endpoint: config.endpoint.clone(),
        model: config.model.clone(),
        image: image_path.to_path_buf(),
        encoded_len: image.data.len(),
        status,
        success: outcome.is_success(),
        result: outcome.to_string(),
        elapsed_ms: u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX),
    })
}
