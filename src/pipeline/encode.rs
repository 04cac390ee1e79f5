//! Image encoding: raw bytes → base64 wrapped in [`EncodedImage`].
//!
//! Vision chat endpoints take images as base64 data URIs inside the JSON
//! body. The bytes are passed through untouched; no re-encoding to PNG.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use image::ImageFormat;
use tracing::debug;

/// Base64 payload plus the MIME type it will be declared as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedImage {
    pub data: String,
    pub mime_type: String,
}

impl EncodedImage {
    /// `data:<mime>;base64,<data>`
    pub fn data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.data)
    }
}

/// Encode `bytes` with the standard padded base64 alphabet.
///
/// When the bytes look like a different format than `mime_type` the mismatch
/// is logged at debug level and otherwise ignored.
pub fn encode_image(bytes: &[u8], mime_type: &str) -> EncodedImage {
    if let Some(format) = sniff_format(bytes) {
        let actual = format.to_mime_type();
        if actual != mime_type {
            debug!("Image looks like {actual} but will be declared as {mime_type}");
        }
    }

    let data = STANDARD.encode(bytes);
    debug!("Encoded image → {} bytes base64", data.len());

    EncodedImage {
        data,
        mime_type: mime_type.to_string(),
    }
}

/// Guess the image format from magic bytes.
pub fn sniff_format(bytes: &[u8]) -> Option<ImageFormat> {
    image::guess_format(bytes).ok()
}
