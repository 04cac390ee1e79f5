//! Image loading: read the whole file into memory.

use crate::error::ProbeError;
use std::io::ErrorKind;
use std::path::Path;
use tracing::debug;

/// Read the image at `path`.
///
/// No format check happens here; any readable file is accepted, including an
/// empty one.
pub async fn load_image(path: &Path) -> Result<Vec<u8>, ProbeError> {
    let bytes = tokio::fs::read(path).await.map_err(|e| match e.kind() {
        ErrorKind::NotFound => ProbeError::FileNotFound {
            path: path.to_path_buf(),
        },
        ErrorKind::PermissionDenied => ProbeError::PermissionDenied {
            path: path.to_path_buf(),
        },
        _ => ProbeError::ReadFailed {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    debug!("Loaded {} bytes from {}", bytes.len(), path.display());
    Ok(bytes)
}
