//! Photo ingestion
//!
//! Turns a local image file into a [`PhotoRef`]. The bytes are embedded as-is:
//! no decoding, validation, or resizing happens here.

use std::path::Path;

use image::ImageFormat;

use crate::error::{DiaryError, DiaryResult};
use crate::types::PhotoRef;

/// Extensions offered by the photo picker
pub const PHOTO_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp", "bmp"];

const FALLBACK_MIME: &str = "application/octet-stream";

/// Read a file and embed it as a data URI
pub async fn ingest_file(path: impl AsRef<Path>) -> DiaryResult<PhotoRef> {
    let path = path.as_ref();
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|source| DiaryError::PhotoRead {
            path: path.to_path_buf(),
            source,
        })?;

    let photo = encode_photo(&bytes, Some(path));
    tracing::debug!(
        path = %path.display(),
        size = bytes.len(),
        mime = photo.mime().unwrap_or(FALLBACK_MIME),
        "Photo ingested"
    );
    Ok(photo)
}

/// Embed already-loaded bytes.
///
/// The MIME type comes from the magic bytes, then from the extension of
/// `path_hint`, and defaults to `application/octet-stream`.
pub fn encode_photo(bytes: &[u8], path_hint: Option<&Path>) -> PhotoRef {
    PhotoRef::from_bytes(bytes, sniff_mime(bytes, path_hint))
}

fn sniff_mime(bytes: &[u8], path_hint: Option<&Path>) -> &'static str {
    if let Ok(format) = image::guess_format(bytes) {
        return format.to_mime_type();
    }

    path_hint
        .and_then(|path| path.extension())
        .and_then(ImageFormat::from_extension)
        .map(|format| format.to_mime_type())
        .unwrap_or(FALLBACK_MIME)
}
