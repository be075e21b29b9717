//! Photo ingestion against real files

use std::io::Write;

use diary_core::{ingest_file, DiaryError};
use tempfile::NamedTempFile;

const PNG_BYTES: &[u8] = b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR\0\0\0\x01\0\0\0\x01";

#[tokio::test]
async fn test_ingest_png_file() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(PNG_BYTES).unwrap();

    let photo = ingest_file(file.path()).await.unwrap();
    assert_eq!(photo.mime(), Some("image/png"));
    assert!(photo.as_str().starts_with("data:image/png;base64,iVBORw0KGgo"));
}

#[tokio::test]
async fn test_ingest_uses_extension_when_content_unknown() {
    let mut file = tempfile::Builder::new().suffix(".webp").tempfile().unwrap();
    file.write_all(b"truncated").unwrap();

    let photo = ingest_file(file.path()).await.unwrap();
    assert_eq!(photo.mime(), Some("image/webp"));
}

#[tokio::test]
async fn test_ingest_empty_file() {
    let file = NamedTempFile::new().unwrap();

    let photo = ingest_file(file.path()).await.unwrap();
    assert!(!photo.is_available());
}

#[tokio::test]
async fn test_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gone.png");

    let err = ingest_file(&path).await.unwrap_err();
    match err {
        DiaryError::PhotoRead { path: failed, source } => {
            assert_eq!(failed, path);
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}
