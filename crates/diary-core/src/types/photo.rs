//! Photo Reference - embeddable image data
//!
//! Photos are kept inline as base64 data URIs so the view can hand them
//! straight to an `img` element.

use base64::Engine;
use serde::{Deserialize, Serialize};

/// A photo attached to a day or a shelf item
///
/// Format: `"data:<mime>;base64,<payload>"`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PhotoRef(String);

impl PhotoRef {
    /// Encode raw bytes under the given MIME type
    pub fn from_bytes(bytes: &[u8], mime: &str) -> Self {
        let payload = base64::engine::general_purpose::STANDARD.encode(bytes);
        PhotoRef(format!("data:{};base64,{}", mime, payload))
    }

    /// Wrap an existing data URI
    pub fn from_data_uri(uri: String) -> Self {
        PhotoRef(uri)
    }

    /// Usable as an `img` src
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// MIME type declared in the URI header
    pub fn mime(&self) -> Option<&str> {
        self.0
            .strip_prefix("data:")
            .and_then(|rest| rest.split_once(';'))
            .map(|(mime, _)| mime)
    }

    /// Check if image data is available
    pub fn is_available(&self) -> bool {
        self.0
            .split_once(',')
            .is_some_and(|(_, payload)| !payload.is_empty())
    }
}

impl std::fmt::Display for PhotoRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
