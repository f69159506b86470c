// SPDX-License-Identifier: MPL-2.0
//! Opaque image payload exchanged with the generation service.

use base64::Engine as _;
use std::fmt;
use std::sync::Arc;

/// An encoded image returned by the generation service.
///
/// The bytes are kept in their encoded form (PNG, JPEG, ...) and shared via
/// `Arc`, so handing the current image to an edit request does not copy it.
#[derive(Clone, PartialEq, Eq)]
pub struct ImageResult {
    mime_type: String,
    bytes: Arc<Vec<u8>>,
}

impl ImageResult {
    /// Creates a payload from its MIME type and encoded bytes.
    #[must_use]
    pub fn new(mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            mime_type: mime_type.into(),
            bytes: Arc::new(bytes),
        }
    }

    #[must_use]
    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Base64 of the encoded bytes, as carried inline by the service.
    #[must_use]
    pub fn to_base64(&self) -> String {
        base64::engine::general_purpose::STANDARD.encode(self.bytes.as_slice())
    }
}

// Payloads are large; keep debug output to the shape.
impl fmt::Debug for ImageResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageResult")
            .field("mime_type", &self.mime_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// Successful outcome of a generate or edit request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generation {
    pub image: ImageResult,
    /// Raw explanation text, parsed for display by
    /// [`explanation::render`](super::explanation::render).
    pub explanation: Option<String>,
}

impl Generation {
    #[must_use]
    pub fn new(image: ImageResult, explanation: Option<String>) -> Self {
        Self { image, explanation }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clone_shares_bytes() {
        let image = ImageResult::new("image/png", vec![1, 2, 3]);
        let copy = image.clone();
        assert!(Arc::ptr_eq(&image.bytes, &copy.bytes));
        assert_eq!(copy.mime_type(), "image/png");
        assert_eq!(copy.len(), 3);
    }

    #[test]
    fn base64_uses_standard_alphabet() {
        let image = ImageResult::new("image/png", b"hi".to_vec());
        assert_eq!(image.to_base64(), "aGk=");
    }

    #[test]
    fn debug_omits_payload() {
        let image = ImageResult::new("image/png", vec![0; 1024]);
        let debug = format!("{image:?}");
        assert!(debug.contains("len: 1024"));
        assert!(!debug.contains("[0, 0"));
    }
}
