//! Transport contracts for the engine's external collaborators.
//!
//! Page rasterization, document upload and the signing call are consumed
//! as contracts only; the engine never performs I/O itself. A transport
//! failure is reported to the user and never corrupts in-memory field
//! state. There is no retry policy: the user re-initiates the action.

mod memory;

pub use memory::{DEFAULT_RENDER_SCALE, MemoryBackend};

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use kurbo::Size;
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::pin::Pin;
use thiserror::Error;

use crate::transform::{DocRect, PageMetrics};

/// Transport errors.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("Render failed: {0}")]
    Render(String),
    #[error("Upload failed: {0}")]
    Upload(String),
    #[error("Signing failed: {0}")]
    Signing(String),
    #[error("Unknown document: {0}")]
    UnknownDocument(String),
}

/// Result type for transport operations.
pub type TransportResult<T> = Result<T, TransportError>;

/// Boxed future for async operations.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Rasterization output for page 1 of a document.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedPage {
    /// Page size in document points at 72 DPI.
    pub page_size: Size,
    /// Pixel size of the rendered surface.
    pub surface_size: Size,
}

impl RenderedPage {
    /// Page metrics for a new [`crate::session::Session`].
    pub fn metrics(&self) -> PageMetrics {
        PageMetrics::new(self.page_size, self.surface_size)
    }
}

/// Renders page 1 of a source document to a pixel surface.
pub trait PageRenderer: Send + Sync {
    fn render(&self, document: &[u8]) -> BoxFuture<'_, TransportResult<RenderedPage>>;
}

/// Uploads raw document bytes; returns an opaque document identifier used
/// later by the signing call.
pub trait UploadTransport: Send + Sync {
    fn upload(&self, document: &[u8]) -> BoxFuture<'_, TransportResult<String>>;
}

/// Request body for the signing call, for exactly one signature field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SigningRequest {
    pub document_id: String,
    /// Base64-encoded signature image bytes.
    pub signature_image: String,
    /// Placement of the signature in document space.
    pub coordinates: DocRect,
}

impl SigningRequest {
    /// Build a request from raw signature image bytes.
    pub fn new(document_id: impl Into<String>, signature_image: &[u8], coordinates: DocRect) -> Self {
        Self {
            document_id: document_id.into(),
            signature_image: BASE64.encode(signature_image),
            coordinates,
        }
    }
}

/// Successful signing response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SigningOutcome {
    pub download_url: String,
    pub audit_trail: String,
}

/// Applies a signature to an uploaded document.
pub trait SigningTransport: Send + Sync {
    fn sign(&self, request: &SigningRequest) -> BoxFuture<'_, TransportResult<SigningOutcome>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signing_request_wire_shape() {
        let request = SigningRequest::new("doc-1", b"png bytes", DocRect::new(66.67, 742.0, 100.0, 33.33));
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(value["documentId"], "doc-1");
        assert_eq!(value["signatureImage"], BASE64.encode(b"png bytes"));
        assert_eq!(value["coordinates"]["x"], 66.67);
        assert_eq!(value["coordinates"]["height"], 33.33);
    }

    #[test]
    fn test_signing_request_roundtrip() {
        let request = SigningRequest::new("doc-2", &[1, 2, 3], DocRect::ZERO);
        let json = serde_json::to_string(&request).unwrap();
        let back: SigningRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(back, request);
    }

    #[test]
    fn test_error_display() {
        let err = TransportError::Upload("503".to_string());
        assert_eq!(err.to_string(), "Upload failed: 503");
    }
}
