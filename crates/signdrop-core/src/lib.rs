//! SignDrop Core Library
//!
//! Coordinate transforms and interactive field placement for overlaying
//! signing fields on a rendered document page. The document-space
//! rectangle (72-DPI points, bottom-left origin) is the single source of
//! truth for every field; screen rectangles are derived through the
//! current projection and re-derived whenever the viewport rescales.

pub mod field;
pub mod gesture;
pub mod input;
pub mod session;
pub mod store;
pub mod transform;
pub mod transport;
pub mod viewport;

pub use field::{DEFAULT_FIELD_SIZE, Field, FieldId, FieldKind, MIN_FIELD_SIZE};
pub use gesture::Gesture;
pub use input::{MouseButton, PointerCapture, PointerEvent};
pub use session::Session;
pub use store::FieldStore;
pub use transform::{DocRect, PageMetrics, Projection};
pub use transport::{
    MemoryBackend, PageRenderer, RenderedPage, SigningOutcome, SigningRequest, SigningTransport,
    TransportError, TransportResult, UploadTransport,
};
