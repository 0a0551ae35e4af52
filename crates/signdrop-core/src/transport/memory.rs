//! In-memory transport backend for tests and ephemeral use.

use std::collections::HashMap;
use std::sync::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};

use kurbo::Size;

use super::{
    BoxFuture, PageRenderer, RenderedPage, SigningOutcome, SigningRequest, SigningTransport,
    TransportError, TransportResult, UploadTransport,
};

/// Observed default render scale of the rasterization collaborator.
pub const DEFAULT_RENDER_SCALE: f64 = 1.5;

/// In-memory implementation of all three transport contracts.
pub struct MemoryBackend {
    page_size: Size,
    render_scale: f64,
    documents: RwLock<HashMap<String, Vec<u8>>>,
    next_id: AtomicU64,
}

impl MemoryBackend {
    /// Backend rendering every document as a single page of `page_size`
    /// points at the default 1.5x scale.
    pub fn new(page_size: Size) -> Self {
        Self {
            page_size,
            render_scale: DEFAULT_RENDER_SCALE,
            documents: RwLock::new(HashMap::new()),
            next_id: AtomicU64::new(1),
        }
    }

    /// Override the render scale.
    pub fn with_render_scale(mut self, scale: f64) -> Self {
        self.render_scale = scale;
        self
    }
}

impl PageRenderer for MemoryBackend {
    fn render(&self, document: &[u8]) -> BoxFuture<'_, TransportResult<RenderedPage>> {
        let empty = document.is_empty();
        Box::pin(async move {
            if empty {
                return Err(TransportError::Render("empty document".to_string()));
            }
            Ok(RenderedPage {
                page_size: self.page_size,
                surface_size: Size::new(
                    self.page_size.width * self.render_scale,
                    self.page_size.height * self.render_scale,
                ),
            })
        })
    }
}

impl UploadTransport for MemoryBackend {
    fn upload(&self, document: &[u8]) -> BoxFuture<'_, TransportResult<String>> {
        let document = document.to_vec();
        Box::pin(async move {
            let id = format!("doc-{}", self.next_id.fetch_add(1, Ordering::Relaxed));
            let mut docs = self
                .documents
                .write()
                .map_err(|e| TransportError::Upload(format!("Lock error: {}", e)))?;
            docs.insert(id.clone(), document);
            Ok(id)
        })
    }
}

impl SigningTransport for MemoryBackend {
    fn sign(&self, request: &SigningRequest) -> BoxFuture<'_, TransportResult<SigningOutcome>> {
        let request = request.clone();
        Box::pin(async move {
            let docs = self
                .documents
                .read()
                .map_err(|e| TransportError::Signing(format!("Lock error: {}", e)))?;
            if !docs.contains_key(&request.document_id) {
                return Err(TransportError::UnknownDocument(request.document_id));
            }
            Ok(SigningOutcome {
                download_url: format!("memory://signed/{}", request.document_id),
                audit_trail: format!("signature placed at {:?}", request.coordinates),
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::DocRect;

    fn block_on<F: std::future::Future>(f: F) -> F::Output {
        // Simple blocking executor for tests
        use std::task::{Context, Poll, RawWaker, RawWakerVTable, Waker};

        fn dummy_raw_waker() -> RawWaker {
            fn no_op(_: *const ()) {}
            fn clone(_: *const ()) -> RawWaker {
                dummy_raw_waker()
            }
            static VTABLE: RawWakerVTable = RawWakerVTable::new(clone, no_op, no_op, no_op);
            RawWaker::new(std::ptr::null(), &VTABLE)
        }

        let waker = unsafe { Waker::from_raw(dummy_raw_waker()) };
        let mut cx = Context::from_waker(&waker);
        let mut f = std::pin::pin!(f);

        loop {
            match f.as_mut().poll(&mut cx) {
                Poll::Ready(result) => return result,
                Poll::Pending => {}
            }
        }
    }

    #[test]
    fn test_render_metrics() {
        let backend = MemoryBackend::new(Size::new(595.0, 842.0));
        let page = block_on(backend.render(b"%PDF-1.4")).unwrap();

        assert_eq!(page.page_size, Size::new(595.0, 842.0));
        assert_eq!(page.surface_size, Size::new(892.5, 1263.0));
    }

    #[test]
    fn test_render_empty_document_fails() {
        let backend = MemoryBackend::new(Size::new(595.0, 842.0));
        let result = block_on(backend.render(&[]));
        assert!(matches!(result, Err(TransportError::Render(_))));
    }

    #[test]
    fn test_upload_then_sign() {
        let backend = MemoryBackend::new(Size::new(595.0, 842.0));

        let id = block_on(backend.upload(b"%PDF-1.4")).unwrap();
        let request = SigningRequest::new(id.clone(), b"signature png", DocRect::new(66.67, 742.0, 100.0, 33.33));
        let outcome = block_on(backend.sign(&request)).unwrap();

        assert_eq!(outcome.download_url, format!("memory://signed/{}", id));
        assert!(!outcome.audit_trail.is_empty());
    }

    #[test]
    fn test_sign_unknown_document() {
        let backend = MemoryBackend::new(Size::new(595.0, 842.0));
        let request = SigningRequest::new("doc-404", b"sig", DocRect::ZERO);

        let result = block_on(backend.sign(&request));
        assert!(matches!(result, Err(TransportError::UnknownDocument(_))));
    }

    #[test]
    fn test_upload_ids_are_unique() {
        let backend = MemoryBackend::new(Size::new(595.0, 842.0));
        let a = block_on(backend.upload(b"a")).unwrap();
        let b = block_on(backend.upload(b"b")).unwrap();
        assert_ne!(a, b);
    }
}
