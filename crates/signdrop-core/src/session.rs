//! Session context: one loaded document, its fields, and the active gesture.

use kurbo::{Point, Rect, Size};

use crate::field::{DEFAULT_FIELD_SIZE, Field, FieldId, FieldKind};
use crate::gesture::Gesture;
use crate::input::{MouseButton, PointerCapture, PointerEvent};
use crate::store::FieldStore;
use crate::transform::{PageMetrics, Projection};
use crate::viewport;

/// Mutable state for one document session.
///
/// Owns the page geometry, the current container width, the field store,
/// the selection and the active gesture. Nothing here is ambient: the
/// embedding layer holds one `Session` and routes pointer events into it.
///
/// The session runs single-threaded and event-driven; each pointer event
/// is fully applied (store mutation plus derived recomputation) before the
/// next is handled.
#[derive(Debug, Default)]
pub struct Session {
    page: Option<PageMetrics>,
    container_width: f64,
    /// All placed fields.
    pub store: FieldStore,
    selected: Option<FieldId>,
    gesture: Gesture,
    capture: Option<PointerCapture>,
}

impl Session {
    /// Create a session with no document loaded. Placement, move and
    /// resize are no-ops until [`Session::load_page`] is called.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a session for a freshly rendered page.
    ///
    /// Replaces any previous document: fields, selection and gesture do
    /// not outlive it. Page and surface sizes stay fixed until the next
    /// document replaces them.
    pub fn load_page(&mut self, metrics: PageMetrics, container_width: f64) {
        self.page = Some(metrics);
        self.container_width = container_width;
        self.store.clear();
        self.selected = None;
        self.gesture = Gesture::Idle;
        self.capture = None;
        log::debug!(
            "page loaded: {:?} in container width {}",
            metrics,
            container_width
        );
    }

    /// Whether a document is loaded.
    pub fn is_loaded(&self) -> bool {
        self.page.is_some()
    }

    /// Current screen/document projection, if a page is loaded.
    pub fn projection(&self) -> Option<Projection> {
        self.page
            .map(|metrics| Projection::new(metrics, self.container_width))
    }

    /// Displayed page bounds in screen space.
    fn surface_bounds(&self) -> Option<Rect> {
        let metrics = self.page?;
        let projection = self.projection()?;
        Some(Rect::new(
            0.0,
            0.0,
            self.container_width,
            metrics.surface_size.height * projection.scale,
        ))
    }

    /// React to a container resize: recompute the scale and re-derive
    /// every field's screen rectangle from document space.
    pub fn set_container_width(&mut self, width: f64) {
        self.container_width = width;
        self.sync_screen_rects();
    }

    /// Re-project all screen rectangles at the current scale.
    pub fn sync_screen_rects(&mut self) {
        if let Some(projection) = self.projection() {
            viewport::reproject(&mut self.store, &projection);
        }
    }

    /// The currently selected field, if any.
    pub fn selected(&self) -> Option<FieldId> {
        self.selected
    }

    /// The active gesture.
    pub fn gesture(&self) -> &Gesture {
        &self.gesture
    }

    /// Pick up a field-type token from the palette (drag start).
    pub fn begin_token_drag(&mut self, kind: FieldKind) {
        if self.gesture.is_active() {
            return;
        }
        self.gesture = Gesture::Creating { kind };
        self.capture = Some(PointerCapture::acquire());
    }

    /// Pointer-down on a field body (excluding its resize handle and
    /// delete control): selects the field and starts a move gesture.
    pub fn press_field_body(&mut self, id: FieldId, pointer: Point) {
        if self.gesture.is_active() || !self.is_loaded() {
            return;
        }
        let Some(field) = self.store.get(id) else {
            return;
        };
        self.selected = Some(id);
        self.gesture = Gesture::Moving {
            id,
            grab_offset: pointer - field.screen_rect.origin(),
        };
        self.capture = Some(PointerCapture::acquire());
    }

    /// Pointer-down on a field's resize handle: selects the field and
    /// starts a resize gesture.
    pub fn press_resize_handle(&mut self, id: FieldId, pointer: Point) {
        if self.gesture.is_active() || !self.is_loaded() {
            return;
        }
        let Some(field) = self.store.get(id) else {
            return;
        };
        self.selected = Some(id);
        self.gesture = Gesture::Resizing {
            id,
            start_pointer: pointer,
            start_size: field.screen_rect.size(),
        };
        self.capture = Some(PointerCapture::acquire());
    }

    /// Route a pointer event through the active gesture.
    ///
    /// Events are applied strictly in arrival order; release always
    /// commits the gesture's last computed geometry (there is no cancel).
    pub fn handle_pointer_event(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Move { position } => self.pointer_moved(position),
            PointerEvent::Up {
                position,
                button: MouseButton::Left,
            } => self.pointer_released(position),
            PointerEvent::Up { .. } | PointerEvent::Down { .. } => {}
        }
    }

    fn pointer_moved(&mut self, position: Point) {
        let Some(projection) = self.projection() else {
            return;
        };
        match self.gesture {
            Gesture::Moving { id, grab_offset } => {
                // Recompute from the current pointer position, not a
                // chained delta, so rounding never accumulates.
                self.store.move_to(id, position - grab_offset, &projection);
            }
            Gesture::Resizing {
                id,
                start_pointer,
                start_size,
            } => {
                let delta = position - start_pointer;
                let requested = Size::new(start_size.width + delta.x, start_size.height + delta.y);
                self.store.resize_to(id, requested, &projection);
            }
            Gesture::Idle | Gesture::Creating { .. } => {}
        }
    }

    fn pointer_released(&mut self, position: Point) {
        let gesture = std::mem::take(&mut self.gesture);
        if let Some(capture) = self.capture.take() {
            capture.release();
        }
        // Move/resize already committed their last geometry on the final
        // move event; only a pending drop still has work to do.
        if let Gesture::Creating { kind } = gesture {
            self.drop_token(kind, position);
        }
    }

    /// Drop a picked-up token at `position`. A drop outside the displayed
    /// page, or with no document loaded, is a no-op.
    fn drop_token(&mut self, kind: FieldKind, position: Point) -> Option<FieldId> {
        let bounds = self.surface_bounds()?;
        if !bounds.contains(position) {
            log::debug!("drop at {:?} outside page surface ignored", position);
            return None;
        }
        let projection = self.projection()?;
        Some(self.store.create(kind, position, DEFAULT_FIELD_SIZE, &projection))
    }

    /// Delete a field.
    ///
    /// Atomic with respect to the store; clears the selection only if it
    /// referenced this field, and ends the gesture only if the gesture
    /// targeted it. A gesture on a different field keeps running.
    pub fn delete_field(&mut self, id: FieldId) -> bool {
        if self.store.remove(id).is_none() {
            return false;
        }
        log::debug!("deleted field {}", id);
        if self.selected == Some(id) {
            self.selected = None;
        }
        if self.gesture.target() == Some(id) {
            self.gesture = Gesture::Idle;
            if let Some(capture) = self.capture.take() {
                capture.release();
            }
        }
        true
    }

    /// First placed signature field, if any. The signing transport accepts
    /// coordinates for exactly one signature field.
    pub fn first_signature_field(&self) -> Option<&Field> {
        self.store
            .fields_ordered()
            .find(|field| field.kind == FieldKind::Signature)
    }

    /// Business-layer signing preconditions: a document loaded, at least
    /// one signature field placed, and a signature image attached.
    pub fn ready_to_sign(&self, has_signature_image: bool) -> bool {
        has_signature_image && self.is_loaded() && self.first_signature_field().is_some()
    }
}
