//! Viewport synchronization.

use crate::store::FieldStore;
use crate::transform::Projection;

/// Re-derive every field's screen rectangle from its authoritative
/// document rectangle at the given projection.
///
/// This is a pure re-projection, never a re-creation of geometry, and the
/// only path that updates a screen rectangle without a user gesture.
/// Repeated passes at the same scale leave every rectangle bit-for-bit
/// unchanged.
pub fn reproject(store: &mut FieldStore, projection: &Projection) {
    for field in store.fields_mut() {
        field.screen_rect = projection.to_screen(field.document_rect);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::{DEFAULT_FIELD_SIZE, FieldKind};
    use crate::transform::PageMetrics;
    use kurbo::{Point, Size};

    fn metrics() -> PageMetrics {
        PageMetrics::new(Size::new(595.0, 842.0), Size::new(892.5, 1263.0))
    }

    #[test]
    fn test_rescale_halves_screen_rect_only() {
        let full = Projection::new(metrics(), 892.5);
        let mut store = FieldStore::new();
        let id = store.create(
            FieldKind::Signature,
            Point::new(100.0, 100.0),
            DEFAULT_FIELD_SIZE,
            &full,
        );

        reproject(&mut store, &full);
        let before_screen = store.get(id).unwrap().screen_rect;
        let before_doc = store.get(id).unwrap().document_rect;

        // Container halves: scale drops from 1.0 to 0.5.
        let half = Projection::new(metrics(), 446.25);
        reproject(&mut store, &half);

        let field = store.get(id).unwrap();
        assert_eq!(field.document_rect, before_doc);
        assert!((field.screen_rect.x0 - before_screen.x0 / 2.0).abs() < 1e-9);
        assert!((field.screen_rect.y0 - before_screen.y0 / 2.0).abs() < 1e-9);
        assert!((field.screen_rect.width() - before_screen.width() / 2.0).abs() < 1e-9);
        assert!((field.screen_rect.height() - before_screen.height() / 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_reproject_is_idempotent() {
        let projection = Projection::new(metrics(), 700.0);
        let mut store = FieldStore::new();
        store.create(
            FieldKind::Text,
            Point::new(42.0, 17.0),
            DEFAULT_FIELD_SIZE,
            &projection,
        );
        store.create(
            FieldKind::Date,
            Point::new(300.0, 500.0),
            DEFAULT_FIELD_SIZE,
            &projection,
        );

        reproject(&mut store, &projection);
        let first: Vec<_> = store.fields_ordered().map(|f| f.screen_rect).collect();

        reproject(&mut store, &projection);
        let second: Vec<_> = store.fields_ordered().map(|f| f.screen_rect).collect();

        // Bit-for-bit equal rectangles.
        assert_eq!(first, second);
    }

    #[test]
    fn test_screen_matches_projection_after_pass() {
        let projection = Projection::new(metrics(), 892.5);
        let mut store = FieldStore::new();
        let id = store.create(
            FieldKind::Image,
            Point::new(100.0, 100.0),
            DEFAULT_FIELD_SIZE,
            &projection,
        );
        store.move_to(id, Point::new(211.3, 94.7), &projection);

        reproject(&mut store, &projection);

        for field in store.fields_ordered() {
            assert_eq!(field.screen_rect, projection.to_screen(field.document_rect));
        }
    }
}
