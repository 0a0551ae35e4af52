//! Field store: the id-to-field map and its mutations.

use std::collections::HashMap;

use kurbo::{Point, Rect, Size};

use crate::field::{Field, FieldId, FieldKind, MIN_FIELD_SIZE};
use crate::transform::Projection;

/// Owns every placed field, keyed by id, plus creation order for stable
/// iteration.
///
/// The document rectangle is the single source of truth; every mutation
/// keeps the derived screen rectangle in step with the same input values
/// the document rectangle was computed from, so the two can never drift
/// apart by more than one rounding step.
#[derive(Debug, Clone, Default)]
pub struct FieldStore {
    fields: HashMap<FieldId, Field>,
    order: Vec<FieldId>,
}

impl FieldStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Place a new field whose screen origin lands on `origin`.
    pub fn create(
        &mut self,
        kind: FieldKind,
        origin: Point,
        size: Size,
        projection: &Projection,
    ) -> FieldId {
        let screen_rect = Rect::from_origin_size(origin, size);
        let document_rect = projection.to_document(screen_rect);
        let field = Field::new(kind, screen_rect, document_rect);
        let id = field.id();
        log::debug!("created {:?} field {} at {:?}", kind, id, document_rect);
        self.order.push(id);
        self.fields.insert(id, field);
        id
    }

    /// Move a field so its screen origin lands on `origin`, keeping its
    /// current screen size.
    ///
    /// Returns false if the field does not exist.
    pub fn move_to(&mut self, id: FieldId, origin: Point, projection: &Projection) -> bool {
        let Some(field) = self.fields.get_mut(&id) else {
            return false;
        };
        let screen_rect = Rect::from_origin_size(origin, field.screen_rect.size());
        field.document_rect = projection.to_document(screen_rect);
        field.screen_rect = screen_rect;
        true
    }

    /// Resize a field to the requested screen size, clamped per axis to
    /// [`MIN_FIELD_SIZE`]. The screen origin is unchanged.
    ///
    /// Returns false if the field does not exist.
    pub fn resize_to(&mut self, id: FieldId, size: Size, projection: &Projection) -> bool {
        let Some(field) = self.fields.get_mut(&id) else {
            return false;
        };
        let clamped = Size::new(
            size.width.max(MIN_FIELD_SIZE.width),
            size.height.max(MIN_FIELD_SIZE.height),
        );
        let screen_rect = Rect::from_origin_size(field.screen_rect.origin(), clamped);
        field.document_rect = projection.to_document(screen_rect);
        field.screen_rect = screen_rect;
        true
    }

    /// Remove a field, returning the removed entity.
    pub fn remove(&mut self, id: FieldId) -> Option<Field> {
        self.order.retain(|&fid| fid != id);
        self.fields.remove(&id)
    }

    /// Remove every field.
    pub fn clear(&mut self) {
        self.fields.clear();
        self.order.clear();
    }

    /// Get a field by id.
    pub fn get(&self, id: FieldId) -> Option<&Field> {
        self.fields.get(&id)
    }

    /// Get a mutable reference to a field by id.
    pub fn get_mut(&mut self, id: FieldId) -> Option<&mut Field> {
        self.fields.get_mut(&id)
    }

    /// Check whether a field exists.
    pub fn contains(&self, id: FieldId) -> bool {
        self.fields.contains_key(&id)
    }

    /// Fields in creation order.
    pub fn fields_ordered(&self) -> impl Iterator<Item = &Field> {
        self.order.iter().filter_map(|id| self.fields.get(id))
    }

    /// Mutable iteration for viewport reprojection.
    pub(crate) fn fields_mut(&mut self) -> impl Iterator<Item = &mut Field> {
        self.fields.values_mut()
    }

    /// Number of placed fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
