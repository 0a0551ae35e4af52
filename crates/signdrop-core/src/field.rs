//! Placed-field data model.

use kurbo::{Rect, Size};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::transform::DocRect;

/// Unique identifier for a placed field.
pub type FieldId = Uuid;

/// Screen-pixel size of a freshly dropped field.
pub const DEFAULT_FIELD_SIZE: Size = Size::new(150.0, 50.0);

/// Minimum screen-pixel size a field may be resized to.
pub const MIN_FIELD_SIZE: Size = Size::new(50.0, 30.0);

/// The closed set of field kinds a user can place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Signature,
    Text,
    Image,
    Date,
    Radio,
}

impl FieldKind {
    /// All placeable kinds, in palette order.
    pub const ALL: [FieldKind; 5] = [
        FieldKind::Signature,
        FieldKind::Text,
        FieldKind::Image,
        FieldKind::Date,
        FieldKind::Radio,
    ];

    /// Human-readable palette label.
    pub fn label(&self) -> &'static str {
        match self {
            FieldKind::Signature => "Signature",
            FieldKind::Text => "Text",
            FieldKind::Image => "Image",
            FieldKind::Date => "Date",
            FieldKind::Radio => "Radio",
        }
    }

    /// Palette icon glyph.
    pub fn icon(&self) -> &'static str {
        match self {
            FieldKind::Signature => "\u{270D}",
            FieldKind::Text => "T",
            FieldKind::Image => "\u{1F5BC}",
            FieldKind::Date => "\u{1F4C5}",
            FieldKind::Radio => "\u{25C9}",
        }
    }
}

/// A user-placed interactive rectangle of a fixed kind.
///
/// `document_rect` is the authoritative geometry. `screen_rect` is a
/// derived cache: the gesture that mutated the field keeps it in step, and
/// viewport reprojection re-derives it whenever the scale changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Field {
    pub(crate) id: FieldId,
    /// Field kind, fixed at creation.
    pub kind: FieldKind,
    /// Authoritative geometry in document space.
    pub document_rect: DocRect,
    /// Derived geometry in screen space.
    #[serde(skip)]
    pub screen_rect: Rect,
    /// Free-form payload (text content, future use).
    pub value: Option<String>,
}

impl Field {
    pub(crate) fn new(kind: FieldKind, screen_rect: Rect, document_rect: DocRect) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            document_rect,
            screen_rect,
            value: None,
        }
    }

    /// Stable identity for the field's lifetime.
    pub fn id(&self) -> FieldId {
        self.id
    }
}
