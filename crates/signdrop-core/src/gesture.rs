//! Per-gesture interaction state.

use kurbo::{Point, Size, Vec2};

use crate::field::{FieldId, FieldKind};

/// The single active pointer gesture.
///
/// The system is driven by one pointing device, so at most one gesture is
/// active at a time; every variant returns to [`Gesture::Idle`] on pointer
/// release. Fields themselves carry no state beyond their geometry.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Gesture {
    /// No gesture in progress.
    #[default]
    Idle,
    /// A field-type token has been picked up and awaits a drop.
    Creating { kind: FieldKind },
    /// A field body is being dragged.
    Moving {
        id: FieldId,
        /// Pointer offset from the field's screen origin at gesture start.
        grab_offset: Vec2,
    },
    /// A field's resize handle is being dragged.
    Resizing {
        id: FieldId,
        /// Pointer position at gesture start.
        start_pointer: Point,
        /// Field screen size at gesture start.
        start_size: Size,
    },
}

impl Gesture {
    /// Whether any gesture is in progress.
    pub fn is_active(&self) -> bool {
        !matches!(self, Gesture::Idle)
    }

    /// The field targeted by the gesture, if it targets one.
    pub fn target(&self) -> Option<FieldId> {
        match self {
            Gesture::Moving { id, .. } | Gesture::Resizing { id, .. } => Some(*id),
            Gesture::Idle | Gesture::Creating { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_is_default_and_inactive() {
        let gesture = Gesture::default();
        assert_eq!(gesture, Gesture::Idle);
        assert!(!gesture.is_active());
        assert_eq!(gesture.target(), None);
    }

    #[test]
    fn test_target() {
        let id = FieldId::new_v4();
        let moving = Gesture::Moving {
            id,
            grab_offset: Vec2::new(5.0, 5.0),
        };
        assert!(moving.is_active());
        assert_eq!(moving.target(), Some(id));

        let creating = Gesture::Creating {
            kind: FieldKind::Text,
        };
        assert!(creating.is_active());
        assert_eq!(creating.target(), None);
    }
}
