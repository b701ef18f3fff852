//! Input events routed to event targets.
//!
//! Device polling lives outside this crate; hosts translate their native events
//! into [`InputEvent`] and hand them to
//! [`NodeManager::handle`](crate::NodeManager::handle).

use crate::foundation::core::{Point, Vec2};

/// Pointer button.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum PointerButton {
    /// Primary (usually left) button.
    Primary,
    /// Secondary (usually right) button.
    Secondary,
    /// Middle button or wheel click.
    Middle,
}

/// A single input event in device coordinates.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum InputEvent {
    /// Button pressed.
    PointerDown {
        /// Device position.
        position: Point,
        /// Button.
        button: PointerButton,
    },
    /// Button released.
    PointerUp {
        /// Device position.
        position: Point,
        /// Button.
        button: PointerButton,
    },
    /// Pointer moved.
    PointerMoved {
        /// Device position.
        position: Point,
    },
    /// Wheel or trackpad scroll.
    Scroll {
        /// Device position.
        position: Point,
        /// Scroll amount.
        delta: Vec2,
    },
    /// Key pressed.
    KeyDown {
        /// Host key name.
        key: String,
    },
    /// Key released.
    KeyUp {
        /// Host key name.
        key: String,
    },
}

impl InputEvent {
    /// Device position for pointer events.
    #[must_use]
    pub fn position(&self) -> Option<Point> {
        match self {
            Self::PointerDown { position, .. }
            | Self::PointerUp { position, .. }
            | Self::PointerMoved { position }
            | Self::Scroll { position, .. } => Some(*position),
            Self::KeyDown { .. } | Self::KeyUp { .. } => None,
        }
    }
}
