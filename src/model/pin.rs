//! Pin and point value types

use serde::{Deserialize, Serialize};

/// A position in canvas-local pixels
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal position, growing to the right
    pub x: f32,
    /// Vertical position, growing downwards
    pub y: f32,
}

impl Point {
    /// Create a point from its coordinates
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A recorded point with an optional text label
///
/// The position is fixed once the pin is placed; only the label can change.
#[derive(Debug, Clone, PartialEq)]
pub struct Pin {
    position: Point,
    /// Label shown during playback (empty means no label overlay)
    pub label: String,
}

impl Pin {
    /// Create an unlabeled pin at the given canvas position
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            position: Point::new(x, y),
            label: String::new(),
        }
    }

    /// Create a pin with a label
    pub fn with_label(x: f32, y: f32, label: impl Into<String>) -> Self {
        Self {
            position: Point::new(x, y),
            label: label.into(),
        }
    }

    /// Canvas position of the pin
    pub fn position(&self) -> Point {
        self.position
    }

    /// Horizontal canvas position
    pub fn x(&self) -> f32 {
        self.position.x
    }

    /// Vertical canvas position
    pub fn y(&self) -> f32 {
        self.position.y
    }

    /// Whether the pin carries a label worth drawing
    pub fn has_label(&self) -> bool {
        !self.label.is_empty()
    }
}
