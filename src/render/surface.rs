//! Drawing surface abstraction
//!
//! The canvas renderer only needs a handful of 2D primitives. Hosts implement
//! `Surface` for whatever actually puts pixels on screen; the crate ships
//! `DisplayList`, which records the primitives so a GUI toolkit can paint them
//! and tests can inspect them.

use crate::model::Point;
use serde::{Deserialize, Serialize};

/// An opaque RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Color {
    /// Pure red, the default pin fill
    pub const RED: Self = Self::rgb(255, 0, 0);
    /// Black, used for connectors and label text
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// White, used for label backgrounds
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Create a color from its channels
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Pixel dimensions of a surface
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    /// Width in pixels
    pub width: f32,
    /// Height in pixels
    pub height: f32,
}

impl Size {
    /// Create a size
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned rectangle anchored at its top-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Left edge
    pub x: f32,
    /// Top edge
    pub y: f32,
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
}

/// 2D drawing primitives provided by the host environment
pub trait Surface {
    /// Fixed pixel size of the surface
    fn size(&self) -> Size;

    /// Wipe the whole surface
    fn clear(&mut self);

    /// Draw a filled circle
    fn fill_circle(&mut self, center: Point, radius: f32, color: Color);

    /// Stroke a straight line
    fn stroke_line(&mut self, from: Point, to: Point, color: Color);

    /// Draw a filled rectangle
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Width of `text` when drawn at `font_size`
    fn measure_text(&self, text: &str, font_size: f32) -> f32;

    /// Draw `text` with its top-left corner at `origin`
    fn fill_text(&mut self, text: &str, origin: Point, font_size: f32, color: Color);
}
