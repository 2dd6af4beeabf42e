//! Recorded drawing surface
//!
//! `DisplayList` stores every primitive drawn since the last `clear()`, in
//! order. The GUI paints the list as the current canvas frame, and tests read
//! it back to check exactly what was drawn.
//!
//! Text widths come from a `TextMetrics` source. Headless lists use
//! `GlyphAdvance`; the GUI measures with the toolkit's own text layout.

use crate::model::Point;
use crate::render::surface::{Color, Rect, Size, Surface};

/// One recorded drawing primitive
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Filled circle
    Circle {
        /// Circle center
        center: Point,
        /// Circle radius
        radius: f32,
        /// Fill color
        color: Color,
    },
    /// Straight line segment
    Line {
        /// Start point
        from: Point,
        /// End point
        to: Point,
        /// Stroke color
        color: Color,
    },
    /// Filled rectangle
    Rect {
        /// Rectangle bounds
        rect: Rect,
        /// Fill color
        color: Color,
    },
    /// Text anchored at its top-left corner
    Text {
        /// The string drawn
        text: String,
        /// Top-left corner
        origin: Point,
        /// Font size
        font_size: f32,
        /// Text color
        color: Color,
    },
}

/// Source of rendered text widths
pub trait TextMetrics {
    /// Width of `text` at `font_size`
    fn text_width(&self, text: &str, font_size: f32) -> f32;
}

/// Width estimate of `chars × font_size × ratio`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphAdvance(pub f32);

impl TextMetrics for GlyphAdvance {
    #[expect(
        clippy::cast_precision_loss,
        reason = "Label lengths are far below f32's exact integer range"
    )]
    fn text_width(&self, text: &str, font_size: f32) -> f32 {
        text.chars().count() as f32 * font_size * self.0
    }
}

/// A `Surface` that records primitives instead of rasterizing them
#[derive(Debug, Clone)]
pub struct DisplayList<M: TextMetrics = GlyphAdvance> {
    size: Size,
    metrics: M,
    commands: Vec<DrawCommand>,
    clears: usize,
}

impl DisplayList {
    /// Create an empty list for a surface of `size`
    ///
    /// Text width is estimated as `chars × font_size × glyph_advance_ratio`.
    pub fn new(size: Size, glyph_advance_ratio: f32) -> Self {
        Self::with_metrics(size, GlyphAdvance(glyph_advance_ratio))
    }
}

impl<M: TextMetrics> DisplayList<M> {
    /// Create an empty list that measures text with `metrics`
    pub fn with_metrics(size: Size, metrics: M) -> Self {
        Self {
            size,
            metrics,
            commands: Vec::new(),
            clears: 0,
        }
    }

    /// Primitives drawn since the last clear
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// How many times the surface has been cleared
    pub fn clear_count(&self) -> usize {
        self.clears
    }

    /// Number of circles in the current frame
    pub fn circle_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Circle { .. }))
            .count()
    }

    /// Number of line segments in the current frame
    pub fn line_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Line { .. }))
            .count()
    }

    /// Strings drawn in the current frame
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl<M: TextMetrics> Surface for DisplayList<M> {
    fn size(&self) -> Size {
        self.size
    }

    fn clear(&mut self) {
        self.commands.clear();
        self.clears += 1;
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: Color) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
        });
    }

    fn stroke_line(&mut self, from: Point, to: Point, color: Color) {
        self.commands.push(DrawCommand::Line { from, to, color });
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::Rect { rect, color });
    }

    fn measure_text(&self, text: &str, font_size: f32) -> f32 {
        self.metrics.text_width(text, font_size)
    }

    fn fill_text(&mut self, text: &str, origin: Point, font_size: f32, color: Color) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            origin,
            font_size,
            color,
        });
    }
}
