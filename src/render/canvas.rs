//! Canvas renderer
//!
//! Draws pins, connectors and label overlays onto a `Surface`. Every redraw
//! starts from a cleared surface; nothing is patched incrementally.
//!
//! # Label placement
//!
//! A label box sits `2 × radius` away from its pin, below and to the right by
//! default. Each axis flips independently so the box stays on the canvas:
//! pins right of the horizontal center get the box on their left, pins below
//! the vertical center get it above.

use crate::config::{LabelStyle, PinStyle};
use crate::model::{Pin, Point};
use crate::render::surface::{Rect, Size, Surface};

/// Position of a label box and its text
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelLayout {
    /// Background rectangle
    pub rect: Rect,
    /// Top-left corner of the text
    pub text_origin: Point,
}

/// Compute where the label of a pin goes
///
/// `text_width` is the measured width of the label string.
pub fn layout_label(
    pin: Point,
    text_width: f32,
    canvas: Size,
    pin_style: &PinStyle,
    label_style: &LabelStyle,
) -> LabelLayout {
    let width = text_width + 2.0 * label_style.padding;
    let height = label_style.box_height;
    let mut x_offset = 2.0 * pin_style.radius;
    let mut y_offset = 2.0 * pin_style.radius;

    if pin.x > canvas.width / 2.0 {
        x_offset = -(x_offset + width);
    }
    if pin.y > canvas.height / 2.0 {
        y_offset = -(y_offset + height);
    }

    let rect = Rect {
        x: pin.x + x_offset,
        y: pin.y + y_offset,
        width,
        height,
    };
    LabelLayout {
        rect,
        text_origin: Point::new(rect.x + label_style.padding, rect.y),
    }
}

/// Renders the pin sequence onto an owned surface
pub struct CanvasRenderer<S: Surface> {
    surface: S,
    pin_style: PinStyle,
    label_style: LabelStyle,
}

impl<S: Surface> CanvasRenderer<S> {
    /// Create a renderer drawing onto `surface`
    pub fn new(surface: S, pin_style: PinStyle, label_style: LabelStyle) -> Self {
        Self {
            surface,
            pin_style,
            label_style,
        }
    }

    /// The underlying surface
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Wipe the whole canvas
    pub fn clear(&mut self) {
        self.surface.clear();
    }

    /// Draw a single pin circle
    pub fn draw_pin(&mut self, at: Point) {
        self.surface
            .fill_circle(at, self.pin_style.radius, self.pin_style.fill);
    }

    /// Draw the connector between two consecutive pins
    pub fn draw_connector(&mut self, from: Point, to: Point) {
        self.surface.stroke_line(from, to, self.pin_style.connector);
    }

    /// Draw the label overlay of `pin`
    pub fn draw_label(&mut self, pin: &Pin) {
        let text_width = self
            .surface
            .measure_text(&pin.label, self.label_style.font_size);
        let layout = layout_label(
            pin.position(),
            text_width,
            self.surface.size(),
            &self.pin_style,
            &self.label_style,
        );

        self.surface
            .fill_rect(layout.rect, self.label_style.background);
        self.surface.fill_text(
            &pin.label,
            layout.text_origin,
            self.label_style.font_size,
            self.label_style.text,
        );
    }

    /// Draw pins `0..=last` with a connector into each pin after the first
    ///
    /// Indices past the end of `pins` are ignored.
    pub fn draw_pins_up_to(&mut self, pins: &[Pin], last: usize) {
        let end = pins.len().min(last.saturating_add(1));
        for (i, pin) in pins[..end].iter().enumerate() {
            self.draw_pin(pin.position());
            if i > 0 {
                self.draw_connector(pins[i - 1].position(), pin.position());
            }
        }
    }

    /// Draw every pin and connector
    pub fn draw_all_pins(&mut self, pins: &[Pin]) {
        if let Some(last) = pins.len().checked_sub(1) {
            self.draw_pins_up_to(pins, last);
        }
    }

    /// Clear and draw the full static pin set
    pub fn redraw(&mut self, pins: &[Pin]) {
        self.clear();
        self.draw_all_pins(pins);
    }

    /// Clear, draw the committed pins and an uncommitted preview pin at `at`
    pub fn redraw_with_preview(&mut self, pins: &[Pin], at: Point) {
        self.redraw(pins);
        self.draw_pin(at);
    }
}
