//! Canvas rendering
//!
//! `Surface` abstracts the host's 2D drawing primitives, `CanvasRenderer`
//! turns the pin sequence into primitives, and `DisplayList` is a recording
//! surface used by the GUI and by tests.

pub mod canvas;
pub mod display_list;
pub mod surface;

pub use canvas::{CanvasRenderer, LabelLayout, layout_label};
pub use display_list::{DisplayList, DrawCommand, GlyphAdvance, TextMetrics};
pub use surface::{Color, Rect, Size, Surface};
