//! GUI module
//!
//! Provides the Slint-based main window: record and play buttons, the
//! drawing canvas, the pin table and the label prompt, kept in sync with the
//! application controller.

pub mod gui_controller;

pub use gui_controller::GuiController;
