//! `PinMap` - record labeled pins on a canvas and replay them
//!
//! Click on the canvas while recording to place pins, label them in a prompt,
//! reorder, relabel or delete them in a table, then replay the sequence as a
//! timed animation that reveals one pin at a time and flashes its label.
//!
//! `AppController` owns all state and is driven by host events. Drawing goes
//! through the `Surface` trait and timed continuations through the `Scheduler`
//! trait, so the whole application runs headless with `DisplayList` and
//! `VirtualScheduler`.

// Module declarations
pub mod config;
pub mod controller;
pub mod error;
pub mod input;
pub mod model;
pub mod playback;
pub mod render;
pub mod utils;
pub mod view;

#[cfg(test)]
mod test_utils;

// Re-export commonly used types
pub use error::{PinMapError, Result};
