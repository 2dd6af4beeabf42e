//! Timed playback of the pin sequence

pub mod engine;
pub mod scheduler;

pub use engine::{PlaybackEngine, PlaybackStatus};
pub use scheduler::{PlaybackStep, Scheduler, VirtualScheduler};
