//! Configuration management module
//!
//! This module handles loading, saving, and managing application configuration:
//! canvas size, pin and label styling, and playback timing. Configuration is
//! stored as JSON in the `PinMap` configuration directory with atomic writes
//! to prevent corruption.

pub mod manager;
pub mod models;

pub use manager::ConfigManager;
pub use models::{AppConfig, CanvasConfig, LabelStyle, PinStyle, PlaybackTiming};
