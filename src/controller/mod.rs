//! Application logic controller module
//!
//! The controller is the single owner of the application state and the only
//! write path into it. Hosts register handlers for canvas, table, prompt and
//! button events and forward each one to a controller method.
//!
//! # Overview
//!
//! The application controller:
//! - **Tracks the mode** (`Idle`, `Recording`, `Playing`) and gates every action on it
//! - **Owns the pin store** and applies table edits
//! - **Redraws the canvas** and **rebuilds the table** after every change
//! - **Drives playback** through a `Scheduler`, one continuation at a time
//! - **Manages the label prompt** opened after each new pin
//!
//! # Event Flow
//!
//! ```text
//! canvas / table / buttons / timers → AppController → PinStore
//!                                           ↓
//!                            CanvasRenderer + TableView → GUI
//! ```
//!
//! # Mode Transitions
//!
//! 1. **start recording** (from `Idle` or `Recording`): clear the store, the
//!    canvas and the table, enter `Recording`
//! 2. **start playing** (from `Idle` or `Recording`): enter `Playing` and reveal
//!    pin 0
//! 3. **playback finished**: draw the static pin set, return to `Idle`
//!
//! Any action not allowed in the current mode is silently ignored.

pub mod app_controller;

pub use app_controller::AppController;
