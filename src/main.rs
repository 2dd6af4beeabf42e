//! `PinMap` - record labeled pins on a canvas and replay them
//!
//! Starts logging, loads the configuration and runs the Slint main window.

// Set Windows subsystem to hide console window
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]
#![expect(
    missing_docs,
    reason = "Slint-generated code from include_modules! lacks doc comments"
)]
#![allow(clippy::unwrap_used)] // Slint-generated code from include_modules! uses .unwrap() extensively

// GUI module is only in the binary, not the library
mod gui;

use anyhow::{Context, Result};
use gui::GuiController;
use pinmap::{
    config::ConfigManager,
    error::{PinMapError, get_user_friendly_error},
    utils,
};
use tracing::{error, info};

// Include Slint-generated code
slint::include_modules!();

/// Main entry point for the application
fn main() -> Result<()> {
    let config_dir = ConfigManager::get_config_dir();
    utils::init_logging(&config_dir).context("Failed to initialize logging system")?;

    info!("PinMap v{} starting...", env!("CARGO_PKG_VERSION"));

    let config = ConfigManager::load().context("Failed to load application configuration")?;
    info!(
        "Configuration loaded: canvas {}x{}, reveal {}ms, conceal {}ms",
        config.canvas.width,
        config.canvas.height,
        config.playback.reveal_ms,
        config.playback.conceal_ms
    );

    let gui_controller = match GuiController::new(config).context("Failed to create main window")
    {
        Ok(controller) => controller,
        Err(e) => {
            error!("Failed to initialize GUI: {:#}", e);
            report_error(&e);
            return Err(e);
        }
    };

    info!("Starting GUI event loop");
    gui_controller
        .run()
        .context("GUI event loop terminated with error")?;

    info!("PinMap shutting down");

    Ok(())
}

/// Print a user-facing explanation of a startup failure
fn report_error(error: &anyhow::Error) {
    let message = if let Some(pinmap_error) = error.downcast_ref::<PinMapError>() {
        get_user_friendly_error(pinmap_error)
    } else {
        format!("{error:#}")
    };
    eprintln!("ERROR: {message}");
}
