//! Shared test utilities for `PinMap` unit tests.
//!
//! This module provides common test infrastructure used across multiple test modules.
//! It is only compiled during testing (`#[cfg(test)]`).

use crate::config::manager::CONFIG_DIR_ENV;
use std::sync::Mutex;
use tempfile::TempDir;

/// Global mutex to serialize tests that modify the config directory variable.
/// This prevents race conditions when multiple tests run in parallel and try to
/// set different values.
static CONFIG_DIR_LOCK: Mutex<()> = Mutex::new(());

/// Helper function to create a temporary test directory using tempfile.
/// Returns a `TempDir` that automatically cleans up when dropped.
pub fn create_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// RAII guard that points `PINMAP_CONFIG_DIR` at a temp directory for a test
/// scope and restores the original value when dropped.
///
/// # Safety Considerations
///
/// `std::env::set_var` and `std::env::remove_var` are unsafe because other
/// threads may read the environment concurrently. The guard holds
/// `CONFIG_DIR_LOCK` for its whole lifetime, so tests touching the variable
/// run one at a time, and the original value is restored on drop even if the
/// test panics.
pub struct ConfigDirGuard {
    original: Option<std::ffi::OsString>,
    // Lock guard must be held for the lifetime of this struct
    _lock: std::sync::MutexGuard<'static, ()>,
}

#[expect(
    unsafe_code,
    reason = "Test-only code that modifies environment variables under a global lock"
)]
impl ConfigDirGuard {
    /// Create a new guard that sets the config directory to the given temp directory path.
    pub fn new(temp_dir: &TempDir) -> Self {
        let lock = CONFIG_DIR_LOCK
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);

        let original = std::env::var_os(CONFIG_DIR_ENV);
        // SAFETY: serialized by CONFIG_DIR_LOCK and restored on drop
        unsafe {
            std::env::set_var(CONFIG_DIR_ENV, temp_dir.path());
        }
        Self {
            original,
            _lock: lock,
        }
    }
}

#[expect(
    unsafe_code,
    reason = "Test-only code that restores environment variables under a global lock"
)]
impl Drop for ConfigDirGuard {
    fn drop(&mut self) {
        // SAFETY: the lock is still held until this struct is fully dropped
        if let Some(ref original) = self.original {
            unsafe {
                std::env::set_var(CONFIG_DIR_ENV, original);
            }
        } else {
            unsafe {
                std::env::remove_var(CONFIG_DIR_ENV);
            }
        }
    }
}

