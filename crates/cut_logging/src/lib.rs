#![deny(missing_docs)]
//! Shared logging utilities for the file_cut workspace.
//!
//! This crate provides the `cut_*` logging macros used across the codebase,
//! the terminal initializer used by the binary and a minimal test
//! initializer for the global logger.

use log::LevelFilter;
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};

/// Environment variable that overrides the binary's log level.
pub const LOG_LEVEL_ENV: &str = "FILE_CUT_LOG";

/// Logs an info-level message using the global logging facade.
#[macro_export]
macro_rules! cut_info {
    ($($arg:tt)*) => {{
        log::info!($($arg)*);
    }};
}

/// Logs a debug-level message using the global logging facade.
#[macro_export]
macro_rules! cut_debug {
    ($($arg:tt)*) => {{
        log::debug!($($arg)*);
    }};
}

/// Resolves the terminal log level from an optional override string.
///
/// Unrecognised or missing values fall back to `Warn` so the success line on
/// stdout stays the only output of a normal run.
pub fn level_from(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|v| v.trim().parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::Warn)
}

/// Initializes a stderr terminal logger for the binary.
///
/// The level is read from [`LOG_LEVEL_ENV`]. Safely no-ops if a logger is
/// already installed.
pub fn initialize_terminal() {
    let level = level_from(std::env::var(LOG_LEVEL_ENV).ok().as_deref());
    let config = ConfigBuilder::new()
        .set_target_level(LevelFilter::Error)
        .build();

    let _ = TermLogger::init(level, config, TerminalMode::Stderr, ColorChoice::Auto);
}

/// Initializes a simple terminal logger for use in unit tests.
///
/// This safely no-ops if another logger has already been initialized.
pub fn initialize_for_tests() {
    use simplelog::{CombinedLogger, Config};

    // Use debug level in debug builds, info in release builds.
    let level = if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    // Ignore the error if a logger was already set by another test.
    let _ = CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}
