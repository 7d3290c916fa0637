#![deny(missing_docs)]
//! Shared logging utilities for the timeline workspace.
//!
//! This crate provides the `timeline_*` logging macros used across the
//! codebase and a minimal test initializer for the global logger. Messages
//! logged while a sequence step is active are prefixed with `[step N]`.

use std::cell::Cell;

#[doc(hidden)]
pub use log;

thread_local! {
    /// Thread-local storage for the step the driver is currently working on.
    static CURRENT_STEP: Cell<Option<usize>> = const { Cell::new(None) };
}

/// Records the step the current thread is working on.
/// The driver calls this before issuing each fetch.
pub fn set_current_step(step: usize) {
    CURRENT_STEP.with(|v| v.set(Some(step)));
}

/// Clears the step context, e.g. once the sequence reached a terminal phase.
pub fn clear_current_step() {
    CURRENT_STEP.with(|v| v.set(None));
}

/// Returns the step recorded for the current thread, if any.
pub fn current_step() -> Option<usize> {
    CURRENT_STEP.with(|v| v.get())
}

#[doc(hidden)]
#[macro_export]
macro_rules! __timeline_log {
    ($level:expr, $($arg:tt)*) => {{
        match $crate::current_step() {
            Some(step) => $crate::log::log!(
                $level,
                "[step {}] {}",
                step,
                format_args!($($arg)*)
            ),
            None => $crate::log::log!($level, $($arg)*),
        }
    }};
}

/// Logs a trace-level message using the global logging facade.
#[macro_export]
macro_rules! timeline_trace {
    ($($arg:tt)*) => {
        $crate::__timeline_log!($crate::log::Level::Trace, $($arg)*)
    };
}

/// Logs a debug-level message using the global logging facade.
#[macro_export]
macro_rules! timeline_debug {
    ($($arg:tt)*) => {
        $crate::__timeline_log!($crate::log::Level::Debug, $($arg)*)
    };
}

/// Logs an info-level message using the global logging facade.
#[macro_export]
macro_rules! timeline_info {
    ($($arg:tt)*) => {
        $crate::__timeline_log!($crate::log::Level::Info, $($arg)*)
    };
}

/// Logs a warn-level message using the global logging facade.
#[macro_export]
macro_rules! timeline_warn {
    ($($arg:tt)*) => {
        $crate::__timeline_log!($crate::log::Level::Warn, $($arg)*)
    };
}

/// Logs an error-level message using the global logging facade.
#[macro_export]
macro_rules! timeline_error {
    ($($arg:tt)*) => {
        $crate::__timeline_log!($crate::log::Level::Error, $($arg)*)
    };
}

/// Initializes a simple terminal logger for use in tests.
///
/// This safely no-ops if another logger has already been initialized.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

    // Use debug level in debug builds, info in release builds.
    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    // Ignore the error if a logger was already set by another test.
    let _ = CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}
