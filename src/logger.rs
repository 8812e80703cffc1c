// =====================================================================
// File: logger.rs
// Author: Bob Jack
// Course: CSCE 5350: Fundamentals of Database Systems
// Index Comparison Project
// Date: Oct. 8, 2025
//
// Description:
//   Small logging layer for the benchmark driver. Messages go to
//   stderr with a level tag so the result table on stdout stays clean.
//   `debug!` output is only shown once verbose mode is switched on
//   (the `--verbose` flag of the binary).
// =====================================================================
use std::sync::atomic::{AtomicBool, Ordering};

static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Enable debug output.
pub fn enable_verbose() {
    VERBOSE.store(true, Ordering::Relaxed);
}

/// Check if debug output is enabled.
pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::Relaxed)
}

/// Log a debug message (verbose mode only).
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {
        if $crate::logger::is_verbose() {
            eprintln!("[DEBUG] {}", format!($($arg)*));
        }
    };
}

/// Log an info message.
#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        eprintln!("[INFO] {}", format!($($arg)*));
    };
}

/// Log an error message.
#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        eprintln!("[ERROR] {}", format!($($arg)*));
    };
}
