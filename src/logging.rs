//! Logging macros for the simulator with verbosity level control.
//!
//! Provides zero-cost logging when disabled (verbosity=0).
//! Verbosity levels:
//! - 0: SILENT (no diagnostics)
//! - 1: SWEEPS (partition sizes, boundary stops, wrap jumps)
//! - 2: SEEKS (every individual head movement)

/// Verbosity level constants.
pub const VERBOSITY_SILENT: u8 = 0;
pub const VERBOSITY_SWEEPS: u8 = 1;
pub const VERBOSITY_SEEKS: u8 = 2;

/// Log at SWEEPS level (verbosity >= 1).
///
/// Used for: sweep transitions, forced boundary stops, wrap jumps.
#[macro_export]
macro_rules! log_sweeps {
    ($verbosity:expr, $($arg:tt)*) => {
        if $verbosity >= $crate::logging::VERBOSITY_SWEEPS {
            eprintln!($($arg)*);
        }
    };
}

/// Log at SEEKS level (verbosity >= 2).
///
/// Used for: per-request head movements.
#[macro_export]
macro_rules! log_seeks {
    ($verbosity:expr, $($arg:tt)*) => {
        if $verbosity >= $crate::logging::VERBOSITY_SEEKS {
            eprintln!($($arg)*);
        }
    };
}
