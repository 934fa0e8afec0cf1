//! Debug logging for the pattern compiler
//!
//! The macros here print only when the `dev-log` feature is enabled and expand
//! to nothing otherwise, so a release build pays nothing for them.
//!
//! ```bash
//! cargo test -p mux_pattern --features "dev-log"
//! ```
//!
//! ```rust
//! use mux_pattern::{debug_log, debug_error};
//!
//! debug_log!("compiled {} segments", 3);
//! debug_error!("rejected pattern: {}", "GET //");
//! ```

/// General-purpose debug logging macro
///
/// Outputs informational messages prefixed with `[DEBUG]`.
#[macro_export]
#[cfg(feature = "dev-log")]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        println!("[DEBUG] {}", format!($($arg)*));
    };
}

#[macro_export]
#[cfg(not(feature = "dev-log"))]
macro_rules! debug_log {
    ($($arg:tt)*) => {};
}

/// Error logging macro
///
/// Outputs to stderr with `[ERROR]` prefix. Used when a pattern is rejected.
#[macro_export]
#[cfg(feature = "dev-log")]
macro_rules! debug_error {
    ($($arg:tt)*) => {
        eprintln!("[ERROR] {}", format!($($arg)*));
    };
}

#[macro_export]
#[cfg(not(feature = "dev-log"))]
macro_rules! debug_error {
    ($($arg:tt)*) => {};
}

/// Warning logging macro
///
/// Outputs to stderr with `[WARN]` prefix. Used for patterns that compile but
/// are likely not what the author meant.
#[macro_export]
#[cfg(feature = "dev-log")]
macro_rules! debug_warn {
    ($($arg:tt)*) => {
        eprintln!("[WARN] {}", format!($($arg)*));
    };
}

#[macro_export]
#[cfg(not(feature = "dev-log"))]
macro_rules! debug_warn {
    ($($arg:tt)*) => {};
}

/// Detailed trace logging, one line per parsed segment
///
/// Outputs with `[TRACE]` prefix.
#[macro_export]
#[cfg(feature = "dev-log")]
macro_rules! debug_trace {
    ($($arg:tt)*) => {
        println!("[TRACE] {}", format!($($arg)*));
    };
}

#[macro_export]
#[cfg(not(feature = "dev-log"))]
macro_rules! debug_trace {
    ($($arg:tt)*) => {};
}

#[cfg(test)]
mod tests {
    #[test]
    fn macros_expand_as_statements() {
        let segments = 3;
        debug_log!("compiled {} segments", segments);
        debug_warn!("literal {:?} is not UTF-8", "%FF");
        debug_error!("rejected {:?}", "GET //");
        debug_trace!("segment {} at {}", "a", 1);
        assert_eq!(segments, 3);
    }
}
