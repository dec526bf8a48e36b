//! Internal logging shim.
//!
//! `log_event!(level, ...)` forwards to the matching `tracing` macro when the
//! `tracing` feature is enabled and expands to nothing otherwise.

macro_rules! log_event {
    ($level:ident, $($arg:tt)+) => {{
        #[cfg(feature = "tracing")]
        {
            ::tracing::$level!($($arg)+);
        }
    }};
}
