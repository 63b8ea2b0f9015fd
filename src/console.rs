//! Browser console logging.
//!
//! On `wasm32` the macros forward to `console.log` / `console.warn` through
//! web-sys. Native builds (unit tests, tooling) have no console to talk to, so
//! the message is formatted and dropped.

#[cfg(target_arch = "wasm32")]
pub(crate) fn log(message: &str) {
    web_sys::console::log_1(&message.into());
}

#[cfg(target_arch = "wasm32")]
pub(crate) fn warn(message: &str) {
    web_sys::console::warn_1(&message.into());
}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn log(_message: &str) {}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn warn(_message: &str) {}

/// `console.log` with `format!` arguments, prefixed with the module tag.
macro_rules! console_log {
    ($($arg:tt)*) => {
        $crate::console::log(&format!("[hero-scene] {}", format_args!($($arg)*)))
    };
}

/// `console.warn` with `format!` arguments, prefixed with the module tag.
macro_rules! console_warn {
    ($($arg:tt)*) => {
        $crate::console::warn(&format!("[hero-scene] {}", format_args!($($arg)*)))
    };
}

pub(crate) use console_log;
pub(crate) use console_warn;
