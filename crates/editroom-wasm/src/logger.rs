//! Console-backed logger for the `log` facade.
//!
//! The core pipeline reports skipped unknown operations and in-memory
//! encode failures through `log`; this logger forwards those records to
//! the host's console so they are visible during development instead of
//! disappearing into a no-op facade.

use log::{Level, LevelFilter, Metadata, Record};
use wasm_bindgen::JsValue;
use web_sys::console;

struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl log::Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Info
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let msg = JsValue::from_str(&format!("{}: {}", record.target(), record.args()));
        match record.level() {
            Level::Error => console::error_1(&msg),
            Level::Warn => console::warn_1(&msg),
            _ => console::log_1(&msg),
        }
    }

    fn flush(&self) {}
}

/// Install the console logger. Only the first install wins; subsequent
/// calls are no-ops.
pub(crate) fn install() {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(LevelFilter::Info);
    }
}
