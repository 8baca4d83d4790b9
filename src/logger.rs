//! Console Logger
//!
//! `log` backend writing to the browser console (stderr off-wasm).
//! Call sites tag their messages, e.g. `log::info!("[API] ...")`.

use log::{Level, LevelFilter, Log, Metadata, Record};

pub struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

/// Install the logger; calls after the first are ignored
pub fn init(level: LevelFilter) {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            write_line(record.level(), &render(record));
        }
    }

    fn flush(&self) {}
}

fn render(record: &Record) -> String {
    format!("{:<5} {}", record.level(), record.args())
}

#[cfg(target_arch = "wasm32")]
fn write_line(level: Level, line: &str) {
    let message = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::Error => web_sys::console::error_1(&message),
        Level::Warn => web_sys::console::warn_1(&message),
        Level::Info => web_sys::console::log_1(&message),
        Level::Debug | Level::Trace => web_sys::console::debug_1(&message),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_line(_level: Level, line: &str) {
    eprintln!("{}", line);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_pads_level() {
        let line = render(
            &Record::builder()
                .args(format_args!("[API] GET /api/tasks"))
                .level(Level::Info)
                .build(),
        );
        assert_eq!(line, "INFO  [API] GET /api/tasks");
    }
}
