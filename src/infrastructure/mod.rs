pub mod http;
pub mod rendering;

/// Browser-backed implementations of the domain logging abstractions
pub mod services {
    use crate::domain::logging::{LogEntry, LogLevel, Logger, TimeProvider};
    use wasm_bindgen::JsValue;

    /// Writes log entries to the devtools console at or above `min_level`
    pub struct ConsoleLogger {
        min_level: LogLevel,
    }

    impl ConsoleLogger {
        pub fn new(min_level: LogLevel) -> Self {
            Self { min_level }
        }
    }

    impl Logger for ConsoleLogger {
        fn log(&self, entry: LogEntry) {
            if entry.level < self.min_level {
                return;
            }
            let line = JsValue::from(entry.format());
            match entry.level {
                LogLevel::Trace | LogLevel::Debug => web_sys::console::debug_1(&line),
                LogLevel::Info => web_sys::console::info_1(&line),
                LogLevel::Warn => web_sys::console::warn_1(&line),
                LogLevel::Error => web_sys::console::error_1(&line),
            }
        }
    }

    /// Wall clock from `Date.now()`, formatted as local `HH:MM:SS.mmm`
    #[derive(Default)]
    pub struct BrowserTimeProvider;

    impl BrowserTimeProvider {
        pub fn new() -> Self {
            Self
        }
    }

    impl TimeProvider for BrowserTimeProvider {
        fn current_timestamp(&self) -> u64 {
            js_sys::Date::now() as u64
        }

        fn format_timestamp(&self, timestamp: u64) -> String {
            let date = js_sys::Date::new(&JsValue::from_f64(timestamp as f64));
            format!(
                "{:02}:{:02}:{:02}.{:03}",
                date.get_hours(),
                date.get_minutes(),
                date.get_seconds(),
                date.get_milliseconds()
            )
        }
    }
}
