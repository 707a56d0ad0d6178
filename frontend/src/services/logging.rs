use log::{Level, LevelFilter, Log, Metadata, Record};

/// `log` backend writing to the browser console, one line per record tagged with its module
pub struct Logger;

static LOGGER: Logger = Logger;

impl Logger {
    /// Install the console logger. A second call keeps the first logger.
    pub fn init(level: LevelFilter) {
        if log::set_logger(&LOGGER).is_ok() {
            log::set_max_level(level);
        }
    }

    fn format(record: &Record) -> String {
        format!("[{}] {}", record.target(), record.args())
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let message = Self::format(record);
        match record.level() {
            Level::Error => gloo::console::error!(message),
            Level::Warn => gloo::console::warn!(message),
            Level::Info => gloo::console::info!(message),
            Level::Debug | Level::Trace => gloo::console::debug!(message),
        }
    }

    fn flush(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_format_tags_target() {
        let message = Logger::format(
            &Record::builder()
                .args(format_args!("Fetched {} bills", 4))
                .target("billed_domain::domain::bills_service")
                .level(Level::Info)
                .build(),
        );
        assert_eq!(message, "[billed_domain::domain::bills_service] Fetched 4 bills");
    }
}
