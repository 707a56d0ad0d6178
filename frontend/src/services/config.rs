use log::LevelFilter;
use shared::NewBillConfig;
use std::str::FromStr;

/// Build-time configuration of the front-end.
///
/// - `BILLED_STORE_URL`: document store base URL. Unset or empty runs the
///   app against the in-memory store seeded with demo bills.
/// - `BILLED_LOG_LEVEL`: `error` to `trace`, defaults to `info`.
/// - `BILLED_REQUIRE_UPLOAD`: `true` refuses submissions before the proof upload resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub store_url: Option<String>,
    pub log_level: LevelFilter,
    pub new_bill: NewBillConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("BILLED_STORE_URL"),
            option_env!("BILLED_LOG_LEVEL"),
            option_env!("BILLED_REQUIRE_UPLOAD"),
        )
    }

    pub fn from_values(
        store_url: Option<&str>,
        log_level: Option<&str>,
        require_upload: Option<&str>,
    ) -> Self {
        let store_url = store_url
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty());

        let log_level = log_level
            .and_then(|level| LevelFilter::from_str(level.trim()).ok())
            .unwrap_or(LevelFilter::Info);

        let new_bill = NewBillConfig {
            require_upload_before_submit: require_upload
                .map(|value| {
                    matches!(value.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes")
                })
                .unwrap_or(false),
            ..NewBillConfig::default()
        };

        Self { store_url, log_level, new_bill }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_defaults() {
        let config = AppConfig::from_values(None, None, None);
        assert_eq!(config.store_url, None);
        assert_eq!(config.log_level, LevelFilter::Info);
        assert_eq!(config.new_bill, NewBillConfig::default());
    }

    #[wasm_bindgen_test]
    fn test_store_url_is_normalized() {
        let config = AppConfig::from_values(Some(" https://store.billed.test/api/ "), None, None);
        assert_eq!(config.store_url.as_deref(), Some("https://store.billed.test/api"));

        assert_eq!(AppConfig::from_values(Some("  "), None, None).store_url, None);
    }

    #[wasm_bindgen_test]
    fn test_log_level_and_upload_guard() {
        let config = AppConfig::from_values(None, Some("debug"), Some("TRUE"));
        assert_eq!(config.log_level, LevelFilter::Debug);
        assert!(config.new_bill.require_upload_before_submit);

        let config = AppConfig::from_values(None, Some("loud"), Some("no"));
        assert_eq!(config.log_level, LevelFilter::Info);
        assert!(!config.new_bill.require_upload_before_submit);
    }
}
