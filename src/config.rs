//! Application Configuration
//!
//! Build-time settings with a runtime override from the host page:
//! - `CHECKLIST_API_URL` / `<meta name="checklist-api-url" content="...">`
//! - `CHECKLIST_LOG_LEVEL` (`error`, `warn`, `info`, `debug`, `trace`, `off`)

use std::str::FromStr;

use log::LevelFilter;

const DEFAULT_API_BASE_URL: &str = "/api";
const API_URL_META: &str = "checklist-api-url";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Base URL of the task API, without trailing slash
    pub api_base_url: String,
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_parts(None, None)
    }
}

impl AppConfig {
    /// Build-time values, then the page's meta tag if present
    pub fn load() -> Self {
        let mut config = Self::from_parts(option_env!("CHECKLIST_API_URL"), option_env!("CHECKLIST_LOG_LEVEL"));
        if let Some(url) = meta_api_url() {
            config.api_base_url = normalize_base_url(&url);
        }
        config
    }

    pub fn from_parts(api_url: Option<&str>, log_level: Option<&str>) -> Self {
        Self {
            api_base_url: normalize_base_url(api_url.unwrap_or(DEFAULT_API_BASE_URL)),
            log_level: log_level
                .and_then(|level| LevelFilter::from_str(level.trim()).ok())
                .unwrap_or(LevelFilter::Info),
        }
    }
}

fn normalize_base_url(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return DEFAULT_API_BASE_URL.to_string();
    }
    trimmed.trim_end_matches('/').to_string()
}

fn meta_api_url() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let selector = format!("meta[name=\"{}\"]", API_URL_META);
    let meta = document.query_selector(&selector).ok()??;
    meta.get_attribute("content").filter(|url| !url.trim().is_empty())
}
