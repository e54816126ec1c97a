//! Application-level configuration constants and the startup configuration
//! read from the page URL.

use crate::i18n::Language;
use log::debug;
use std::fmt;

// Game behavior
pub const COUNTDOWN_MS: f64 = 2500.0;
pub const MIN_TOUCH_COUNT: usize = 2;
pub const SOLO_MIN_TOUCH_COUNT: usize = 1;
pub const WINNER_ZOOM_MS: f64 = 950.0;

// Shell
pub const APP_VERSION: &str = "4.5";
pub const SERVICE_WORKER_PATH: &str = "/sw.js";

// Query parameter names
pub const LANG_PARAM: &str = "lang";
pub const DEBUG_PARAM: &str = "debug";
pub const SOLO_PARAM: &str = "solo";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    EmptyLanguageTag,
    UnsupportedLanguage(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyLanguageTag => write!(f, "Language tag is empty"),
            ConfigError::UnsupportedLanguage(tag) => {
                write!(f, "Language '{}' is not supported", tag)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Settings read once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AppConfig {
    pub language: Language,
    pub debug: bool,
    pub solo: bool,
}

impl AppConfig {
    /// Build the configuration from a URL query string (with or without the
    /// leading `?`) and the device locale, e.g. `navigator.language`.
    pub fn from_query(query: &str, device_locale: Option<&str>) -> Self {
        let language = resolve_language(query_param(query, LANG_PARAM), device_locale);
        Self {
            language,
            debug: query_param(query, DEBUG_PARAM) == Some("true"),
            solo: query_param(query, SOLO_PARAM) == Some("true"),
        }
    }

    /// Minimum number of simultaneous touches needed to start a countdown.
    pub fn min_touch_count(&self) -> usize {
        if self.solo {
            SOLO_MIN_TOUCH_COUNT
        } else {
            MIN_TOUCH_COUNT
        }
    }
}

/// Query parameter preferred over device locale, default language last.
pub fn resolve_language(query_lang: Option<&str>, device_locale: Option<&str>) -> Language {
    for (source, tag) in [("query", query_lang), ("device", device_locale)] {
        let Some(tag) = tag else { continue };
        match tag.parse::<Language>() {
            Ok(lang) => return lang,
            Err(e) => debug!("Ignoring {} language: {}", source, e),
        }
    }
    Language::default()
}

/// First value for `key`, matching `URLSearchParams.get`.
fn query_param<'a>(query: &'a str, key: &str) -> Option<&'a str> {
    query
        .trim_start_matches('?')
        .split('&')
        .filter(|pair| !pair.is_empty())
        .find_map(|pair| {
            let (k, v) = pair.split_once('=').unwrap_or((pair, ""));
            (k == key).then_some(v)
        })
}
