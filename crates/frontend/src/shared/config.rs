use contracts::console::{API_ROOT, DEFAULT_SUB_PATH, HISTORY_TITLE};
use serde::Deserialize;
use std::time::Duration;

use crate::navigation::{RetryPolicy, DEFAULT_RETRY_INTERVAL};

/// Console settings. Every field has a default; the page's query string can
/// override them, e.g. `index.html?retry_ms=1000&retry_max=10`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Root of the REST API, relative to the console page
    pub api_root: String,
    /// Delay between two page catalog requests
    pub retry_ms: u64,
    /// Give up after this many catalog requests; unset retries forever
    pub retry_max: Option<u32>,
    /// Sub-path loaded when the location or the navigation bar names none
    pub default_sub_path: String,
    pub history_title: String,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            api_root: API_ROOT.to_string(),
            retry_ms: DEFAULT_RETRY_INTERVAL.as_millis() as u64,
            retry_max: None,
            default_sub_path: DEFAULT_SUB_PATH.to_string(),
            history_title: HISTORY_TITLE.to_string(),
        }
    }
}

impl ConsoleConfig {
    /// Parses overrides from a location search string (leading `?` allowed).
    /// Falls back to defaults when the query cannot be parsed.
    pub fn from_query(search: &str) -> Self {
        let query = search.trim_start_matches('?');
        if query.is_empty() {
            return Self::default();
        }
        match serde_qs::from_str::<Self>(query) {
            Ok(mut config) => {
                if config.default_sub_path.is_empty() {
                    config.default_sub_path = DEFAULT_SUB_PATH.to_string();
                }
                config
            }
            Err(e) => {
                log::warn!("ignoring console settings in query string: {}", e);
                Self::default()
            }
        }
    }

    /// Reads overrides from `window.location.search`.
    pub fn from_location() -> Self {
        let search = web_sys::window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        Self::from_query(&search)
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        let policy = RetryPolicy::fixed(Duration::from_millis(self.retry_ms));
        match self.retry_max {
            Some(max) => policy.with_max_attempts(max),
            None => policy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ConsoleConfig::from_query("");
        assert_eq!(config.api_root, "api/v1");
        assert_eq!(config.retry_ms, 5000);
        assert_eq!(config.retry_max, None);
        assert_eq!(config.default_sub_path, "content");
        assert_eq!(config.history_title, "Pelix Web Console");
        assert_eq!(config.retry_policy(), RetryPolicy::default());
    }

    #[test]
    fn test_query_overrides() {
        let config = ConsoleConfig::from_query("?retry_ms=250&retry_max=4&unrelated=1");
        assert_eq!(config.retry_ms, 250);
        assert_eq!(config.retry_max, Some(4));
        assert_eq!(config.api_root, "api/v1");

        let policy = config.retry_policy();
        assert_eq!(policy.interval(), Duration::from_millis(250));
        assert_eq!(policy.next_delay(4), None);
    }

    #[test]
    fn test_query_overrides_default_sub_path() {
        let config = ConsoleConfig::from_query("?default_sub_path=summary");
        assert_eq!(config.default_sub_path, "summary");
        assert_eq!(config.retry_ms, 5000);

        let config = ConsoleConfig::from_query("default_sub_path=");
        assert_eq!(config.default_sub_path, "content");
    }

    #[test]
    fn test_invalid_query_falls_back() {
        let config = ConsoleConfig::from_query("retry_ms=soon");
        assert_eq!(config, ConsoleConfig::default());
    }
}
