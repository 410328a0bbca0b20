//! Client configuration
//!
//! All configuration can be overridden through environment variables:
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | CAFE_API_URL | http://localhost:3000 | Order/menu API base URL |
//! | CAFE_IP_LOOKUP_URL | https://api.ipify.org?format=json | Public address lookup service |
//! | CAFE_WIFI_PREFIXES | (empty) | Comma-separated allowed address prefixes |
//! | CAFE_MAX_TABLE | 30 | Highest valid table number |
//! | CAFE_REQUEST_TIMEOUT_SECS | 30 | Order submission timeout |
//! | CAFE_MENU_REFRESH_SECS | (disabled) | Menu revalidation interval |

use crate::RetryPolicy;
use std::time::Duration;

/// Client configuration for the café ordering API
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API base URL (e.g., "http://localhost:3000")
    pub base_url: String,

    /// Public address lookup service used by the access gate
    pub lookup_url: String,

    /// Address prefixes identifying the café network
    pub allowed_prefixes: Vec<String>,

    /// Highest valid table number (tables are 1..=max_table)
    pub max_table: i64,

    /// Hard deadline for order create/update requests
    pub timeout: Duration,

    /// Menu revalidation interval; None disables periodic refresh
    pub menu_refresh: Option<Duration>,

    /// Retry policy for the waiter submission flow
    pub retry: RetryPolicy,
}

impl ClientConfig {
    /// Create a new configuration with defaults
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            lookup_url: "https://api.ipify.org?format=json".to_string(),
            allowed_prefixes: Vec::new(),
            max_table: 30,
            timeout: Duration::from_secs(30),
            menu_refresh: None,
            retry: RetryPolicy::default(),
        }
    }

    /// Load configuration from environment variables
    ///
    /// Reads a `.env` file first if one is present. Unset variables fall
    /// back to defaults.
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        let base_url = std::env::var("CAFE_API_URL")
            .unwrap_or_else(|_| "http://localhost:3000".to_string());
        let mut config = Self::new(base_url.trim_end_matches('/').to_string());

        if let Ok(url) = std::env::var("CAFE_IP_LOOKUP_URL") {
            config.lookup_url = url;
        }
        if let Ok(prefixes) = std::env::var("CAFE_WIFI_PREFIXES") {
            config.allowed_prefixes = prefixes
                .split(',')
                .map(|p| p.trim().to_string())
                .filter(|p| !p.is_empty())
                .collect();
        }
        if let Some(max_table) = std::env::var("CAFE_MAX_TABLE")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            config.max_table = max_table;
        }
        if let Some(secs) = std::env::var("CAFE_REQUEST_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            config.timeout = Duration::from_secs(secs);
        }
        config.menu_refresh = std::env::var("CAFE_MENU_REFRESH_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .map(Duration::from_secs);

        config
    }

    /// Set the public address lookup URL
    pub fn with_lookup_url(mut self, url: impl Into<String>) -> Self {
        self.lookup_url = url.into();
        self
    }

    /// Set the allowed address prefixes
    pub fn with_allowed_prefixes<I, S>(mut self, prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_prefixes = prefixes.into_iter().map(Into::into).collect();
        self
    }

    /// Set the highest valid table number
    pub fn with_max_table(mut self, max_table: i64) -> Self {
        self.max_table = max_table;
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the menu revalidation interval
    pub fn with_menu_refresh(mut self, interval: Duration) -> Self {
        self.menu_refresh = Some(interval);
        self
    }

    /// Set the waiter retry policy
    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Create an HTTP client from this configuration
    pub fn build_http_client(&self) -> crate::HttpClient {
        crate::HttpClient::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:3000")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.max_table, 30);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.menu_refresh.is_none());
        assert!(config.allowed_prefixes.is_empty());
    }

    #[test]
    fn test_builders() {
        let config = ClientConfig::new("http://cafe.local")
            .with_allowed_prefixes(["58.84", "2402:e280"])
            .with_max_table(12)
            .with_timeout(Duration::from_secs(5));
        assert_eq!(config.base_url, "http://cafe.local");
        assert_eq!(config.allowed_prefixes, vec!["58.84", "2402:e280"]);
        assert_eq!(config.max_table, 12);
        assert_eq!(config.timeout, Duration::from_secs(5));
    }
}
