//! Car service configuration — loaded from environment variables.

use std::time::Duration;

#[derive(Clone, Debug)]
pub struct CarServiceConfig {
    /// Base URL of the client service (e.g. `http://localhost:8081`).
    pub client_service_url: String,
    /// Timeout in seconds for a single client lookup.
    pub client_lookup_timeout_secs: u64,
    /// Overall timeout in seconds for an inbound HTTP request.
    pub request_timeout_secs: u64,
    /// Maximum pooled database connections.
    pub db_max_connections: usize,
    /// Port of the Prometheus scrape endpoint.
    pub metrics_port: u16,
}

impl Default for CarServiceConfig {
    fn default() -> Self {
        Self {
            client_service_url: "http://localhost:8081".to_string(),
            client_lookup_timeout_secs: 5,
            request_timeout_secs: 30,
            db_max_connections: 5,
            metrics_port: 9000,
        }
    }
}

impl CarServiceConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from an arbitrary key lookup. Missing or
    /// unparseable values fall back to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let client_service_url = lookup("CLIENT_SERVICE_URL")
            .filter(|s| !s.is_empty())
            .map(|s| s.trim_end_matches('/').to_string())
            .unwrap_or(defaults.client_service_url);
        let client_lookup_timeout_secs = lookup("CLIENT_LOOKUP_TIMEOUT_SECS")
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.client_lookup_timeout_secs);
        let request_timeout_secs = lookup("REQUEST_TIMEOUT_SECS")
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.request_timeout_secs);
        let db_max_connections = lookup("DB_MAX_CONNECTIONS")
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.db_max_connections);
        let metrics_port = lookup("METRICS_PORT")
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.metrics_port);

        if client_lookup_timeout_secs == 0 {
            tracing::warn!("CLIENT_LOOKUP_TIMEOUT_SECS is 0 -- client lookups will time out immediately");
        }

        Self {
            client_service_url,
            client_lookup_timeout_secs,
            request_timeout_secs,
            db_max_connections,
            metrics_port,
        }
    }

    pub fn client_lookup_timeout(&self) -> Duration {
        Duration::from_secs(self.client_lookup_timeout_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
