//! Configuration for content fetching

use std::time::Duration;

/// Configuration for the content fetching system
#[derive(Debug, Clone)]
pub struct ContentConfig {
    /// GraphQL endpoint (e.g., "https://cms.example.com/graphql")
    pub graphql_url: String,

    /// REST API base (e.g., "https://cms.example.com/wp-json/wp/v2")
    pub rest_url: String,

    /// Enable/disable both remote tiers
    pub remote_enabled: bool,

    /// HTTP timeout per request, applied to each tier separately
    pub timeout: Duration,

    /// Largest accepted `limit` parameter
    pub max_limit: u32,

    /// Maximum response body size (bytes)
    pub max_response_size: u64,

    /// User-Agent header sent to the CMS
    pub user_agent: String,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            graphql_url: "http://localhost:8080/graphql".to_string(),
            rest_url: "http://localhost:8080/wp-json/wp/v2".to_string(),
            remote_enabled: true,
            timeout: Duration::from_secs(10),
            max_limit: 50,
            max_response_size: 5 * 1024 * 1024, // 5 MB
            user_agent: format!(
                "Folio/{}",
                option_env!("CARGO_PKG_VERSION").unwrap_or("0.1.0")
            ),
        }
    }
}

impl ContentConfig {
    /// Build from `FOLIO_*` environment variables, defaulting the rest
    ///
    /// Unparseable numeric values are ignored.
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(url) = var("FOLIO_GRAPHQL_URL") {
            config.graphql_url = url;
        }
        if let Some(url) = var("FOLIO_REST_URL") {
            config.rest_url = url;
        }
        if let Some(secs) = var("FOLIO_TIMEOUT_SECS").and_then(|v| v.parse().ok()) {
            config.timeout = Duration::from_secs(secs);
        }
        if let Some(max) = var("FOLIO_MAX_LIMIT").and_then(|v| v.parse().ok()) {
            config.max_limit = max;
        }
        if let Some(flag) = var("FOLIO_OFFLINE") {
            config.remote_enabled = !matches!(flag.as_str(), "1" | "true" | "yes");
        }

        config
    }

    /// Point both tiers at a WordPress site root
    ///
    /// Uses the WPGraphQL route and the core REST namespace.
    pub fn for_site(site_url: &str) -> Self {
        let root = site_url.trim_end_matches('/');
        Self {
            graphql_url: format!("{}/graphql", root),
            rest_url: format!("{}/wp-json/wp/v2", root),
            ..Default::default()
        }
    }

    /// Set explicit endpoints for both tiers
    pub fn with_endpoints(mut self, graphql_url: String, rest_url: String) -> Self {
        self.graphql_url = graphql_url;
        self.rest_url = rest_url;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Disable remote tiers (serve bundled content only)
    pub fn without_remote(mut self) -> Self {
        self.remote_enabled = false;
        self
    }
}
