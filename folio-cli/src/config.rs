//! CLI Configuration

use std::time::Duration;

use clap::Args;
use folio_core::ContentConfig;

/// Connection options shared by every command.
///
/// Anything not given here falls back to the `FOLIO_*` environment
/// variables, then to the library defaults.
#[derive(Args, Debug, Clone, Default)]
pub struct CliConfig {
    /// WordPress site root; derives both endpoints
    #[arg(long, global = true, env = "FOLIO_SITE_URL")]
    pub site: Option<String>,

    /// GraphQL endpoint (overrides --site)
    #[arg(long, global = true)]
    pub graphql_url: Option<String>,

    /// REST API base (overrides --site)
    #[arg(long, global = true)]
    pub rest_url: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long, global = true)]
    pub timeout_secs: Option<u64>,

    /// Largest accepted --limit
    #[arg(long, global = true)]
    pub max_limit: Option<u32>,

    /// Serve bundled content only
    #[arg(long, global = true)]
    pub offline: bool,
}

impl CliConfig {
    /// Resolves flags over environment over defaults.
    pub fn content_config(&self) -> ContentConfig {
        self.apply(ContentConfig::from_env())
    }

    fn apply(&self, mut config: ContentConfig) -> ContentConfig {
        if let Some(site) = &self.site {
            let derived = ContentConfig::for_site(site);
            config = config.with_endpoints(derived.graphql_url, derived.rest_url);
        }
        if let Some(url) = &self.graphql_url {
            config.graphql_url = url.clone();
        }
        if let Some(url) = &self.rest_url {
            config.rest_url = url.clone();
        }
        if let Some(secs) = self.timeout_secs {
            config = config.with_timeout(Duration::from_secs(secs));
        }
        if let Some(max) = self.max_limit {
            config.max_limit = max;
        }
        if self.offline {
            config = config.without_remote();
        }
        config
    }
}
