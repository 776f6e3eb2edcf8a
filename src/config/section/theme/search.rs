//! `[theme.search]` configuration.

use serde::{Deserialize, Serialize};

/// Search settings. The index itself is built by the search engine the
/// provider names; this only selects which one the theme wires up.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Search backend.
    pub provider: SearchProvider,
}

/// Available search backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchProvider {
    /// Client-side index built at generation time.
    #[default]
    Local,

    /// Hosted Algolia DocSearch.
    Algolia,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_search_defaults_to_local() {
        let config = test_parse_config("");
        assert_eq!(config.theme.search.provider, SearchProvider::Local);
    }

    #[test]
    fn test_algolia_provider() {
        let config = test_parse_config("[theme.search]\nprovider = \"algolia\"");
        assert_eq!(config.theme.search.provider, SearchProvider::Algolia);
    }

    #[test]
    fn test_unknown_provider_rejected() {
        let result = crate::config::SiteConfig::from_str(
            "[site]\ntitle = \"T\"\nbase = \"/\"\n[theme.search]\nprovider = \"bing\"",
        );
        assert!(result.is_err());
    }
}
