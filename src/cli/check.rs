//! Check command implementation.
//!
//! Validation itself happens during config loading; by the time this runs
//! the configuration is known-good, so the command reports what the
//! generator will see.

use crate::config::{SearchProvider, SiteConfig};
use crate::{debug, log};
use anyhow::Result;

/// Report a summary of the resolved configuration.
pub fn check_site(config: &SiteConfig) -> Result<()> {
    log!(
        "check";
        "configuration ok: {}",
        config.root_relative(&config.config_path).display()
    );
    log!(
        "check";
        "site '{}' served under '{}'",
        config.site.title,
        config.site.base
    );
    log!(
        "check";
        "{} nav {}, {} sidebar {} ({} {}), {} social {}",
        config.theme.nav.len(),
        plural(config.theme.nav.len(), "item"),
        config.theme.sidebar.len(),
        plural(config.theme.sidebar.len(), "group"),
        config.theme.sidebar_item_count(),
        plural(config.theme.sidebar_item_count(), "item"),
        config.theme.social.len(),
        plural(config.theme.social.len(), "link"),
    );

    if config.theme.search.provider == SearchProvider::Algolia {
        debug!("check"; "search delegated to Algolia DocSearch");
    }

    Ok(())
}

/// Pick singular or plural form for a count.
fn plural(count: usize, word: &str) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plural() {
        assert_eq!(plural(1, "item"), "item");
        assert_eq!(plural(0, "item"), "items");
        assert_eq!(plural(2, "group"), "groups");
    }

    #[test]
    fn test_check_on_valid_config() {
        let config = crate::config::test_parse_config(
            "[[theme.nav]]\ntext = \"Home\"\nlink = \"/\"",
        );
        assert!(check_site(&config).is_ok());
    }
}
