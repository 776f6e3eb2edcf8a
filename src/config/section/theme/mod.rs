//! `[theme]` section configuration.
//!
//! Everything the default theme renders around the page content: logo,
//! header navigation, sidebar, social links, footer, and search.
//!
//! # Example
//!
//! ```toml
//! [theme]
//! logo = "logo.svg"
//!
//! [[theme.nav]]
//! text = "主页"
//! link = "/"
//!
//! [[theme.sidebar]]
//! text = "Getting Started"
//! items = [{ text = "Introduction", link = "/intro" }]
//!
//! [[theme.social]]
//! icon = "github"
//! link = "https://github.com/user/fp-guide"
//!
//! [theme.footer]
//! message = "Released under the MIT License."
//! copyright = "Copyright © 2026"
//!
//! [theme.search]
//! provider = "local"
//! ```

mod footer;
mod nav;
mod search;
mod sidebar;
mod social;

pub use footer::FooterConfig;
pub use nav::NavItem;
pub use search::{SearchConfig, SearchProvider};
pub use sidebar::{SidebarGroup, SidebarItem};
pub use social::SocialLink;

use crate::config::ConfigDiagnostics;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Theme section: nav, sidebar, social links, footer, and search.
///
/// Array ordering is display ordering throughout; nothing here is ever
/// sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeSectionConfig {
    /// Logo path, relative to the site root.
    pub logo: Option<PathBuf>,

    /// Header navigation links.
    pub nav: Vec<NavItem>,

    /// Sidebar groups.
    pub sidebar: Vec<SidebarGroup>,

    /// Social icon links.
    pub social: Vec<SocialLink>,

    /// Footer text. Absent = no footer.
    pub footer: Option<FooterConfig>,

    /// Search settings.
    pub search: SearchConfig,
}

impl ThemeSectionConfig {
    /// Validate all theme entries, collecting every problem at once.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        for (i, item) in self.nav.iter().enumerate() {
            item.validate(i, diag);
        }
        for (i, group) in self.sidebar.iter().enumerate() {
            group.validate(i, diag);
        }
        for (i, social) in self.social.iter().enumerate() {
            social.validate(i, diag);
        }
    }

    /// Total number of sidebar items across all groups.
    pub fn sidebar_item_count(&self) -> usize {
        self.sidebar.iter().map(|g| g.items.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_theme_defaults() {
        let config = test_parse_config("");
        let theme = &config.theme;

        assert!(theme.logo.is_none());
        assert!(theme.nav.is_empty());
        assert!(theme.sidebar.is_empty());
        assert!(theme.social.is_empty());
        assert!(theme.footer.is_none());
        assert_eq!(theme.search.provider, SearchProvider::Local);
    }

    #[test]
    fn test_validate_collects_all_errors() {
        let theme = ThemeSectionConfig {
            nav: vec![NavItem {
                text: "Broken".into(),
                link: String::new(),
            }],
            social: vec![SocialLink {
                icon: String::new(),
                link: "/internal".into(),
            }],
            ..Default::default()
        };

        let mut diag = ConfigDiagnostics::new();
        theme.validate(&mut diag);
        // nav link empty + social icon empty + social link internal
        assert_eq!(diag.len(), 3);
    }

    #[test]
    fn test_sidebar_item_count() {
        let config = test_parse_config(
            r#"[[theme.sidebar]]
items = [
    { text = "A", link = "/a" },
    { text = "B", link = "/b" },
]

[[theme.sidebar]]
items = [{ text = "C", link = "/c" }]
"#,
        );
        assert_eq!(config.theme.sidebar_item_count(), 3);
    }

    #[test]
    fn test_logo_path() {
        let config = test_parse_config("[theme]\nlogo = \"images/logo.svg\"");
        assert_eq!(config.theme.logo, Some(PathBuf::from("images/logo.svg")));
    }
}
