//! `[[theme.nav]]` entries - top-level navigation links in the page header.
//!
//! # Example
//!
//! ```toml
//! [[theme.nav]]
//! text = "主页"
//! link = "/"
//!
//! [[theme.nav]]
//! text = "GitHub"
//! link = "https://github.com/user/fp-guide"
//! ```

use crate::config::util::validate_link;
use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

/// A single header navigation link. Entries render in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavItem {
    /// Visible label.
    pub text: String,

    /// Internal route (`/...`) or absolute URL.
    pub link: String,
}

impl NavItem {
    /// Validate one nav entry at position `index`.
    pub fn validate(&self, index: usize, diag: &mut ConfigDiagnostics) {
        if self.text.is_empty() {
            diag.error(
                FieldPath::indexed("theme.nav", index, "text"),
                "nav entry has no label",
            );
        }
        validate_link(
            &self.link,
            FieldPath::indexed("theme.nav", index, "link"),
            diag,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_nav_defaults_empty() {
        let config = test_parse_config("");
        assert!(config.theme.nav.is_empty());
    }

    #[test]
    fn test_nav_order_preserved() {
        let config = test_parse_config(
            r#"[[theme.nav]]
text = "Guide"
link = "/guide"

[[theme.nav]]
text = "Reference"
link = "/reference"

[[theme.nav]]
text = "GitHub"
link = "https://github.com/user/repo"
"#,
        );
        let labels: Vec<_> = config.theme.nav.iter().map(|n| n.text.as_str()).collect();
        assert_eq!(labels, ["Guide", "Reference", "GitHub"]);
    }

    #[test]
    fn test_nav_empty_link_is_error() {
        let item = NavItem {
            text: "Broken".into(),
            link: String::new(),
        };
        let mut diag = ConfigDiagnostics::new();
        item.validate(3, &mut diag);
        assert_eq!(diag.len(), 1);
        assert_eq!(diag.errors()[0].field.as_str(), "theme.nav[3].link");
    }

    #[test]
    fn test_nav_relative_link_is_error() {
        let item = NavItem {
            text: "Broken".into(),
            link: "guide/intro".into(),
        };
        let mut diag = ConfigDiagnostics::new();
        item.validate(0, &mut diag);
        assert_eq!(diag.len(), 1);
    }
}
