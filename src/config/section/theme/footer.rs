//! `[theme.footer]` configuration.

use serde::{Deserialize, Serialize};

/// Footer text. The whole section is optional; when absent the theme
/// renders no footer at all.
///
/// ```toml
/// [theme.footer]
/// message = "Released under the MIT License."
/// copyright = "Copyright © 2026"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FooterConfig {
    /// Line shown above the copyright.
    pub message: String,

    /// Copyright notice.
    pub copyright: String,
}

#[cfg(test)]
mod tests {
    use crate::config::test_parse_config;

    #[test]
    fn test_footer_absent_by_default() {
        let config = test_parse_config("");
        assert!(config.theme.footer.is_none());
    }

    #[test]
    fn test_footer_parsed() {
        let config = test_parse_config(
            "[theme.footer]\nmessage = \"Released under MIT\"\ncopyright = \"© 2026\"",
        );
        let footer = config.theme.footer.unwrap();
        assert_eq!(footer.message, "Released under MIT");
        assert_eq!(footer.copyright, "© 2026");
    }
}
