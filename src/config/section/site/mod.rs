//! `[site]` section configuration.
//!
//! Contains site identity: base path, title, description, language, and
//! extra head elements.
//!
//! # Example
//!
//! ```toml
//! [site]
//! base = "/fp"
//! title = "函数式编程指南"
//! description = "A guide to functional programming"
//! lang = "zh-Hans"
//!
//! [[site.head]]
//! tag = "link"
//! attrs = { rel = "icon", href = "/favicon.ico" }
//! ```

mod head;

pub use head::HeadTag;

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

/// Site identity handed to the generator as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSectionConfig {
    /// Path prefix the site is served under (e.g. "/" or "/fp").
    pub base: String,

    /// Site title, shown in the header and the document title.
    pub title: String,

    /// Site description, emitted as a meta tag.
    pub description: String,

    /// Language code (e.g., "en", "zh-Hans").
    pub lang: String,

    /// Extra elements injected into the document head.
    pub head: Vec<HeadTag>,
}

/// Field paths for diagnostic messages.
pub struct SiteSectionConfigFields {
    pub base: FieldPath,
    pub title: FieldPath,
    pub description: FieldPath,
    pub lang: FieldPath,
    pub head: FieldPath,
}

impl Default for SiteSectionConfig {
    fn default() -> Self {
        Self {
            base: String::new(),
            title: String::new(),
            description: String::new(),
            lang: "en".into(),
            head: Vec::new(),
        }
    }
}

impl SiteSectionConfig {
    /// Field paths for diagnostic messages.
    pub const FIELDS: SiteSectionConfigFields = SiteSectionConfigFields {
        base: FieldPath::new("site.base"),
        title: FieldPath::new("site.title"),
        description: FieldPath::new("site.description"),
        lang: FieldPath::new("site.lang"),
        head: FieldPath::new("site.head"),
    };

    /// Validate site identity.
    ///
    /// # Checks
    /// - `title` is present and non-empty
    /// - `base` is present and starts with `/`
    /// - every head entry carries a tag name
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.title.is_empty() {
            diag.error_with_hint(
                Self::FIELDS.title,
                "required field is missing or empty",
                "set site.title, e.g.: \"My Guide\"",
            );
        }

        if self.base.is_empty() {
            diag.error_with_hint(
                Self::FIELDS.base,
                "required field is missing or empty",
                "use \"/\" for sites served at the domain root",
            );
        } else if !self.base.starts_with('/') {
            diag.error_with_hint(
                Self::FIELDS.base,
                format!("'{}' must start with '/'", self.base),
                "use a path prefix like \"/fp\"",
            );
        }

        for (i, tag) in self.head.iter().enumerate() {
            if tag.tag.is_empty() {
                diag.error(
                    FieldPath::indexed("site.head", i, "tag"),
                    "head entry is missing a tag name",
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_defaults() {
        let config = SiteSectionConfig::default();
        assert_eq!(config.lang, "en");
        assert!(config.base.is_empty());
        assert!(config.head.is_empty());
    }

    #[test]
    fn test_missing_title_is_error() {
        let mut site = SiteSectionConfig::default();
        site.base = "/".into();

        let mut diag = ConfigDiagnostics::new();
        site.validate(&mut diag);
        assert_eq!(diag.len(), 1);
        assert_eq!(diag.errors()[0].field.as_str(), "site.title");
    }

    #[test]
    fn test_missing_base_is_error() {
        let mut site = SiteSectionConfig::default();
        site.title = "Guide".into();

        let mut diag = ConfigDiagnostics::new();
        site.validate(&mut diag);
        assert_eq!(diag.len(), 1);
        assert_eq!(diag.errors()[0].field.as_str(), "site.base");
    }

    #[test]
    fn test_base_must_start_with_slash() {
        let mut site = SiteSectionConfig::default();
        site.title = "Guide".into();
        site.base = "fp".into();

        let mut diag = ConfigDiagnostics::new();
        site.validate(&mut diag);
        assert_eq!(diag.len(), 1);
        assert!(diag.errors()[0].message.contains("must start with '/'"));
    }

    #[test]
    fn test_head_tag_name_required() {
        let config = test_parse_config("[[site.head]]\nattrs = { rel = \"icon\" }");

        let mut diag = ConfigDiagnostics::new();
        config.site.validate(&mut diag);
        assert!(
            diag.errors()
                .iter()
                .any(|e| e.field.as_str() == "site.head[0].tag")
        );
    }

    #[test]
    fn test_lang_override() {
        let config = crate::config::SiteConfig::from_str(
            "[site]\ntitle = \"T\"\nbase = \"/\"\nlang = \"zh-Hans\"",
        )
        .unwrap();
        assert_eq!(config.site.lang, "zh-Hans");
    }
}
