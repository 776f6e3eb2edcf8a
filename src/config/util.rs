//! Configuration utility functions.

use crate::config::{ConfigDiagnostics, FieldPath};
use std::path::{Path, PathBuf};

/// How the site generator will resolve a `link` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    /// Route inside the site (starts with `/`). Whether it maps to an
    /// existing content document is the generator's concern, not ours.
    Internal,
    /// Absolute http/https URL pointing outside the site.
    External,
}

/// Classify a link value, rejecting anything the generator cannot resolve.
///
/// # Examples
/// ```ignore
/// classify_link("/guide/intro")             -> Ok(Internal)
/// classify_link("https://github.com/x/y")   -> Ok(External)
/// classify_link("")                         -> Err(..)
/// classify_link("guide/intro")              -> Err(..)  (relative)
/// classify_link("ftp://example.com")        -> Err(..)  (scheme)
/// ```
pub fn classify_link(link: &str) -> Result<LinkKind, String> {
    if link.is_empty() {
        return Err("link is empty".to_string());
    }

    if link.starts_with('/') {
        return Ok(LinkKind::Internal);
    }

    match url::Url::parse(link) {
        Ok(parsed) => {
            if !matches!(parsed.scheme(), "http" | "https") {
                return Err(format!(
                    "scheme '{}' not supported, must be http or https",
                    parsed.scheme()
                ));
            }
            if parsed.host_str().is_none() {
                return Err("URL must have a valid host".to_string());
            }
            Ok(LinkKind::External)
        }
        Err(_) => Err(format!(
            "'{link}' is neither an internal route nor an absolute URL"
        )),
    }
}

/// Validate a link field, reporting classification failures as diagnostics.
pub fn validate_link(link: &str, field: FieldPath, diag: &mut ConfigDiagnostics) {
    if let Err(message) = classify_link(link) {
        diag.error_with_hint(
            field,
            message,
            "internal routes start with '/', external links with https://",
        );
    }
}

/// Find config file by searching upward from current directory
///
/// Starts from cwd and walks up parent directories until finding `config_name`
/// Returns the absolute path to the config file if found
///
/// # Example
/// ```text
/// /home/user/site/docs/guide/   ← cwd
/// /home/user/site/folio.toml    ← found!
/// ```
pub fn find_config_file(config_name: &Path) -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;

    // First check if config_name is an absolute path or exists in cwd
    if config_name.is_absolute() && config_name.exists() {
        return Some(config_name.to_path_buf());
    }

    // Walk up from cwd looking for config file
    let mut current = cwd.as_path();
    loop {
        let candidate = current.join(config_name);
        if candidate.exists() {
            return Some(candidate);
        }

        // Move to parent directory
        match current.parent() {
            Some(parent) => current = parent,
            None => return None, // Reached filesystem root
        }
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_internal_links() {
        assert_eq!(classify_link("/"), Ok(LinkKind::Internal));
        assert_eq!(classify_link("/guide/intro"), Ok(LinkKind::Internal));
        assert_eq!(classify_link("/fp/chapter-1.html"), Ok(LinkKind::Internal));
    }

    #[test]
    fn test_classify_external_links() {
        assert_eq!(
            classify_link("https://github.com/user/repo"),
            Ok(LinkKind::External)
        );
        assert_eq!(
            classify_link("http://localhost:8080/preview"),
            Ok(LinkKind::External)
        );
        // Query strings and fragments are fine
        assert_eq!(
            classify_link("https://example.com/a?b=1#c"),
            Ok(LinkKind::External)
        );
    }

    #[test]
    fn test_classify_rejects_empty() {
        assert!(classify_link("").is_err());
    }

    #[test]
    fn test_classify_rejects_relative() {
        // Relative routes are ambiguous once the site is served under a
        // base prefix, so they are rejected outright
        assert!(classify_link("guide/intro").is_err());
        assert!(classify_link("./intro").is_err());
    }

    #[test]
    fn test_classify_rejects_other_schemes() {
        assert!(classify_link("ftp://example.com/file").is_err());
        assert!(classify_link("mailto:someone@example.com").is_err());
    }

    #[test]
    fn test_validate_link_reports_diagnostic() {
        let mut diag = ConfigDiagnostics::new();
        validate_link("", FieldPath::new("theme.nav[0].link"), &mut diag);
        assert_eq!(diag.len(), 1);
        assert_eq!(diag.errors()[0].field.as_str(), "theme.nav[0].link");

        let mut diag = ConfigDiagnostics::new();
        validate_link("/ok", FieldPath::new("theme.nav[0].link"), &mut diag);
        assert!(diag.is_empty());
    }

    #[test]
    fn test_find_config_file_upward() {
        use tempfile::TempDir;

        let temp = TempDir::new().unwrap();
        let config = temp.path().join("folio.toml");
        std::fs::write(&config, "[site]\ntitle = \"t\"").unwrap();

        // Absolute path short-circuits the upward walk
        assert_eq!(find_config_file(&config), Some(config));
    }
}
