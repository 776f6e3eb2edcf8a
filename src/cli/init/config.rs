//! Configuration file generation.
//!
//! Creates folio.toml and ignore files for new sites.

use anyhow::{Context, Result};
use std::{fs, path::Path};

/// Default config filename
pub const CONFIG_FILE: &str = "folio.toml";

/// Files to write ignore patterns to
const IGNORE_FILES: &[&str] = &[".gitignore", ".ignore"];

/// Generate folio.toml content with comments
pub fn generate_config_template() -> String {
    format!(
        r##"# Folio configuration file (v{version})
# https://github.com/folio-docs/folio

[site]
base = "/"                    # path prefix the site is served under
title = "My Documentation"
description = ""
lang = "en"

# Extra head elements, e.g. a favicon:
# [[site.head]]
# tag = "link"
# attrs = {{ rel = "icon", href = "/favicon.ico" }}

[theme]
# logo = "logo.svg"

[[theme.nav]]
text = "Home"
link = "/"

[[theme.sidebar]]
text = "Getting Started"
items = [
    {{ text = "Introduction", link = "/intro" }},
]

# Icon links shown in the header:
# [[theme.social]]
# icon = "github"
# link = "https://github.com/user/repo"

[theme.footer]
message = ""
copyright = ""

[theme.search]
provider = "local"            # "local" or "algolia"
"##,
        version = env!("CARGO_PKG_VERSION")
    )
}

/// Write default folio.toml configuration
pub fn write_config(root: &Path) -> Result<()> {
    let content = generate_config_template();

    let path = root.join(CONFIG_FILE);
    fs::write(&path, content)
        .with_context(|| format!("Failed to write config file '{}'", path.display()))?;

    Ok(())
}

/// Write .gitignore and .ignore files with standard patterns
pub fn write_ignore_files(root: &Path) -> Result<()> {
    let patterns = ["/dist/", "/.folio/", ".DS_Store"];
    let content = patterns.join("\n");

    for filename in IGNORE_FILES {
        let path = root.join(filename);
        // Only create if doesn't exist (don't overwrite user's ignore files)
        if !path.exists() {
            fs::write(&path, &content)
                .with_context(|| format!("Failed to write '{}'", path.display()))?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use tempfile::TempDir;

    #[test]
    fn test_template_parses_cleanly() {
        let template = generate_config_template();
        let (config, ignored) = SiteConfig::parse_with_ignored(&template).unwrap();

        assert!(
            ignored.is_empty(),
            "template has unknown fields: {:?}",
            ignored
        );
        assert!(config.validate().is_ok());
        assert_eq!(config.site.base, "/");
        assert_eq!(config.theme.nav.len(), 1);
    }

    #[test]
    fn test_write_config() {
        let temp = TempDir::new().unwrap();
        write_config(temp.path()).unwrap();

        let config_path = temp.path().join("folio.toml");
        assert!(config_path.exists());

        let content = fs::read_to_string(&config_path).unwrap();
        assert!(content.contains("[site]"));
        assert!(content.contains("[theme.search]"));
    }

    #[test]
    fn test_write_ignore_files() {
        let temp = TempDir::new().unwrap();
        write_ignore_files(temp.path()).unwrap();

        let gitignore = temp.path().join(".gitignore");
        assert!(gitignore.exists());

        let content = fs::read_to_string(&gitignore).unwrap();
        assert!(content.contains("/dist/"));
        assert!(content.contains("/.folio/"));
    }

    #[test]
    fn test_ignore_files_not_overwritten() {
        let temp = TempDir::new().unwrap();
        let gitignore = temp.path().join(".gitignore");
        fs::write(&gitignore, "custom content").unwrap();

        write_ignore_files(temp.path()).unwrap();

        let content = fs::read_to_string(&gitignore).unwrap();
        assert_eq!(content, "custom content");
    }
}
