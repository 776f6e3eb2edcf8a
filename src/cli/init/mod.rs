//! Init command implementation.
//!
//! Scaffolds a new documentation site: content directory, commented
//! `folio.toml`, and ignore files. Never touches existing files except
//! the config itself, which must not already exist.

mod config;

pub use config::{CONFIG_FILE, generate_config_template, write_config, write_ignore_files};

use crate::config::SiteConfig;
use crate::log;
use anyhow::{Result, bail};
use std::fs;

/// Directory where markdown chapters live.
const CONTENT_DIR: &str = "docs";

/// Create a new site at the configured root.
pub fn new_site(config: &SiteConfig) -> Result<()> {
    let root = config.get_root();

    if config.config_path.exists() {
        bail!(
            "'{}' already exists, refusing to overwrite",
            config.config_path.display()
        );
    }

    fs::create_dir_all(config.root_join(CONTENT_DIR))?;
    write_config(root)?;
    write_ignore_files(root)?;

    log!("init"; "created new site at {}", root.display());
    log!("init"; "edit {} and put markdown chapters under {}/", CONFIG_FILE, CONTENT_DIR);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use tempfile::TempDir;

    fn config_at(root: &Path) -> SiteConfig {
        let mut config = SiteConfig::default();
        config.set_root(root);
        config.config_path = root.join(CONFIG_FILE);
        config
    }

    #[test]
    fn test_new_site_scaffold() {
        let temp = TempDir::new().unwrap();
        let config = config_at(temp.path());

        new_site(&config).unwrap();

        assert!(temp.path().join("folio.toml").exists());
        assert!(temp.path().join("docs").is_dir());
        assert!(temp.path().join(".gitignore").exists());
    }

    #[test]
    fn test_new_site_refuses_existing_config() {
        let temp = TempDir::new().unwrap();
        let config = config_at(temp.path());

        fs::write(temp.path().join(CONFIG_FILE), "[site]").unwrap();
        assert!(new_site(&config).is_err());
    }
}
