pub mod build;
pub mod init;
pub mod validate;

use anyhow::{Context, Result};
use area_kit_core::{Site, catalog, parse_site_toml};
use std::path::Path;

/// Load site.toml when given, otherwise the compiled-in site
pub fn load_site(config: Option<&Path>) -> Result<Site> {
    match config {
        Some(path) => {
            if !path.exists() {
                anyhow::bail!(
                    "Config file does not exist: {}\nRun 'area-kit init <dir>' to create one",
                    path.display()
                );
            }
            parse_site_toml(path).with_context(|| format!("Failed to parse {}", path.display()))
        }
        None => Ok(catalog::builtin_site()),
    }
}
