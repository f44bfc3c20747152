use anyhow::{Context, Result};
use area_kit_core::catalog::builtin_site;
use area_kit_core::config::to_site_toml;
use std::fs;
use std::path::{Path, PathBuf};

const SITE_TOML: &str = "site.toml";

const HEADER: &str = r#"# area-kit site definition
#
# [business] fields are interpolated into every page. `state`, `metro` and
# `region` are optional.
#
# Each [[location]] becomes /locations/<slug>/. A city listed again under a
# different county is published under the first county only; run
# `area-kit validate --config site.toml` to list such entries.

"#;

/// Write the built-in site definition to `<path>/site.toml`
pub fn run(path: PathBuf, force: bool) -> Result<()> {
    let target = write_site_toml(&path, force)?;

    println!("✅ Wrote {}", target.display());
    println!();
    println!("Next steps:");
    println!("   1. Edit {} with your business and locations", target.display());
    println!("   2. area-kit validate --config {}", target.display());
    println!("   3. area-kit build --config {} --output <dir>", target.display());

    Ok(())
}

fn write_site_toml(dir: &Path, force: bool) -> Result<PathBuf> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory {}", dir.display()))?;

    let target = dir.join(SITE_TOML);
    if target.exists() && !force {
        anyhow::bail!(
            "{} already exists\nUse --force to overwrite it",
            target.display()
        );
    }

    let body = to_site_toml(&builtin_site()).context("Failed to serialize site definition")?;
    fs::write(&target, format!("{}{}", HEADER, body))
        .with_context(|| format!("Failed to write {}", target.display()))?;

    Ok(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use area_kit_core::parse_site_toml;
    use tempfile::TempDir;

    #[test]
    fn test_write_site_toml_parses_back() {
        let dir = TempDir::new().unwrap();
        let target = write_site_toml(dir.path(), false).unwrap();

        let site = parse_site_toml(&target).unwrap();
        assert_eq!(site, builtin_site());
    }

    #[test]
    fn test_write_site_toml_creates_directory() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("a").join("b");
        let target = write_site_toml(&nested, false).unwrap();
        assert!(target.is_file());
    }

    #[test]
    fn test_write_site_toml_refuses_overwrite() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(SITE_TOML), "keep me").unwrap();

        let result = write_site_toml(dir.path(), false);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("--force"));
        assert_eq!(
            fs::read_to_string(dir.path().join(SITE_TOML)).unwrap(),
            "keep me"
        );
    }

    #[test]
    fn test_write_site_toml_force_overwrites() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(SITE_TOML), "old").unwrap();

        let target = write_site_toml(dir.path(), true).unwrap();
        let content = fs::read_to_string(target).unwrap();
        assert!(content.starts_with("# area-kit site definition"));
        assert!(content.contains("[business]"));
        assert!(content.contains("[[location]]"));
    }
}
