use anyhow::{Context, Result};
use area_kit_core::Site;
use area_kit_generator::generate_site;
use area_kit_validator::validate_site;
use chrono::{Local, NaiveDate};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use super::load_site;

/// Build the site into `output`
pub fn run(output: PathBuf, config: Option<PathBuf>) -> Result<()> {
    let site = load_site(config.as_deref())?;

    println!("🔨 Building service-area pages...");
    println!("   Company: {}", site.business.company);
    println!("   Output: {}", output.display());
    println!();

    let count = build_static_site(&site, &output, Local::now().date_naive())?;

    println!();
    println!(
        "✅ Generated {} location pages + index + sitemap + robots.txt",
        count
    );

    Ok(())
}

/// Render `site` as of `today` and write every file under `output`.
///
/// Files are written one at a time in generation order. A failed write stops
/// the run; files already written stay on disk. Returns the number of
/// location pages written.
pub fn build_static_site(site: &Site, output: &Path, today: NaiveDate) -> Result<usize> {
    // Colliding or empty slugs silently overwrite another page
    for problem in validate_site(site).errors {
        warn!("{}", problem);
    }

    let generated = generate_site(site, today);

    for file in &generated.files {
        let dst = output.join(&file.path);
        if let Some(parent) = dst.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }
        fs::write(&dst, &file.contents)
            .with_context(|| format!("Failed to write {}", dst.display()))?;
        debug!(path = %file.path, bytes = file.contents.len(), "wrote file");
        println!("Created: {}", file.path);
    }

    Ok(generated.page_count())
}
