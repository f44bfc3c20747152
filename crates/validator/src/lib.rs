//! Read-only checks over a site definition and over a generated output tree.
//!
//! Generation never rejects input: duplicates are dropped silently and
//! colliding slugs overwrite each other. This crate reports those cases so
//! they can be fixed in the source list.

use std::collections::{BTreeSet, HashMap};
use std::path::Path;

use anyhow::{Context, Result};
use area_kit_core::{Site, unique_locations};
use walkdir::WalkDir;

#[derive(Debug, Default)]
pub struct ValidationReport {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub info: Vec<String>,
}

impl ValidationReport {
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// Append another report's findings to this one
    pub fn merge(&mut self, other: ValidationReport) {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
        self.info.extend(other.info);
    }
}

/// Check a site's location list for entries that generation would silently
/// drop or clobber.
pub fn validate_site(site: &Site) -> ValidationReport {
    let mut report = ValidationReport::default();

    // slug -> (first city, first county)
    let mut first_seen: HashMap<String, (&str, &str)> = HashMap::new();
    let mut exact: BTreeSet<(&str, &str)> = BTreeSet::new();

    for location in &site.locations {
        let city = location.city.as_str();
        let county = location.county.as_str();
        let slug = location.slug();

        if slug.is_empty() {
            report.errors.push(format!(
                "'{}' ({} County) produces an empty slug; its page would be written to locations/index.html",
                city, county
            ));
            continue;
        }

        if !exact.insert((city, county)) {
            report.warnings.push(format!(
                "'{}' is listed more than once under {} County",
                city, county
            ));
            continue;
        }

        match first_seen.get(&slug).copied() {
            None => {
                first_seen.insert(slug, (city, county));
            }
            Some((kept_city, _)) if kept_city != city => {
                report.errors.push(format!(
                    "'{}' and '{}' share the slug '{}'; only '{}' gets a page",
                    kept_city, city, slug, kept_city
                ));
            }
            Some((_, kept_county)) => {
                report.warnings.push(format!(
                    "'{}' is listed under {} County and {} County; only {} County is published",
                    city, kept_county, county, kept_county
                ));
            }
        }
    }

    let unique = unique_locations(&site.locations);
    let counties: BTreeSet<&str> = unique.iter().map(|u| u.county()).collect();
    report
        .info
        .push(format!("{} locations listed", site.locations.len()));
    report
        .info
        .push(format!("{} unique location pages", unique.len()));
    report.info.push(format!("{} counties", counties.len()));

    report
}

/// Compare an output directory against what `site` would generate.
///
/// Missing files are errors. Page directories under `locations/` that no
/// longer match a slug are warnings; they are left over from an earlier
/// list and still reachable through old links.
pub fn validate_output(site: &Site, output: &Path) -> Result<ValidationReport> {
    let mut report = ValidationReport::default();

    let unique = unique_locations(&site.locations);
    let expected: BTreeSet<&str> = unique
        .iter()
        .map(|u| u.slug.as_str())
        .filter(|slug| !slug.is_empty())
        .collect();

    for file in ["locations/index.html", "sitemap.xml", "robots.txt"] {
        if !output.join(file).is_file() {
            report.errors.push(format!("Missing {}", file));
        }
    }

    for slug in &expected {
        let page = output.join("locations").join(slug).join("index.html");
        if !page.is_file() {
            report
                .errors
                .push(format!("Missing locations/{}/index.html", slug));
        }
    }

    let locations_dir = output.join("locations");
    let mut found = 0usize;
    if locations_dir.is_dir() {
        for entry in WalkDir::new(&locations_dir).min_depth(1).max_depth(1) {
            let entry = entry
                .with_context(|| format!("Failed to read {}", locations_dir.display()))?;
            if !entry.file_type().is_dir() {
                continue;
            }
            found += 1;
            let name = entry.file_name().to_string_lossy();
            if !expected.contains(&*name) {
                report.warnings.push(format!(
                    "Stale page directory locations/{}/ is not in the location list",
                    name
                ));
            }
        }
    }

    report
        .info
        .push(format!("{} page directories on disk", found));

    Ok(report)
}
