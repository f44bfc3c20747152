//! Static site generation for service-area pages.
//!
//! Rendering is plain string templating; nothing here touches the
//! filesystem. [`generate_site`] returns every file in the order it should
//! be written.

pub mod escape;
pub mod index;
pub mod page;
pub mod sitemap;
pub mod style;

use area_kit_core::{Site, unique_locations};
use chrono::{Datelike, NaiveDate};
use tracing::debug;

pub use index::render_locations_index;
pub use page::render_location_page;
pub use sitemap::{render_robots, render_sitemap, sitemap_entries};

pub const LOCATIONS_DIR: &str = "locations";
pub const INDEX_FILE: &str = "index.html";
pub const SITEMAP_FILE: &str = "sitemap.xml";
pub const ROBOTS_FILE: &str = "robots.txt";

/// What a generated file is, for progress reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    LocationPage,
    LocationsIndex,
    Sitemap,
    Robots,
}

/// One output file, path relative to the output root using `/` separators
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub path: String,
    pub kind: FileKind,
    pub contents: String,
}

pub struct GeneratedSite {
    pub files: Vec<GeneratedFile>,
}

impl GeneratedSite {
    pub fn page_count(&self) -> usize {
        self.files
            .iter()
            .filter(|f| f.kind == FileKind::LocationPage)
            .count()
    }

    pub fn get(&self, path: &str) -> Option<&GeneratedFile> {
        self.files.iter().find(|f| f.path == path)
    }
}

/// Relative path of a location page for `slug`
pub fn location_page_path(slug: &str) -> String {
    format!("{}/{}/{}", LOCATIONS_DIR, slug, INDEX_FILE)
}

/// Render the whole site for a run happening on `today`.
///
/// Order: one page per unique slug (first-seen order), the locations index,
/// sitemap.xml, robots.txt. The date only feeds `<lastmod>` and the
/// copyright year, so two runs on different days differ in those fields
/// alone.
pub fn generate_site(site: &Site, today: NaiveDate) -> GeneratedSite {
    let year = today.year();
    let unique = unique_locations(&site.locations);
    debug!(
        listed = site.locations.len(),
        unique = unique.len(),
        "rendering site"
    );

    let mut files = Vec::with_capacity(unique.len() + 3);

    for location in &unique {
        files.push(GeneratedFile {
            path: location_page_path(&location.slug),
            kind: FileKind::LocationPage,
            contents: render_location_page(&site.business, location, &unique, year),
        });
    }

    files.push(GeneratedFile {
        path: format!("{}/{}", LOCATIONS_DIR, INDEX_FILE),
        kind: FileKind::LocationsIndex,
        contents: render_locations_index(&site.business, &unique, year),
    });

    let entries = sitemap_entries(&site.business, &unique);
    files.push(GeneratedFile {
        path: SITEMAP_FILE.to_string(),
        kind: FileKind::Sitemap,
        contents: render_sitemap(&entries, today),
    });

    files.push(GeneratedFile {
        path: ROBOTS_FILE.to_string(),
        kind: FileKind::Robots,
        contents: render_robots(&site.business),
    });

    GeneratedSite { files }
}
