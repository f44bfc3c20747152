use std::fmt;

use area_kit_core::{Business, UniqueLocation};
use chrono::NaiveDate;

use crate::escape::xml_escape;

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// `<changefreq>` values used by this site
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeFreq {
    Weekly,
    Monthly,
}

impl fmt::Display for ChangeFreq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChangeFreq::Weekly => f.write_str("weekly"),
            ChangeFreq::Monthly => f.write_str("monthly"),
        }
    }
}

/// One `<url>` element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SitemapEntry {
    pub loc: String,
    /// Kept as text so the output reads `1.0` rather than `1`
    pub priority: &'static str,
    pub changefreq: ChangeFreq,
}

/// Home, the locations index, then one entry per published city in
/// first-seen order
pub fn sitemap_entries(business: &Business, locations: &[UniqueLocation<'_>]) -> Vec<SitemapEntry> {
    let mut entries = Vec::with_capacity(locations.len() + 2);
    entries.push(SitemapEntry {
        loc: business.url("/"),
        priority: "1.0",
        changefreq: ChangeFreq::Weekly,
    });
    entries.push(SitemapEntry {
        loc: business.url("/locations/"),
        priority: "0.9",
        changefreq: ChangeFreq::Weekly,
    });
    entries.extend(locations.iter().map(|location| SitemapEntry {
        loc: business.url(&location.path()),
        priority: "0.7",
        changefreq: ChangeFreq::Monthly,
    }));
    entries
}

/// Render sitemap.xml with every entry stamped `lastmod`
pub fn render_sitemap(entries: &[SitemapEntry], lastmod: NaiveDate) -> String {
    let today = lastmod.format("%Y-%m-%d").to_string();

    let mut sitemap = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    sitemap.push_str(&format!("<urlset xmlns=\"{}\">\n", SITEMAP_NS));

    for entry in entries {
        sitemap.push_str(&format!(
            r#"    <url>
        <loc>{}</loc>
        <lastmod>{}</lastmod>
        <changefreq>{}</changefreq>
        <priority>{}</priority>
    </url>
"#,
            xml_escape(&entry.loc),
            today,
            entry.changefreq,
            entry.priority
        ));
    }

    sitemap.push_str("</urlset>");
    sitemap
}

/// Render robots.txt allowing everything and pointing at the sitemap
pub fn render_robots(business: &Business) -> String {
    format!(
        "User-agent: *\nAllow: /\n\nSitemap: {}\n",
        business.url("/sitemap.xml")
    )
}
