use serde::{Deserialize, Serialize};

use crate::slug::slugify;

/// Complete site definition: who the business is and where it works
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Site {
    pub business: Business,
    pub locations: Vec<Location>,
}

/// Business profile interpolated into every page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Business {
    pub company: String,
    pub phone: String,
    /// Bare host name, no scheme (e.g. "columbusconcretecontractor.co")
    pub domain: String,
    /// State abbreviation shown after each city name
    pub state: String,
    /// Anchor city of the service area
    pub metro: String,
    /// Wider region named in marketing copy (e.g. "Central Ohio")
    pub region: String,
}

impl Business {
    /// Absolute URL for a site-relative path starting with `/`
    pub fn url(&self, path: &str) -> String {
        format!("https://{}{}", self.domain, path)
    }
}

/// A served market. The same city may appear under more than one county.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    pub city: String,
    pub county: String,
}

impl Location {
    pub fn new(city: impl Into<String>, county: impl Into<String>) -> Self {
        Self {
            city: city.into(),
            county: county.into(),
        }
    }

    /// URL path segment for this location's page
    pub fn slug(&self) -> String {
        slugify(&self.city)
    }

    /// Site-relative URL of the location page, e.g. `/locations/dublin/`
    pub fn path(&self) -> String {
        format!("/locations/{}/", self.slug())
    }
}

/// A location that survived deduplication, with its slug computed once
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniqueLocation<'a> {
    pub location: &'a Location,
    pub slug: String,
}

impl UniqueLocation<'_> {
    pub fn city(&self) -> &str {
        &self.location.city
    }

    pub fn county(&self) -> &str {
        &self.location.county
    }

    pub fn path(&self) -> String {
        format!("/locations/{}/", self.slug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_slug_and_path() {
        let loc = Location::new("St. Louisville", "Licking");
        assert_eq!(loc.slug(), "st-louisville");
        assert_eq!(loc.path(), "/locations/st-louisville/");
    }

    #[test]
    fn test_business_url() {
        let business = Business {
            company: "Acme Concrete".to_string(),
            phone: "555-0100".to_string(),
            domain: "acme.example".to_string(),
            state: "OH".to_string(),
            metro: "Columbus".to_string(),
            region: "Central Ohio".to_string(),
        };
        assert_eq!(business.url("/"), "https://acme.example/");
        assert_eq!(business.url("/sitemap.xml"), "https://acme.example/sitemap.xml");
    }
}
