use crate::catalog;
use crate::error::{Error, Result};
use crate::types::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Raw TOML configuration structure
/// This matches the site.toml file structure exactly
#[derive(Debug, Deserialize)]
struct RawConfig {
    business: RawBusiness,
    #[serde(default)]
    location: Vec<Location>,
}

#[derive(Debug, Deserialize)]
struct RawBusiness {
    company: String,
    phone: String,
    domain: String,
    state: Option<String>,
    metro: Option<String>,
    region: Option<String>,
}

/// Borrowed view used when writing a site back out as TOML
#[derive(Serialize)]
struct SiteFile<'a> {
    business: &'a Business,
    location: &'a [Location],
}

/// Parse site.toml from a file path
pub fn parse_site_toml<P: AsRef<Path>>(path: P) -> Result<Site> {
    let content = fs::read_to_string(path)?;
    parse_site_toml_str(&content)
}

/// Parse site.toml from a string (useful for testing)
///
/// Only the business profile is checked. The location list is taken as-is,
/// duplicates and all; `area-kit validate` reports on it separately.
pub fn parse_site_toml_str(content: &str) -> Result<Site> {
    let raw: RawConfig = toml::from_str(content)?;

    let company = require_non_empty(raw.business.company, "business.company")?;
    let phone = require_non_empty(raw.business.phone, "business.phone")?;
    let domain = validate_domain(raw.business.domain)?;

    let business = Business {
        company,
        phone,
        domain,
        state: raw
            .business
            .state
            .unwrap_or_else(|| catalog::STATE.to_string()),
        metro: raw
            .business
            .metro
            .unwrap_or_else(|| catalog::METRO.to_string()),
        region: raw
            .business
            .region
            .unwrap_or_else(|| catalog::REGION.to_string()),
    };

    Ok(Site {
        business,
        locations: raw.location,
    })
}

/// Render a site as site.toml content
pub fn to_site_toml(site: &Site) -> Result<String> {
    let file = SiteFile {
        business: &site.business,
        location: &site.locations,
    };
    Ok(toml::to_string_pretty(&file)?)
}

fn require_non_empty(value: String, field_name: &str) -> Result<String> {
    if value.trim().is_empty() {
        return Err(Error::ConfigParse(format!(
            "'{}' must not be empty",
            field_name
        )));
    }
    Ok(value)
}

/// The domain is joined into absolute URLs as `https://{domain}/...`, so it
/// must be a bare host name.
fn validate_domain(domain: String) -> Result<String> {
    let domain = require_non_empty(domain, "business.domain")?;

    if domain.contains("://") {
        return Err(Error::ConfigParse(format!(
            "'business.domain' must not include a scheme: '{}'",
            domain
        )));
    }

    if domain.contains('/') {
        return Err(Error::ConfigParse(format!(
            "'business.domain' must be a bare host name without a path: '{}'",
            domain
        )));
    }

    if domain.chars().any(char::is_whitespace) {
        return Err(Error::ConfigParse(format!(
            "'business.domain' must not contain whitespace: '{}'",
            domain
        )));
    }

    Ok(domain)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_config() {
        let toml = r##"
[business]
company = "Acme Concrete"
phone = "555-0100"
domain = "acme.example"

[[location]]
city = "Dublin"
county = "Franklin"

[[location]]
city = "Dublin"
county = "Union"
        "##;

        let site = parse_site_toml_str(toml).unwrap();
        assert_eq!(site.business.company, "Acme Concrete");
        assert_eq!(site.business.state, "OH");
        assert_eq!(site.business.metro, "Columbus");
        assert_eq!(site.business.region, "Central Ohio");
        // Duplicates are preserved; deduplication happens at generation time
        assert_eq!(site.locations.len(), 2);
        assert_eq!(site.locations[1], Location::new("Dublin", "Union"));
    }

    #[test]
    fn test_parse_config_overrides_state_and_metro() {
        let toml = r##"
[business]
company = "Hoosier Flatwork"
phone = "317-555-0199"
domain = "hoosierflatwork.example"
state = "IN"
metro = "Indianapolis"
region = "Central Indiana"
        "##;

        let site = parse_site_toml_str(toml).unwrap();
        assert_eq!(site.business.state, "IN");
        assert_eq!(site.business.metro, "Indianapolis");
        assert_eq!(site.business.region, "Central Indiana");
        assert!(site.locations.is_empty());
    }

    #[test]
    fn test_parse_config_rejects_empty_company() {
        let toml = r##"
[business]
company = "   "
phone = "555-0100"
domain = "acme.example"
        "##;

        let result = parse_site_toml_str(toml);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("business.company"));
    }

    #[test]
    fn test_parse_config_rejects_domain_with_scheme() {
        let toml = r##"
[business]
company = "Acme Concrete"
phone = "555-0100"
domain = "https://acme.example"
        "##;

        let result = parse_site_toml_str(toml);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("scheme"));
    }

    #[test]
    fn test_parse_config_rejects_domain_with_path() {
        let toml = r##"
[business]
company = "Acme Concrete"
phone = "555-0100"
domain = "acme.example/concrete"
        "##;

        let result = parse_site_toml_str(toml);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("without a path"));
    }

    #[test]
    fn test_parse_config_missing_business() {
        let toml = r##"
[[location]]
city = "Dublin"
county = "Franklin"
        "##;

        let result = parse_site_toml_str(toml);
        assert!(matches!(result, Err(Error::ConfigParse(_))));
    }

    #[test]
    fn test_parse_config_accepts_empty_city() {
        let toml = r##"
[business]
company = "Acme Concrete"
phone = "555-0100"
domain = "acme.example"

[[location]]
city = "..."
county = "Franklin"
        "##;

        let site = parse_site_toml_str(toml).unwrap();
        assert_eq!(site.locations[0].slug(), "");
    }

    #[test]
    fn test_builtin_site_survives_toml() {
        let site = catalog::builtin_site();
        let content = to_site_toml(&site).unwrap();
        let parsed = parse_site_toml_str(&content).unwrap();
        assert_eq!(parsed, site);
    }
}
