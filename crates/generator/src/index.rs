use std::collections::BTreeMap;

use area_kit_core::{Business, UniqueLocation};

use crate::escape::html_escape;
use crate::style::LOCATIONS_INDEX_CSS;

/// Counties named in the index meta description
const FEATURED_COUNTY_COUNT: usize = 4;

/// Group published locations by county.
///
/// Counties come out in alphabetical order and cities are sorted by name
/// within each county. Each city appears once, under the county it was
/// first listed with.
pub fn group_by_county<'a, 'b>(
    locations: &'b [UniqueLocation<'a>],
) -> BTreeMap<&'a str, Vec<&'b UniqueLocation<'a>>> {
    let mut counties: BTreeMap<&'a str, Vec<&'b UniqueLocation<'a>>> = BTreeMap::new();
    for location in locations {
        counties
            .entry(location.location.county.as_str())
            .or_default()
            .push(location);
    }
    for cities in counties.values_mut() {
        cities.sort_by(|a, b| a.city().cmp(b.city()));
    }
    counties
}

/// First few distinct counties in list order, for the meta description
fn featured_counties<'a>(locations: &[UniqueLocation<'a>]) -> Vec<&'a str> {
    let mut featured: Vec<&'a str> = Vec::new();
    for location in locations {
        let county = location.location.county.as_str();
        if !featured.contains(&county) {
            featured.push(county);
            if featured.len() == FEATURED_COUNTY_COUNT {
                break;
            }
        }
    }
    featured
}

fn description(business: &Business, locations: &[UniqueLocation<'_>]) -> String {
    let counties = featured_counties(locations);
    let including = match counties.len() {
        0 => String::new(),
        1 => format!(" including {} and surrounding counties", counties[0]),
        _ => format!(" including {}, and surrounding counties", counties.join(", ")),
    };
    format!(
        "View all areas we serve. Professional concrete services throughout {}{}.",
        business.region, including
    )
}

fn county_sections_html(business: &Business, locations: &[UniqueLocation<'_>]) -> String {
    let state = html_escape(&business.state);

    group_by_county(locations)
        .into_iter()
        .map(|(county, cities)| {
            let city_links = cities
                .iter()
                .map(|city| {
                    format!(
                        r#"                    <li><a href="{}">{}, {}</a></li>"#,
                        html_escape(&city.path()),
                        html_escape(city.city()),
                        state
                    )
                })
                .collect::<Vec<_>>()
                .join("\n");

            format!(
                r#"
            <div class="county-section">
                <h2>{} County</h2>
                <ul class="city-list">
{}
                </ul>
            </div>"#,
                html_escape(county),
                city_links
            )
        })
        .collect()
}

/// Render the locations index page linking every published city
pub fn render_locations_index(
    business: &Business,
    locations: &[UniqueLocation<'_>],
    year: i32,
) -> String {
    let company = html_escape(&business.company);
    let phone = html_escape(&business.phone);
    let state = html_escape(&business.state);
    let metro = html_escape(&business.metro);
    let region = html_escape(&business.region);
    let description = html_escape(&description(business, locations));
    let canonical = html_escape(&business.url("/locations/"));

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Service Areas | {company} | {metro}, {state}</title>
    <meta name="description" content="{description}">
    <meta name="robots" content="index, follow">
    <link rel="canonical" href="{canonical}">
    <style>
{css}    </style>
</head>
<body>
    <header>
        <div class="container header-content">
            <a href="/" class="logo">{company}</a>
            <a href="tel:{phone}" class="phone-cta">📞 {phone}</a>
        </div>
    </header>

    <section class="hero">
        <div class="container">
            <h1>Our <span>Service Areas</span></h1>
            <p>Professional concrete services throughout {region}</p>
        </div>
    </section>

    <main>
        <div class="container locations-grid">
{sections}
        </div>
    </main>

    <section class="cta-section">
        <div class="container">
            <h2>Don't See Your City? Call Us Anyway!</h2>
            <p style="margin-bottom: 20px; color: var(--dark);">We serve all of {region}. Give us a call to discuss your project.</p>
            <a href="tel:{phone}" class="cta-btn">📞 Call {phone}</a>
        </div>
    </section>

    <footer>
        <div class="container">
            <p><a href="/">{company}</a> | {metro}, {state} | {phone}</p>
            <p style="margin-top: 10px; color: #9ca3af;">&copy; {year} All rights reserved.</p>
        </div>
    </footer>
</body>
</html>"#,
        css = LOCATIONS_INDEX_CSS,
        sections = county_sections_html(business, locations),
    )
}
