use area_kit_core::{Business, UniqueLocation};

use crate::escape::html_escape;
use crate::style::LOCATION_PAGE_CSS;

/// Service cards shown on every location page: (icon, heading, blurb)
const SERVICES: &[(&str, &str, &str)] = &[
    (
        "🚗",
        "Concrete Driveways",
        "Durable, long-lasting driveways designed to handle {region} weather and daily use.",
    ),
    (
        "🏡",
        "Stamped Concrete Patios",
        "Beautiful decorative patios that enhance your outdoor living space.",
    ),
    (
        "🏗️",
        "Concrete Foundations",
        "Solid foundations for residential and commercial construction projects.",
    ),
    (
        "🚶",
        "Sidewalks & Walkways",
        "Safe, attractive walkways that improve your property's curb appeal.",
    ),
    (
        "🏊",
        "Pool Decks",
        "Non-slip, stylish pool deck surfaces for your backyard oasis.",
    ),
    (
        "🔧",
        "Concrete Repair",
        "Expert repair and resurfacing to extend the life of your concrete.",
    ),
];

const SELLING_POINTS: &[&str] = &[
    "Licensed & Insured Professionals",
    "Free, No-Obligation Estimates",
    "Quality Materials & Craftsmanship",
    "On-Time Project Completion",
    "Competitive, Transparent Pricing",
    "5-Star Customer Reviews",
];

fn services_html(region: &str) -> String {
    SERVICES
        .iter()
        .map(|(icon, heading, blurb)| {
            format!(
                r#"                <div class="service-card">
                    <h3>{} {}</h3>
                    <p>{}</p>
                </div>
"#,
                icon,
                html_escape(heading),
                html_escape(&blurb.replace("{region}", region)),
            )
        })
        .collect()
}

fn selling_points_html() -> String {
    SELLING_POINTS
        .iter()
        .map(|point| format!("                        <li>{}</li>\n", html_escape(point)))
        .collect()
}

/// Links to the other published cities in the same county, sorted by name
fn nearby_html(page: &UniqueLocation<'_>, nearby: &[UniqueLocation<'_>], state: &str) -> String {
    let mut same_county: Vec<&UniqueLocation<'_>> = nearby
        .iter()
        .filter(|other| other.county() == page.county() && other.slug != page.slug)
        .collect();
    same_county.sort_by(|a, b| a.city().cmp(b.city()));

    same_county
        .iter()
        .map(|other| {
            format!(
                "                <a href=\"{}\">{}, {}</a>\n",
                html_escape(&other.path()),
                html_escape(other.city()),
                html_escape(state)
            )
        })
        .collect()
}

/// Render the complete HTML document for one location page.
///
/// `nearby` is the full deduplicated list; cities sharing this page's county
/// are linked from the "Other Areas" section. `year` is printed in the
/// copyright line.
pub fn render_location_page(
    business: &Business,
    page: &UniqueLocation<'_>,
    nearby: &[UniqueLocation<'_>],
    year: i32,
) -> String {
    let city = html_escape(page.city());
    let county = html_escape(page.county());
    let company = html_escape(&business.company);
    let phone = html_escape(&business.phone);
    let state = html_escape(&business.state);
    let metro = html_escape(&business.metro);
    let region = html_escape(&business.region);
    let path = html_escape(&page.path());
    let canonical = html_escape(&business.url(&page.path()));

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Concrete Contractor {city}, {state} | {company}</title>
    <meta name="description" content="Professional concrete contractor serving {city}, {county} County, {state}. Quality driveways, patios, foundations & more. Free estimates. Call {phone}!">
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
            <h1>Professional <span>Concrete Contractor</span> in {city}, {state}</h1>
            <p>Serving {city} and {county} County with top-quality concrete work. From driveways to patios, foundations to decorative concrete — we deliver exceptional results.</p>
            <a href="tel:{phone}" class="cta-btn">Get Your Free Estimate</a>
        </div>
    </section>

    <section class="services">
        <div class="container">
            <h2 class="section-title">Our Concrete Services in {city}</h2>
            <div class="services-grid">
{services}            </div>
        </div>
    </section>

    <section class="about">
        <div class="container">
            <div class="about-content">
                <div>
                    <h2>Why Choose Us for Your {city} Concrete Project?</h2>
                    <p>We've been serving {county} County and the greater {metro} area with exceptional concrete work. Our team combines years of experience with modern techniques to deliver results that last.</p>
                    <ul>
{selling_points}                    </ul>
                </div>
                <div>
                    <h2>Serving {city} &amp; Surrounding Areas</h2>
                    <p>As a local concrete contractor, we understand the unique needs of {city} homeowners and businesses. Whether you're in downtown {city} or the surrounding {county} County communities, we're here to help with all your concrete needs.</p>
                    <p style="margin-top: 20px;">Ready to start your project? Call us today at <strong style="color: var(--primary);">{phone}</strong> for a free estimate.</p>
                </div>
            </div>
        </div>
    </section>

    <section class="areas">
        <div class="container">
            <h2 class="section-title">Other Areas We Serve Near {city}</h2>
            <div class="areas-list" id="nearby-areas">
{nearby}            </div>
            <p style="text-align: center; margin-top: 30px;"><a href="/locations/" style="color: var(--primary); font-weight: 600;">View All Service Areas →</a></p>
        </div>
    </section>

    <section class="cta-section">
        <div class="container">
            <h2>Ready to Start Your Concrete Project in {city}?</h2>
            <p>Get a free, no-obligation estimate from our experienced team.</p>
            <a href="tel:{phone}" class="cta-btn">📞 Call {phone} Now</a>
        </div>
    </section>

    <footer>
        <div class="container">
            <div class="footer-content">
                <div class="footer-section">
                    <h4>{company}</h4>
                    <p>Professional concrete services for {city}, {state} and the greater {metro} area.</p>
                    <p style="margin-top: 15px;"><strong>📞 {phone}</strong></p>
                </div>
                <div class="footer-section">
                    <h4>Services</h4>
                    <a href="/">Concrete Driveways</a>
                    <a href="/">Stamped Concrete</a>
                    <a href="/">Foundations</a>
                    <a href="/">Commercial Concrete</a>
                </div>
                <div class="footer-section">
                    <h4>Service Areas</h4>
                    <a href="/locations/">All Locations</a>
                    <a href="/">{metro}, {state}</a>
                    <a href="{path}">{city}, {state}</a>
                </div>
            </div>
            <div class="footer-bottom">
                <p>&copy; {year} {company}. All rights reserved. | Serving {city}, {county} County &amp; {region}</p>
            </div>
        </div>
    </footer>
</body>
</html>"#,
        css = LOCATION_PAGE_CSS,
        services = services_html(&business.region),
        selling_points = selling_points_html(),
        nearby = nearby_html(page, nearby, &business.state),
    )
}
