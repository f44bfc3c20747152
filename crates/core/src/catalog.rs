//! Compiled-in business profile and service-area list.

use crate::types::{Business, Location, Site};

pub const COMPANY: &str = "Columbus Concrete Contractor";
pub const PHONE: &str = "614-902-3793";
pub const DOMAIN: &str = "columbusconcretecontractor.co";
pub const STATE: &str = "OH";
pub const METRO: &str = "Columbus";
pub const REGION: &str = "Central Ohio";

/// Cities within a 60-minute drive of Columbus, grouped by county.
///
/// Some cities straddle county lines and appear more than once; generation
/// keeps the first entry for each.
pub const LOCATIONS: &[(&str, &str)] = &[
    // Franklin County (Core - Columbus metro)
    ("Bexley", "Franklin"),
    ("Canal Winchester", "Franklin"),
    ("Dublin", "Franklin"),
    ("Gahanna", "Franklin"),
    ("Grandview Heights", "Franklin"),
    ("Grove City", "Franklin"),
    ("Groveport", "Franklin"),
    ("Hilliard", "Franklin"),
    ("New Albany", "Franklin"),
    ("Pickerington", "Franklin"),
    ("Reynoldsburg", "Franklin"),
    ("Upper Arlington", "Franklin"),
    ("Westerville", "Franklin"),
    ("Whitehall", "Franklin"),
    ("Worthington", "Franklin"),
    ("Obetz", "Franklin"),
    ("Minerva Park", "Franklin"),
    ("Marble Cliff", "Franklin"),
    ("Brice", "Franklin"),
    ("Lockbourne", "Franklin"),
    ("Harrisburg", "Franklin"),
    ("Urbancrest", "Franklin"),
    ("Valleyview", "Franklin"),
    ("Lincoln Village", "Franklin"),
    ("Blacklick Estates", "Franklin"),

    // Delaware County (North)
    ("Delaware", "Delaware"),
    ("Powell", "Delaware"),
    ("Sunbury", "Delaware"),
    ("Westerville", "Delaware"),
    ("Lewis Center", "Delaware"),
    ("Galena", "Delaware"),
    ("Ashley", "Delaware"),
    ("Ostrander", "Delaware"),
    ("Shawnee Hills", "Delaware"),
    ("Orange", "Delaware"),
    ("Genoa", "Delaware"),

    // Licking County (East)
    ("Newark", "Licking"),
    ("Heath", "Licking"),
    ("Granville", "Licking"),
    ("Johnstown", "Licking"),
    ("Pataskala", "Licking"),
    ("Hebron", "Licking"),
    ("Buckeye Lake", "Licking"),
    ("Utica", "Licking"),
    ("Alexandria", "Licking"),
    ("Hanover", "Licking"),
    ("Kirkersville", "Licking"),
    ("St. Louisville", "Licking"),

    // Fairfield County (Southeast)
    ("Lancaster", "Fairfield"),
    ("Pickerington", "Fairfield"),
    ("Canal Winchester", "Fairfield"),
    ("Baltimore", "Fairfield"),
    ("Carroll", "Fairfield"),
    ("Millersport", "Fairfield"),
    ("Rushville", "Fairfield"),
    ("Bremen", "Fairfield"),
    ("Amanda", "Fairfield"),
    ("Pleasantville", "Fairfield"),
    ("West Rushville", "Fairfield"),

    // Madison County (West)
    ("London", "Madison"),
    ("Plain City", "Madison"),
    ("West Jefferson", "Madison"),
    ("Mount Sterling", "Madison"),
    ("South Solon", "Madison"),
    ("Midway", "Madison"),
    ("Summerford", "Madison"),
    ("Choctaw Lake", "Madison"),

    // Pickaway County (South)
    ("Circleville", "Pickaway"),
    ("Ashville", "Pickaway"),
    ("South Bloomfield", "Pickaway"),
    ("Commercial Point", "Pickaway"),
    ("Williamsport", "Pickaway"),
    ("Orient", "Pickaway"),
    ("Darbyville", "Pickaway"),
    ("Harrisburg", "Pickaway"),
    ("New Holland", "Pickaway"),
    ("Tarlton", "Pickaway"),

    // Union County (Northwest)
    ("Marysville", "Union"),
    ("Dublin", "Union"),
    ("Plain City", "Union"),
    ("Richwood", "Union"),
    ("Milford Center", "Union"),
    ("Magnetic Springs", "Union"),
    ("Raymond", "Union"),
    ("Unionville Center", "Union"),

    // Knox County (Northeast)
    ("Mount Vernon", "Knox"),
    ("Fredericktown", "Knox"),
    ("Centerburg", "Knox"),
    ("Danville", "Knox"),
    ("Gambier", "Knox"),
    ("Martinsburg", "Knox"),
    ("Bladensburg", "Knox"),
    ("Howard", "Knox"),

    // Morrow County (North-Northeast)
    ("Mount Gilead", "Morrow"),
    ("Cardington", "Morrow"),
    ("Edison", "Morrow"),
    ("Marengo", "Morrow"),
    ("Sparta", "Morrow"),
    ("Chesterville", "Morrow"),

    // Marion County (North)
    ("Marion", "Marion"),
    ("Caledonia", "Marion"),
    ("Waldo", "Marion"),
    ("Prospect", "Marion"),
    ("La Rue", "Marion"),
    ("Morral", "Marion"),

    // Logan County (Northwest)
    ("Bellefontaine", "Logan"),
    ("West Liberty", "Logan"),
    ("DeGraff", "Logan"),
    ("Russells Point", "Logan"),
    ("Lakeview", "Logan"),
    ("Zanesfield", "Logan"),

    // Ross County (South-Southwest)
    ("Chillicothe", "Ross"),
    ("Kingston", "Ross"),
    ("Frankfort", "Ross"),
    ("Clarksburg", "Ross"),
    ("Adelphi", "Ross"),

    // Fayette County (Southwest)
    ("Washington Court House", "Fayette"),
    ("Jeffersonville", "Fayette"),
    ("Bloomingburg", "Fayette"),
    ("Good Hope", "Fayette"),

    // Perry County (Southeast)
    ("New Lexington", "Perry"),
    ("Somerset", "Perry"),
    ("Crooksville", "Perry"),
    ("Thornville", "Perry"),
    ("Shawnee", "Perry"),

    // Hocking County (Southeast)
    ("Logan", "Hocking"),
    ("Laurelville", "Hocking"),
    ("Rockbridge", "Hocking"),
    ("Murray City", "Hocking"),

    // Champaign County (West)
    ("Urbana", "Champaign"),
    ("Mechanicsburg", "Champaign"),
    ("St. Paris", "Champaign"),
    ("North Lewisburg", "Champaign"),
    ("Woodstock", "Champaign"),

    // Clark County (West-Southwest)
    ("Springfield", "Clark"),
    ("New Carlisle", "Clark"),
    ("South Vienna", "Clark"),
    ("Enon", "Clark"),
    ("Tremont City", "Clark"),
];

pub fn builtin_business() -> Business {
    Business {
        company: COMPANY.to_string(),
        phone: PHONE.to_string(),
        domain: DOMAIN.to_string(),
        state: STATE.to_string(),
        metro: METRO.to_string(),
        region: REGION.to_string(),
    }
}

pub fn builtin_locations() -> Vec<Location> {
    LOCATIONS
        .iter()
        .map(|(city, county)| Location::new(*city, *county))
        .collect()
}

/// The site generated when no configuration file is given
pub fn builtin_site() -> Site {
    Site {
        business: builtin_business(),
        locations: builtin_locations(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dedup::unique_locations;
    use crate::slug::is_valid_slug;

    #[test]
    fn test_builtin_slugs_are_valid() {
        for (city, _) in LOCATIONS {
            let slug = crate::slugify(city);
            assert!(is_valid_slug(&slug), "bad slug for {}: {:?}", city, slug);
        }
    }

    #[test]
    fn test_builtin_has_cross_county_duplicates() {
        let site = builtin_site();
        let unique = unique_locations(&site.locations);
        assert!(unique.len() < site.locations.len());

        let dublin = unique.iter().find(|u| u.slug == "dublin").unwrap();
        assert_eq!(dublin.county(), "Franklin");
    }

    #[test]
    fn test_builtin_duplicates_resolved_to_first_county() {
        let site = builtin_site();
        let unique = unique_locations(&site.locations);
        let county_of = |slug: &str| unique.iter().find(|u| u.slug == slug).map(|u| u.county().to_string());

        assert_eq!(county_of("westerville").as_deref(), Some("Franklin"));
        assert_eq!(county_of("pickerington").as_deref(), Some("Franklin"));
        assert_eq!(county_of("canal-winchester").as_deref(), Some("Franklin"));
        assert_eq!(county_of("harrisburg").as_deref(), Some("Franklin"));
        assert_eq!(county_of("plain-city").as_deref(), Some("Madison"));
    }

    #[test]
    fn test_builtin_counts() {
        let site = builtin_site();
        assert_eq!(site.locations.len(), 139);
        assert_eq!(unique_locations(&site.locations).len(), 133);
    }

    #[test]
    fn test_builtin_business() {
        let business = builtin_business();
        assert_eq!(business.url("/"), "https://columbusconcretecontractor.co/");
        assert_eq!(business.state, "OH");
    }
}
