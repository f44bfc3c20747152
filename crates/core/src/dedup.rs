use std::collections::HashSet;

use tracing::debug;

use crate::types::{Location, UniqueLocation};

/// Keep the first occurrence of each distinct slug, in list order.
///
/// Later occurrences are dropped along with their county, so a city listed
/// under two counties is only ever published under the first one.
pub fn unique_locations(locations: &[Location]) -> Vec<UniqueLocation<'_>> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut unique = Vec::with_capacity(locations.len());

    for location in locations {
        let slug = location.slug();
        if !seen.insert(slug.clone()) {
            debug!(city = %location.city, county = %location.county, %slug, "skipping duplicate location");
            continue;
        }
        unique.push(UniqueLocation { location, slug });
    }

    unique
}

#[cfg(test)]
mod tests {
    use super::*;

    fn locations(pairs: &[(&str, &str)]) -> Vec<Location> {
        pairs.iter().map(|(c, k)| Location::new(*c, *k)).collect()
    }

    #[test]
    fn test_unique_locations_keeps_order() {
        let list = locations(&[("Bexley", "Franklin"), ("Powell", "Delaware"), ("Heath", "Licking")]);
        let unique = unique_locations(&list);
        let slugs: Vec<&str> = unique.iter().map(|u| u.slug.as_str()).collect();
        assert_eq!(slugs, vec!["bexley", "powell", "heath"]);
    }

    #[test]
    fn test_unique_locations_first_county_wins() {
        let list = locations(&[
            ("Dublin", "Franklin"),
            ("Marysville", "Union"),
            ("Dublin", "Union"),
        ]);
        let unique = unique_locations(&list);
        assert_eq!(unique.len(), 2);
        assert_eq!(unique[0].city(), "Dublin");
        assert_eq!(unique[0].county(), "Franklin");
        assert!(!unique.iter().any(|u| u.city() == "Dublin" && u.county() == "Union"));
    }

    #[test]
    fn test_unique_locations_dedups_by_slug_not_name() {
        // Different spellings that collapse to the same slug count as one page
        let list = locations(&[("St. Paris", "Champaign"), ("St Paris", "Champaign")]);
        let unique = unique_locations(&list);
        assert_eq!(unique.len(), 1);
        assert_eq!(unique[0].city(), "St. Paris");
    }

    #[test]
    fn test_unique_locations_empty() {
        assert!(unique_locations(&[]).is_empty());
    }

    #[test]
    fn test_unique_locations_borrows_original() {
        let list = locations(&[("Galena", "Delaware")]);
        let unique = unique_locations(&list);
        assert!(std::ptr::eq(unique[0].location, &list[0]));
    }
}
