/// Convert a display name into a URL path segment.
///
/// Lowercases the input, drops everything except ASCII letters, digits,
/// whitespace and hyphens, collapses whitespace/hyphen runs into a single
/// `-`, then trims hyphens from both ends.
///
/// ```
/// use area_kit_core::slugify;
///
/// assert_eq!(slugify("St. Louisville"), "st-louisville");
/// assert_eq!(slugify("Washington Court House"), "washington-court-house");
/// ```
///
/// Never fails. A name made only of punctuation produces an empty slug.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_separator = false;

    for c in name.chars().flat_map(char::to_lowercase) {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.push(c);
        } else if c.is_whitespace() || c == '-' {
            pending_separator = true;
        }
        // Anything else is dropped without acting as a separator
    }

    slug
}

/// Check whether `value` is already in slug form.
pub fn is_valid_slug(value: &str) -> bool {
    !value.is_empty()
        && !value.starts_with('-')
        && !value.ends_with('-')
        && !value.contains("--")
        && value
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_slugify_basic() {
        assert_eq!(slugify("Bexley"), "bexley");
        assert_eq!(slugify("Canal Winchester"), "canal-winchester");
        assert_eq!(slugify("DeGraff"), "degraff");
    }

    #[test]
    fn test_slugify_drops_punctuation() {
        assert_eq!(slugify("St. Louisville"), "st-louisville");
        assert_eq!(slugify("St. Paris"), "st-paris");
        assert_eq!(slugify("O'Brien's Landing"), "obriens-landing");
    }

    #[test]
    fn test_slugify_punctuation_does_not_separate() {
        // Removed characters join their neighbours rather than splitting them
        assert_eq!(slugify("St.Louisville"), "stlouisville");
    }

    #[test]
    fn test_slugify_collapses_runs() {
        assert_eq!(slugify("Mount   Vernon"), "mount-vernon");
        assert_eq!(slugify("Mount - Vernon"), "mount-vernon");
        assert_eq!(slugify("Mount\t\nVernon"), "mount-vernon");
        assert_eq!(slugify("a--b"), "a-b");
    }

    #[test]
    fn test_slugify_trims_edges() {
        assert_eq!(slugify("  Dublin  "), "dublin");
        assert_eq!(slugify("-Dublin-"), "dublin");
        assert_eq!(slugify(". Dublin ."), "dublin");
    }

    #[test]
    fn test_slugify_degenerate_input() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("..."), "");
        assert_eq!(slugify(" - "), "");
    }

    #[test]
    fn test_slugify_non_ascii_dropped() {
        assert_eq!(slugify("Café Town"), "caf-town");
        assert_eq!(slugify("Zürich"), "zrich");
    }

    #[test]
    fn test_slugify_numbers() {
        assert_eq!(slugify("Route 66"), "route-66");
    }

    #[test]
    fn test_is_valid_slug() {
        assert!(is_valid_slug("st-louisville"));
        assert!(is_valid_slug("route-66"));
        assert!(!is_valid_slug(""));
        assert!(!is_valid_slug("-dublin"));
        assert!(!is_valid_slug("dublin-"));
        assert!(!is_valid_slug("mount--vernon"));
        assert!(!is_valid_slug("Dublin"));
        assert!(!is_valid_slug("st.paris"));
    }

    proptest! {
        #[test]
        fn prop_slugify_is_idempotent(name in "\\PC{0,40}") {
            let once = slugify(&name);
            prop_assert_eq!(slugify(&once), once);
        }

        #[test]
        fn prop_slugify_output_charset(name in "\\PC{0,40}") {
            let slug = slugify(&name);
            prop_assert!(slug.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
            prop_assert!(!slug.starts_with('-'));
            prop_assert!(!slug.ends_with('-'));
            prop_assert!(!slug.contains("--"));
        }

        #[test]
        fn prop_slugify_nonempty_is_valid(name in "[A-Za-z .'-]{0,30}") {
            let slug = slugify(&name);
            prop_assert!(slug.is_empty() || is_valid_slug(&slug));
        }
    }
}
