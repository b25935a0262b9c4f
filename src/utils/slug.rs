/// Derive a URL slug from a category name: lowercase, alphanumeric runs
/// joined by single hyphens, everything else dropped.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_separator = false;

    for c in name.trim().to_lowercase().chars() {
        if c.is_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.push(c);
        } else {
            pending_separator = true;
        }
    }

    slug
}

#[cfg(test)]
mod tests {
    use super::slugify;

    #[test]
    fn lowercases_and_hyphenates() {
        assert_eq!(slugify("Pain Relief"), "pain-relief");
    }

    #[test]
    fn collapses_punctuation_runs() {
        assert_eq!(slugify("Vitamins & Supplements"), "vitamins-supplements");
        assert_eq!(slugify("Baby's  Care"), "baby-s-care");
    }

    #[test]
    fn trims_leading_and_trailing_separators() {
        assert_eq!(slugify("  First-Aid!  "), "first-aid");
    }
}
