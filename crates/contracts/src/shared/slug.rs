//! URL slug derivation from display names.

/// Derive a URL slug from a display name.
///
/// Lower-cases the input, collapses every run of characters outside
/// `[a-z0-9]` into a single `-` and strips leading/trailing `-`.
/// Uniqueness is the server's concern.
pub fn generate_slug(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_separator = false;

    for c in name.chars().flat_map(char::to_lowercase) {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
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

/// Keep `slug` in step with `name` while a record is being created.
///
/// Once the record has an identity the slug is edited on its own and is
/// never overwritten from the name field.
pub fn sync_slug(is_edit: bool, slug: &mut String, name: &str) {
    if !is_edit {
        *slug = generate_slug(name);
    }
}

/// Slug to edit for a stored record: the stored one, or one derived from
/// `name` when the server kept none.
pub fn stored_slug(slug: &str, name: &str) -> String {
    let slug = slug.trim();
    if slug.is_empty() {
        generate_slug(name)
    } else {
        slug.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_normalized(s: &str) -> bool {
        !s.starts_with('-')
            && !s.ends_with('-')
            && !s.contains("--")
            && s.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    }

    #[test]
    fn test_basic_slugs() {
        assert_eq!(generate_slug("Acme"), "acme");
        assert_eq!(generate_slug("Hello, World!"), "hello-world");
        assert_eq!(generate_slug("  --Cloud  Services 2024-- "), "cloud-services-2024");
        assert_eq!(generate_slug("ALL_CAPS_NAME"), "all-caps-name");
    }

    #[test]
    fn test_empty_and_separator_only() {
        assert_eq!(generate_slug(""), "");
        assert_eq!(generate_slug("   "), "");
        assert_eq!(generate_slug("!!!---???"), "");
    }

    #[test]
    fn test_non_ascii_is_treated_as_separator() {
        assert_eq!(generate_slug("Café Crème"), "caf-cr-me");
        assert_eq!(generate_slug("Компания 1"), "1");
    }

    #[test]
    fn test_output_shape_and_idempotence() {
        let inputs = [
            "Acme",
            " PT. Sinar Jaya / Divisi IT ",
            "a--b__c  d",
            "-leading and trailing-",
            "x",
            "42 Things & More",
            "Ünïcödé Tëst",
            "",
        ];
        for input in inputs {
            let once = generate_slug(input);
            assert!(is_normalized(&once), "{input:?} -> {once:?}");
            assert_eq!(generate_slug(&once), once);
        }
    }

    #[test]
    fn test_sync_slug_only_while_creating() {
        let mut slug = String::new();
        sync_slug(false, &mut slug, "New Product");
        assert_eq!(slug, "new-product");

        let mut slug = "hand-edited".to_string();
        sync_slug(true, &mut slug, "Renamed Product");
        assert_eq!(slug, "hand-edited");
    }

    #[test]
    fn test_stored_slug_falls_back_to_name() {
        assert_eq!(stored_slug("kept-slug", "Other Name"), "kept-slug");
        assert_eq!(stored_slug("  ", "RustConf 2024"), "rustconf-2024");
        assert_eq!(stored_slug("", ""), "");
    }
}
