//! In-page anchor parsing for smooth scrolling.

/// Fragment id of an anchor href worth intercepting.
///
/// Bare `#` and non-fragment hrefs return `None`, leaving default
/// navigation untouched.
#[must_use]
pub fn fragment(href: &str) -> Option<&str> {
    match href.strip_prefix('#') {
        Some(id) if !id.is_empty() => Some(id),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::fragment;

    #[test]
    fn fragment_hrefs_are_intercepted() {
        assert_eq!(fragment("#services"), Some("services"));
        assert_eq!(fragment("#s"), Some("s"));
    }

    #[test]
    fn bare_hash_is_left_alone() {
        assert_eq!(fragment("#"), None);
    }

    #[test]
    fn non_fragment_hrefs_are_left_alone() {
        assert_eq!(fragment("/about"), None);
        assert_eq!(fragment("https://example.com/#services"), None);
        assert_eq!(fragment(""), None);
    }
}
