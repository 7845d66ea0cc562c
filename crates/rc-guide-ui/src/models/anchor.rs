//! In-page anchor resolution and focus rules

/// Tags that take keyboard focus without a `tabindex`
const NATIVELY_FOCUSABLE: [&str; 5] = ["BUTTON", "INPUT", "SELECT", "TEXTAREA", "IFRAME"];

/// Element id targeted by an in-page `href`.
///
/// Returns `None` for a bare `"#"`, an empty fragment, or anything that is not
/// a same-page fragment.
///
/// # Example
///
/// ```
/// use rc_guide_ui::models::fragment_id;
///
/// assert_eq!(fragment_id("#controls"), Some("controls"));
/// assert_eq!(fragment_id("#"), None);
/// assert_eq!(fragment_id("about.html#team"), None);
/// ```
#[must_use]
pub fn fragment_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// True if focusing an element requires adding `tabindex="-1"` first.
///
/// `tag_name` is the upper-case `Element.tagName`. Links count as focusable
/// only when they have an `href`.
#[must_use]
pub fn needs_temporary_tabindex(tag_name: &str, has_tabindex: bool, has_href: bool) -> bool {
    if has_tabindex {
        return false;
    }
    let tag = tag_name.to_ascii_uppercase();
    if (tag == "A" || tag == "AREA") && has_href {
        return false;
    }
    !NATIVELY_FOCUSABLE.contains(&tag.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fragment_id() {
        assert_eq!(fragment_id("#main-content"), Some("main-content"));
        assert_eq!(fragment_id("#a"), Some("a"));
    }

    #[test]
    fn test_bare_hash_ignored() {
        assert_eq!(fragment_id("#"), None);
        assert_eq!(fragment_id(""), None);
    }

    #[test]
    fn test_non_fragment_ignored() {
        assert_eq!(fragment_id("index.html"), None);
        assert_eq!(fragment_id("/about.html#team"), None);
    }

    #[test]
    fn test_sections_need_tabindex() {
        assert!(needs_temporary_tabindex("SECTION", false, false));
        assert!(needs_temporary_tabindex("H2", false, false));
        assert!(needs_temporary_tabindex("DIV", false, false));
    }

    #[test]
    fn test_existing_tabindex_kept() {
        assert!(!needs_temporary_tabindex("SECTION", true, false));
    }

    #[test]
    fn test_form_controls_focusable() {
        assert!(!needs_temporary_tabindex("BUTTON", false, false));
        assert!(!needs_temporary_tabindex("input", false, false));
        assert!(!needs_temporary_tabindex("TEXTAREA", false, false));
    }

    #[test]
    fn test_links_focusable_only_with_href() {
        assert!(!needs_temporary_tabindex("A", false, true));
        assert!(needs_temporary_tabindex("A", false, false));
    }
}
