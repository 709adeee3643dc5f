//! Allow-list predicates.

use crate::Dimension;

/// Returns `true` iff `value` is non-empty and appears verbatim in the
/// allow-list of `dimension`.
///
/// No trimming or case folding is performed.
///
/// # Example
///
/// ```rust
/// use bulmers_tokens::{is_valid, Dimension};
///
/// assert!(is_valid(Dimension::Color, "primary"));
/// assert!(!is_valid(Dimension::Color, "Primary"));
/// assert!(!is_valid(Dimension::Color, "#00d1b2"));
/// ```
pub fn is_valid(dimension: Dimension, value: &str) -> bool {
    !value.is_empty() && dimension.allowed().contains(&value)
}

/// Like [`is_valid`], treating a missing value as invalid.
pub fn is_valid_opt(dimension: Dimension, value: Option<&str>) -> bool {
    value.is_some_and(|v| is_valid(dimension, v))
}

/// Returns the breakpoint suffix for `viewport`, restricted to its `-only`
/// range when `only` is set and such a variant exists.
///
/// Returns `None` for an unknown viewport.
///
/// ```rust
/// use bulmers_tokens::viewport_suffix;
///
/// assert_eq!(viewport_suffix("tablet", true).as_deref(), Some("tablet-only"));
/// assert_eq!(viewport_suffix("mobile", true).as_deref(), Some("mobile"));
/// assert_eq!(viewport_suffix("phone", false), None);
/// ```
pub fn viewport_suffix(viewport: &str, only: bool) -> Option<String> {
    if !is_valid(Dimension::Viewport, viewport) {
        return None;
    }
    if only {
        let restricted = format!("{}-only", viewport);
        if is_valid(Dimension::Viewport, &restricted) {
            return Some(restricted);
        }
    }
    Some(viewport.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_empty_is_never_valid() {
        for dim in Dimension::ALL {
            assert!(!is_valid(*dim, ""));
        }
    }

    #[test]
    fn test_no_normalization() {
        assert!(is_valid(Dimension::Spacing, "2"));
        assert!(!is_valid(Dimension::Spacing, " 2"));
        assert!(!is_valid(Dimension::Spacing, "2 "));
        assert!(!is_valid(Dimension::Display, "FLEX"));
    }

    #[test]
    fn test_is_valid_opt_none() {
        assert!(!is_valid_opt(Dimension::Color, None));
        assert!(is_valid_opt(Dimension::Color, Some("danger")));
    }

    #[test]
    fn test_dimensions_are_independent() {
        assert!(is_valid(Dimension::TextSize, "7"));
        assert!(!is_valid(Dimension::Spacing, "7"));
        assert!(is_valid(Dimension::AlignSelf, "auto"));
        assert!(!is_valid(Dimension::AlignItems, "auto"));
    }

    #[test]
    fn test_viewport_suffix_only_variants() {
        assert_eq!(viewport_suffix("desktop", true).as_deref(), Some("desktop-only"));
        assert_eq!(viewport_suffix("fullhd", true).as_deref(), Some("fullhd"));
        assert_eq!(viewport_suffix("touch", false).as_deref(), Some("touch"));
        assert_eq!(viewport_suffix("", false), None);
    }

    proptest! {
        #[test]
        fn test_every_table_entry_is_valid(idx in any::<prop::sample::Index>()) {
            for dim in Dimension::ALL {
                let table = dim.allowed();
                let value = table[idx.index(table.len())];
                prop_assert!(is_valid(*dim, value));
            }
        }

        #[test]
        fn test_uppercased_entries_are_rejected(idx in any::<prop::sample::Index>()) {
            let table = Dimension::Color.allowed();
            let value = table[idx.index(table.len())].to_uppercase();
            prop_assert!(!is_valid(Dimension::Color, &value));
        }

        #[test]
        fn test_strings_outside_the_table_are_rejected(s in "[a-z#0-9-]{0,12}") {
            prop_assume!(!Dimension::Color.allowed().contains(&s.as_str()));
            prop_assert!(!is_valid(Dimension::Color, &s));
        }
    }
}
