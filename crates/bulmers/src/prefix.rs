//! Prefixing a base class and its modifiers.

use crate::merge::merge;
use crate::scope::ThemeScope;

/// Builds the class string for a base token and its enabled modifiers,
/// prefixing each of them with the scope's class prefix.
///
/// An empty base contributes nothing. Without a prefix the tokens are
/// emitted as given.
///
/// # Example
///
/// ```rust
/// use bulmers::{prefixed, ThemeScope};
///
/// let scope = ThemeScope::new().with_class_prefix("bulma-");
/// let class = prefixed(&scope, "button", [("is-loading", true), ("is-static", false)]);
/// assert_eq!(class, "bulma-button bulma-is-loading");
/// ```
pub fn prefixed<'m, I>(scope: &ThemeScope, base: &str, modifiers: I) -> String
where
    I: IntoIterator<Item = (&'m str, bool)>,
{
    let enabled = modifiers
        .into_iter()
        .filter(|(_, on)| *on)
        .map(|(token, _)| scope.prefix(token));
    merge(std::iter::once(scope.prefix(base)).chain(enabled))
}
