//! The theme scope declaration.

use std::borrow::Cow;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::ScopeError;
use super::icon::IconLibrary;

/// Read-only configuration for one subtree of rendered elements.
///
/// Both options are independent: an unset option means "no prefix" or
/// "no default icon library", never "whatever the enclosing scope said".
///
/// # Example
///
/// ```rust
/// use bulmers::{IconLibrary, ThemeScope};
///
/// let scope = ThemeScope::new()
///     .with_class_prefix("bulma-")
///     .with_icon_library(IconLibrary::Mdi);
///
/// assert_eq!(scope.prefix("button"), "bulma-button");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ThemeScope {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    class_prefix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    icon_library: Option<IconLibrary>,
}

/// Backing storage for borrowed references to [`ThemeScope::EMPTY`].
pub(crate) static EMPTY_SCOPE: ThemeScope = ThemeScope::EMPTY;

impl ThemeScope {
    /// The scope in effect when nothing has been declared.
    pub const EMPTY: ThemeScope = ThemeScope {
        class_prefix: None,
        icon_library: None,
    };

    /// Creates a scope with no prefix and no default icon library.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the prefix prepended to every synthesized class token.
    pub fn with_class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_prefix = Some(prefix.into());
        self
    }

    /// Sets the default icon font family.
    pub fn with_icon_library(mut self, library: IconLibrary) -> Self {
        self.icon_library = Some(library);
        self
    }

    /// Returns the active class prefix. An empty prefix counts as absent.
    pub fn class_prefix(&self) -> Option<&str> {
        self.class_prefix.as_deref().filter(|p| !p.is_empty())
    }

    pub fn icon_library(&self) -> Option<IconLibrary> {
        self.icon_library
    }

    /// Applies the class prefix to a synthesized token.
    ///
    /// Without a prefix this is the identity. An empty token stays empty so
    /// that it is still dropped by [`merge`](crate::merge()).
    pub fn prefix<'t>(&self, token: &'t str) -> Cow<'t, str> {
        match self.class_prefix() {
            Some(prefix) if !token.is_empty() => Cow::Owned(format!("{}{}", prefix, token)),
            _ => Cow::Borrowed(token),
        }
    }

    /// Parses a scope declaration from YAML or JSON text.
    ///
    /// Recognized options are `classPrefix` and `iconLibrary`; anything else
    /// is rejected.
    ///
    /// ```rust
    /// use bulmers::{IconLibrary, ThemeScope};
    ///
    /// let scope = ThemeScope::parse("classPrefix: x-\niconLibrary: fa\n").unwrap();
    /// assert_eq!(scope.class_prefix(), Some("x-"));
    /// assert_eq!(scope.icon_library(), Some(IconLibrary::Fa));
    /// ```
    pub fn parse(text: &str) -> Result<Self, ScopeError> {
        // An empty document means "no options".
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(text)?)
    }

    /// Loads a scope declaration from a YAML or JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ScopeError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ScopeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text)
    }
}
