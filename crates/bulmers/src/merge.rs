//! Combining heterogeneous class sources into one class string.
//!
//! [`merge`] accepts anything convertible into a [`ClassArg`]: plain strings,
//! optional strings, booleans (which never contribute), and ordered
//! `(token, enabled)` toggle lists. Surviving tokens are joined with single
//! spaces in input order. Duplicates are kept.
//!
//! The [`classes!`](crate::classes) macro accepts mixed argument types:
//!
//! ```rust
//! use bulmers::classes;
//!
//! let loading = false;
//! let class = classes!(
//!     "button",
//!     loading.then_some("is-loading"),
//!     "is-primary",
//!     [("is-large", true), ("is-rounded", false)],
//! );
//! assert_eq!(class, "button is-primary is-large");
//! ```

use std::borrow::Cow;

/// One argument to [`merge`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassArg<'a> {
    /// A token contributed verbatim unless empty.
    Token(Cow<'a, str>),
    /// Tokens contributed in order when their flag is `true`.
    Toggles(Vec<(Cow<'a, str>, bool)>),
    /// Contributes nothing (`false`, `None`).
    Skip,
}

impl<'a> ClassArg<'a> {
    fn push_into(self, out: &mut String) {
        match self {
            ClassArg::Token(token) => push_token(out, &token),
            ClassArg::Toggles(toggles) => {
                for (token, enabled) in toggles {
                    if enabled {
                        push_token(out, &token);
                    }
                }
            }
            ClassArg::Skip => {}
        }
    }
}

fn push_token(out: &mut String, token: &str) {
    if token.is_empty() {
        return;
    }
    if !out.is_empty() {
        out.push(' ');
    }
    out.push_str(token);
}

impl<'a> From<&'a str> for ClassArg<'a> {
    fn from(s: &'a str) -> Self {
        ClassArg::Token(Cow::Borrowed(s))
    }
}

impl<'a> From<&'a String> for ClassArg<'a> {
    fn from(s: &'a String) -> Self {
        ClassArg::Token(Cow::Borrowed(s.as_str()))
    }
}

impl From<String> for ClassArg<'_> {
    fn from(s: String) -> Self {
        ClassArg::Token(Cow::Owned(s))
    }
}

impl<'a> From<Cow<'a, str>> for ClassArg<'a> {
    fn from(s: Cow<'a, str>) -> Self {
        ClassArg::Token(s)
    }
}

/// Booleans never contribute a token, so `cond && "x"`-style guards are
/// written as `cond.then_some("x")`.
impl From<bool> for ClassArg<'_> {
    fn from(_: bool) -> Self {
        ClassArg::Skip
    }
}

impl<'a, T: Into<ClassArg<'a>>> From<Option<T>> for ClassArg<'a> {
    fn from(value: Option<T>) -> Self {
        value.map_or(ClassArg::Skip, Into::into)
    }
}

impl<'a> From<&'a [(&'a str, bool)]> for ClassArg<'a> {
    fn from(toggles: &'a [(&'a str, bool)]) -> Self {
        ClassArg::Toggles(
            toggles
                .iter()
                .map(|(token, on)| (Cow::Borrowed(*token), *on))
                .collect(),
        )
    }
}

impl<'a, const N: usize> From<[(&'a str, bool); N]> for ClassArg<'a> {
    fn from(toggles: [(&'a str, bool); N]) -> Self {
        ClassArg::Toggles(
            toggles
                .into_iter()
                .map(|(token, on)| (Cow::Borrowed(token), on))
                .collect(),
        )
    }
}

impl<'a> From<Vec<(String, bool)>> for ClassArg<'a> {
    fn from(toggles: Vec<(String, bool)>) -> Self {
        ClassArg::Toggles(
            toggles
                .into_iter()
                .map(|(token, on)| (Cow::Owned(token), on))
                .collect(),
        )
    }
}

/// Merges class sources into a single space-separated string.
///
/// # Example
///
/// ```rust
/// use bulmers::merge;
///
/// assert_eq!(merge(["a", "", "b"]), "a b");
/// ```
pub fn merge<'a, I>(args: I) -> String
where
    I: IntoIterator,
    I::Item: Into<ClassArg<'a>>,
{
    let mut out = String::new();
    for arg in args {
        arg.into().push_into(&mut out);
    }
    out
}

#[doc(hidden)]
pub fn merge_args(args: Vec<ClassArg<'_>>) -> String {
    merge(args)
}

/// Merges mixed class sources; see the [module docs](crate::merge).
#[macro_export]
macro_rules! classes {
    ($($arg:expr),* $(,)?) => {
        $crate::merge::merge_args(::std::vec![$($crate::merge::ClassArg::from($arg)),*])
    };
}
