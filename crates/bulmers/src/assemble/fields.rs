//! The closed set of recognized style keys and their class templates.

use std::borrow::Cow;
use std::collections::HashMap;

use bulmers_tokens::{is_valid, Dimension};
use once_cell::sync::Lazy;
use serde_json::Value;

/// Style categories, in the order their tokens are emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Color,
    Spacing,
    Typography,
    Layout,
    Visibility,
}

/// How a field's value becomes a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Template {
    /// `<stem><value>`, the value checked against `dimension`.
    Value {
        stem: &'static str,
        dimension: Dimension,
    },
    /// `token`, emitted only for a JSON `true`.
    Flag { token: &'static str },
}

/// One recognized configuration key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldSpec {
    pub key: &'static str,
    pub category: Category,
    pub template: Template,
    /// Whether a valid `viewport` appends a `-<breakpoint>` suffix.
    pub scoped: bool,
}

const fn value(
    key: &'static str,
    category: Category,
    stem: &'static str,
    dimension: Dimension,
    scoped: bool,
) -> FieldSpec {
    FieldSpec {
        key,
        category,
        template: Template::Value { stem, dimension },
        scoped,
    }
}

const fn flag(key: &'static str, category: Category, token: &'static str, scoped: bool) -> FieldSpec {
    FieldSpec {
        key,
        category,
        template: Template::Flag { token },
        scoped,
    }
}

use Category::*;

/// Every value-bearing style key, in emission order.
pub(crate) const FIELDS: &[FieldSpec] = &[
    value("color", Color, "has-text-", Dimension::Color, false),
    value("textColor", Color, "has-text-", Dimension::Color, false),
    value("backgroundColor", Color, "has-background-", Dimension::Color, false),
    value("bgColor", Color, "has-background-", Dimension::Color, false),
    value("m", Spacing, "m-", Dimension::Spacing, false),
    value("mt", Spacing, "mt-", Dimension::Spacing, false),
    value("mr", Spacing, "mr-", Dimension::Spacing, false),
    value("mb", Spacing, "mb-", Dimension::Spacing, false),
    value("ml", Spacing, "ml-", Dimension::Spacing, false),
    value("mx", Spacing, "mx-", Dimension::Spacing, false),
    value("my", Spacing, "my-", Dimension::Spacing, false),
    value("p", Spacing, "p-", Dimension::Spacing, false),
    value("pt", Spacing, "pt-", Dimension::Spacing, false),
    value("pr", Spacing, "pr-", Dimension::Spacing, false),
    value("pb", Spacing, "pb-", Dimension::Spacing, false),
    value("pl", Spacing, "pl-", Dimension::Spacing, false),
    value("px", Spacing, "px-", Dimension::Spacing, false),
    value("py", Spacing, "py-", Dimension::Spacing, false),
    value("textSize", Typography, "is-size-", Dimension::TextSize, true),
    value("textAlign", Typography, "has-text-", Dimension::TextAlign, true),
    value("textWeight", Typography, "has-text-weight-", Dimension::TextWeight, false),
    value("textTransform", Typography, "is-", Dimension::TextTransform, false),
    value("textFamily", Typography, "is-family-", Dimension::TextFamily, false),
    flag("italic", Typography, "is-italic", false),
    value("display", Layout, "is-", Dimension::Display, true),
    value("flexDirection", Layout, "is-flex-direction-", Dimension::FlexDirection, false),
    value("flexWrap", Layout, "is-flex-wrap-", Dimension::FlexWrap, false),
    value("justifyContent", Layout, "is-justify-content-", Dimension::JustifyContent, false),
    value("alignContent", Layout, "is-align-content-", Dimension::AlignContent, false),
    value("alignItems", Layout, "is-align-items-", Dimension::AlignItems, false),
    value("alignSelf", Layout, "is-align-self-", Dimension::AlignSelf, false),
    value("flexGrow", Layout, "is-flex-grow-", Dimension::FlexFactor, false),
    value("flexShrink", Layout, "is-flex-shrink-", Dimension::FlexFactor, false),
    value("pull", Layout, "is-pulled-", Dimension::Pull, false),
    flag("clearfix", Layout, "is-clearfix", false),
    flag("marginless", Layout, "is-marginless", false),
    flag("paddingless", Layout, "is-paddingless", false),
    flag("overlay", Layout, "is-overlay", false),
    flag("clipped", Layout, "is-clipped", false),
    flag("radiusless", Layout, "is-radiusless", false),
    flag("shadowless", Layout, "is-shadowless", false),
    flag("unselectable", Layout, "is-unselectable", false),
    flag("clickable", Layout, "is-clickable", false),
    flag("relative", Layout, "is-relative", false),
    flag("hidden", Visibility, "is-hidden", true),
    flag("invisible", Visibility, "is-invisible", true),
    flag("srOnly", Visibility, "is-sr-only", false),
];

/// The breakpoint applied to scoped fields. Consumed, never a token.
pub(crate) const VIEWPORT_KEY: &str = "viewport";

/// Per-breakpoint blocks, emitted after every field in [`FIELDS`].
pub(crate) const RESPONSIVE_KEYS: &[&str] =
    &["mobile", "tablet", "desktop", "widescreen", "fullhd", "touch"];

static FIELD_INDEX: Lazy<HashMap<&'static str, &'static FieldSpec>> =
    Lazy::new(|| FIELDS.iter().map(|spec| (spec.key, spec)).collect());

pub(crate) fn lookup(key: &str) -> Option<&'static FieldSpec> {
    FIELD_INDEX.get(key).copied()
}

/// Returns `true` if `key` is consumed by the assembler.
pub fn is_recognized_key(key: &str) -> bool {
    key == VIEWPORT_KEY || lookup(key).is_some() || RESPONSIVE_KEYS.contains(&key)
}

/// Returns the category a recognized key is emitted under.
pub fn category_of(key: &str) -> Option<Category> {
    match lookup(key) {
        Some(spec) => Some(spec.category),
        None if is_recognized_key(key) => Some(Category::Visibility),
        None => None,
    }
}

/// Every key the assembler consumes, in emission order.
pub fn recognized_keys() -> impl Iterator<Item = &'static str> {
    FIELDS
        .iter()
        .map(|spec| spec.key)
        .chain(std::iter::once(VIEWPORT_KEY))
        .chain(RESPONSIVE_KEYS.iter().copied())
}

/// Reads a field value as a literal.
///
/// Strings are taken verbatim and non-negative integers as their decimal
/// text. Everything else has no literal form.
pub(crate) fn literal(value: &Value) -> Option<Cow<'_, str>> {
    match value {
        Value::String(s) => Some(Cow::Borrowed(s.as_str())),
        Value::Number(n) => n.as_u64().map(|n| Cow::Owned(n.to_string())),
        _ => None,
    }
}

impl Template {
    /// Renders the unscoped token for `value`, or `None` if it is invalid.
    pub(crate) fn render(&self, value: &Value) -> Option<String> {
        match *self {
            Template::Value { stem, dimension } => {
                let literal = literal(value)?;
                is_valid(dimension, &literal).then(|| format!("{}{}", stem, literal))
            }
            Template::Flag { token } => (value.as_bool() == Some(true)).then(|| token.to_string()),
        }
    }
}
