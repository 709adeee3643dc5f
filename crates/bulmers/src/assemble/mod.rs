//! Style configuration to class token compilation.
//!
//! [`assemble`] walks the recognized keys in a fixed order:
//!
//! | Category | Keys |
//! |----------|------|
//! | Color | `color`, `textColor`, `backgroundColor`, `bgColor` |
//! | Spacing | `m`, `mt` … `my`, `p`, `pt` … `py` |
//! | Typography | `textSize`, `textAlign`, `textWeight`, `textTransform`, `textFamily`, `italic` |
//! | Layout | `display`, flexbox helpers, `pull`, helper flags |
//! | Visibility | `hidden`, `invisible`, `srOnly`, per-breakpoint blocks |
//!
//! A recognized key is always consumed, whether or not its value passed
//! validation. Unrecognized keys are returned untouched in
//! [`Assembled::rest`].
//!
//! Fields marked as viewport-scoped (`textSize`, `textAlign`, `display`,
//! `hidden`, `invisible`) get a `-<breakpoint>` suffix when the
//! configuration also carries a valid `viewport`.

mod fields;
mod responsive;

use std::collections::HashSet;

use bulmers_tokens::{is_valid, Dimension};
use serde_json::Value;

use crate::merge::merge;
use crate::props::{Props, StyleConfig};
use crate::scope::ThemeScope;

pub use fields::{category_of, is_recognized_key, recognized_keys, Category};
use fields::{literal, FIELDS, RESPONSIVE_KEYS, VIEWPORT_KEY};

/// Result of assembling a configuration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Assembled {
    /// Class tokens, prefixed, in category order.
    pub tokens: Vec<String>,
    /// Fields no style dimension recognized, in input order.
    pub rest: Props,
    /// Recognized keys found in the input, in emission order.
    pub consumed: Vec<&'static str>,
}

impl Assembled {
    /// Merges the tokens with a caller-supplied `className` from
    /// [`rest`](Self::rest). The caller's classes are never prefixed.
    pub fn class_string(&self) -> String {
        let class_name = self.rest.get("className").and_then(Value::as_str);
        let mut out = merge(self.tokens.iter());
        if let Some(extra) = class_name.filter(|c| !c.is_empty()) {
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(extra);
        }
        out
    }
}

/// Compiles a style configuration into class tokens and its residual
/// pass-through fields.
///
/// Never fails: invalid values are dropped silently.
///
/// # Example
///
/// ```rust
/// use bulmers::{assemble, StyleConfig, ThemeScope};
///
/// let config = StyleConfig::new()
///     .with("color", "primary")
///     .with("m", "2")
///     .with("onClick", "handler");
/// let scope = ThemeScope::new().with_class_prefix("bulma-");
///
/// let out = assemble(&config, &scope);
/// assert_eq!(out.tokens, vec!["bulma-has-text-primary", "bulma-m-2"]);
/// assert!(out.rest.contains_key("onClick"));
/// ```
pub fn assemble(config: &StyleConfig, scope: &ThemeScope) -> Assembled {
    let fields = config.fields();
    let viewport = scope_viewport(fields);

    let mut tokens = Vec::new();
    let mut consumed = Vec::new();

    for spec in FIELDS {
        let Some(value) = fields.get(spec.key) else {
            continue;
        };
        consumed.push(spec.key);
        match spec.template.render(value) {
            Some(token) => {
                let token = match viewport.as_deref() {
                    Some(vp) if spec.scoped => format!("{}-{}", token, vp),
                    _ => token,
                };
                log::trace!("`{}` -> {}", spec.key, token);
                tokens.push(scope.prefix(&token).into_owned());
            }
            None => log::debug!("dropping invalid value {} for style field `{}`", value, spec.key),
        }
    }

    if fields.contains_key(VIEWPORT_KEY) {
        consumed.push(VIEWPORT_KEY);
    }

    for key in RESPONSIVE_KEYS {
        let Some(block) = fields.get(*key) else {
            continue;
        };
        consumed.push(*key);
        for token in responsive::block_tokens(key, block) {
            log::trace!("`{}` -> {}", key, token);
            tokens.push(scope.prefix(&token).into_owned());
        }
    }

    let consumed_set: HashSet<&str> = consumed.iter().copied().collect();
    let rest = fields
        .iter()
        .filter(|(key, _)| !consumed_set.contains(key.as_str()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();

    Assembled {
        tokens,
        rest,
        consumed,
    }
}

/// Returns the configured breakpoint, if present and valid.
fn scope_viewport(fields: &Props) -> Option<String> {
    let value = fields.get(VIEWPORT_KEY)?;
    match literal(value) {
        Some(vp) if is_valid(Dimension::Viewport, &vp) => Some(vp.into_owned()),
        _ => {
            log::debug!("ignoring invalid viewport {}", value);
            None
        }
    }
}
