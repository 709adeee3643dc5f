//! Per-breakpoint style blocks.
//!
//! A block such as `"tablet": { "display": "flex", "only": true }` scopes
//! each of its entries to one breakpoint, producing `is-flex-tablet-only`.

use bulmers_tokens::{is_valid, viewport_suffix, Dimension};
use serde_json::Value;

use super::fields::literal;

/// Entries a block may carry, in emission order.
const BLOCK_VALUES: &[(&str, &str, Dimension)] = &[
    ("display", "is-", Dimension::Display),
    ("textSize", "is-size-", Dimension::TextSize),
    ("textAlign", "has-text-", Dimension::TextAlign),
];

const BLOCK_FLAGS: &[(&str, &str)] = &[("hidden", "is-hidden"), ("invisible", "is-invisible")];

/// Returns the unprefixed tokens for the block under `viewport`.
///
/// A block that is not an object yields nothing; unknown entries are
/// ignored.
pub(crate) fn block_tokens(viewport: &str, block: &Value) -> Vec<String> {
    let Some(entries) = block.as_object() else {
        log::debug!("ignoring non-object responsive block `{}`", viewport);
        return Vec::new();
    };

    let only = entries.get("only").and_then(Value::as_bool).unwrap_or(false);
    let Some(suffix) = viewport_suffix(viewport, only) else {
        return Vec::new();
    };

    let mut tokens = Vec::new();
    for (key, stem, dimension) in BLOCK_VALUES {
        let Some(value) = entries.get(*key) else {
            continue;
        };
        match literal(value) {
            Some(literal) if is_valid(*dimension, &literal) => {
                tokens.push(format!("{}{}-{}", stem, literal, suffix));
            }
            _ => log::debug!("dropping invalid value {} for `{}.{}`", value, viewport, key),
        }
    }
    for (key, token) in BLOCK_FLAGS {
        if entries.get(*key).and_then(Value::as_bool) == Some(true) {
            tokens.push(format!("{}-{}", token, suffix));
        }
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_block_values_in_order() {
        let block = json!({"textAlign": "centered", "display": "flex", "textSize": 3});
        assert_eq!(
            block_tokens("mobile", &block),
            vec!["is-flex-mobile", "is-size-3-mobile", "has-text-centered-mobile"]
        );
    }

    #[test]
    fn test_block_only_variant() {
        let block = json!({"display": "block", "only": true});
        assert_eq!(block_tokens("tablet", &block), vec!["is-block-tablet-only"]);
    }

    #[test]
    fn test_block_only_without_variant_falls_back() {
        let block = json!({"hidden": true, "only": true});
        assert_eq!(block_tokens("fullhd", &block), vec!["is-hidden-fullhd"]);
    }

    #[test]
    fn test_block_flags() {
        let block = json!({"hidden": true, "invisible": false});
        assert_eq!(block_tokens("touch", &block), vec!["is-hidden-touch"]);
    }

    #[test]
    fn test_block_drops_invalid_and_unknown_entries() {
        let block = json!({"display": "grid", "color": "primary", "textSize": 9});
        assert!(block_tokens("desktop", &block).is_empty());
    }

    #[test]
    fn test_non_object_block() {
        assert!(block_tokens("desktop", &json!("flex")).is_empty());
        assert!(block_tokens("desktop", &json!(null)).is_empty());
    }
}
