//! # bulmers - style configuration to Bulma class compiler
//!
//! `bulmers` turns a loosely-typed style configuration (`color`, spacing,
//! typography, layout, visibility, responsive breakpoints) into Bulma
//! utility classes, namespaced by a tree-scoped class prefix.
//!
//! ## Core concepts
//!
//! - [`StyleConfig`]: the incoming configuration object
//! - [`assemble`]: compiles it into class tokens plus the pass-through rest
//! - [`ThemeScope`] / [`ScopeContext`]: class prefix and default icon
//!   library, passed explicitly down the element tree
//! - [`prefixed`]: an element's own base class and modifiers
//! - [`merge`] / [`classes!`]: joins class sources into one string
//!
//! ## Quick start
//!
//! ```rust
//! use bulmers::{compose, ScopeContext, StyleConfig, ThemeScope};
//!
//! let root = ScopeContext::root();
//! let ctx = root.declare(ThemeScope::new().with_class_prefix("bulma-"));
//!
//! let config = StyleConfig::new()
//!     .with("color", "primary")
//!     .with("m", "2")
//!     .with("className", "extra")
//!     .with("id", "save");
//!
//! let out = compose(&ctx, "button", [("is-rounded", true)], &config);
//! assert_eq!(
//!     out.class,
//!     "bulma-button bulma-is-rounded bulma-has-text-primary bulma-m-2 extra"
//! );
//! assert!(out.rest.contains_key("id"));
//! ```
//!
//! The engine never fails: values outside a dimension's allow-list are
//! dropped (and logged at `debug` level through the `log` facade).

pub mod assemble;
pub mod merge;
mod prefix;
mod props;
pub mod scope;

pub use assemble::{
    assemble, category_of, is_recognized_key, recognized_keys, Assembled, Category,
};
pub use bulmers_tokens::{is_valid, is_valid_opt, Dimension, UnknownDimension};
pub use merge::{merge, ClassArg};
pub use prefix::prefixed;
pub use props::{Props, StyleConfig};
pub use scope::{IconLibrary, ScopeContext, ScopeError, ThemeScope, UnknownIconLibrary};

/// Attributes for one rendered element.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Composed {
    /// The full class attribute.
    pub class: String,
    /// Fields forwarded to the element unchanged.
    pub rest: Props,
}

/// Builds an element's attributes from its base class, modifiers and
/// configuration, under the scope resolved from `ctx`.
///
/// The class is, in order: the prefixed base and enabled modifiers, the
/// assembled style tokens, and the caller's own `className`, unprefixed.
pub fn compose<'m, I>(
    ctx: &ScopeContext<'_>,
    base: &str,
    modifiers: I,
    config: &StyleConfig,
) -> Composed
where
    I: IntoIterator<Item = (&'m str, bool)>,
{
    let scope = ctx.resolve();
    let own = prefixed(scope, base, modifiers);
    let assembled = assemble(config, scope);
    let class = crate::classes!(own, assembled.class_string());
    Composed {
        class,
        rest: assembled.rest,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_without_scope() {
        let root = ScopeContext::root();
        let config = StyleConfig::new().with("textSize", 3).with("viewport", "mobile");
        let out = compose(&root, "title", [], &config);
        assert_eq!(out.class, "title is-size-3-mobile");
        assert!(out.rest.is_empty());
    }

    #[test]
    fn test_compose_empty_everything() {
        let out = compose(&ScopeContext::root(), "", [], &StyleConfig::new());
        assert_eq!(out, Composed::default());
    }

    #[test]
    fn test_compose_uses_nearest_scope() {
        let root = ScopeContext::root();
        let outer = root.declare(ThemeScope::new().with_class_prefix("x-"));
        let inner = outer.declare(ThemeScope::new().with_icon_library(IconLibrary::Mdi));
        let config = StyleConfig::new().with("display", "flex");

        assert_eq!(compose(&outer, "box", [], &config).class, "x-box x-is-flex");
        assert_eq!(compose(&inner, "box", [], &config).class, "box is-flex");
    }
}
