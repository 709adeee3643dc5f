//! Explicit scope passing for nested subtrees.

use super::theme_scope::{ThemeScope, EMPTY_SCOPE};

/// A position in the tree of scope declarations.
///
/// Contexts are threaded explicitly: a parent hands `&ctx` to its children,
/// and a child that declares its own scope does so with
/// [`declare`](Self::declare), which borrows the parent for the lifetime of
/// the subtree. Dropping the child context ends the declaration.
///
/// Resolution returns the nearest declaration as-is. Declarations are never
/// merged field by field with their ancestors.
///
/// # Example
///
/// ```rust
/// use bulmers::{IconLibrary, ScopeContext, ThemeScope};
///
/// let root = ScopeContext::root();
/// let outer = root.declare(ThemeScope::new().with_class_prefix("x-"));
/// let inner = outer.declare(ThemeScope::new().with_icon_library(IconLibrary::Mdi));
///
/// assert_eq!(outer.resolve().class_prefix(), Some("x-"));
/// assert_eq!(inner.resolve().class_prefix(), None);
/// ```
#[derive(Debug, Clone)]
pub struct ScopeContext<'a> {
    declared: Option<ThemeScope>,
    parent: Option<&'a ScopeContext<'a>>,
}

impl ScopeContext<'static> {
    /// The context above every declaration. Resolves to
    /// [`ThemeScope::EMPTY`].
    pub fn root() -> Self {
        Self {
            declared: None,
            parent: None,
        }
    }
}

impl<'a> ScopeContext<'a> {
    /// Opens a nested subtree governed by `scope`.
    pub fn declare(&self, scope: ThemeScope) -> ScopeContext<'_> {
        ScopeContext {
            declared: Some(scope),
            parent: Some(self),
        }
    }

    /// Returns the nearest enclosing scope, or [`ThemeScope::EMPTY`].
    pub fn resolve(&self) -> &ThemeScope {
        let mut current = Some(self);
        while let Some(ctx) = current {
            if let Some(scope) = &ctx.declared {
                return scope;
            }
            current = ctx.parent;
        }
        &EMPTY_SCOPE
    }

    /// Returns the enclosing context, `None` at the root.
    pub fn parent(&self) -> Option<&ScopeContext<'a>> {
        self.parent
    }

    /// Number of declarations between this context and the root.
    pub fn depth(&self) -> usize {
        std::iter::successors(self.parent, |ctx| ctx.parent).count()
    }
}

impl Default for ScopeContext<'static> {
    fn default() -> Self {
        Self::root()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::IconLibrary;

    #[test]
    fn test_root_resolves_to_empty() {
        let root = ScopeContext::root();
        assert_eq!(root.resolve(), &ThemeScope::EMPTY);
        assert_eq!(root.depth(), 0);
        assert!(root.parent().is_none());
    }

    #[test]
    fn test_declaration_is_visible_to_its_subtree() {
        let root = ScopeContext::root();
        let scoped = root.declare(ThemeScope::new().with_class_prefix("bulma-"));
        assert_eq!(scoped.resolve().class_prefix(), Some("bulma-"));
        assert_eq!(scoped.depth(), 1);
    }

    #[test]
    fn test_nested_scope_overrides_without_merging() {
        let root = ScopeContext::root();
        let outer = root.declare(ThemeScope::new().with_class_prefix("x-"));
        let inner = outer.declare(ThemeScope::new().with_icon_library(IconLibrary::Mdi));

        let resolved = inner.resolve();
        assert_eq!(resolved.class_prefix(), None);
        assert_eq!(resolved.icon_library(), Some(IconLibrary::Mdi));
        assert_eq!(inner.depth(), 2);
    }

    #[test]
    fn test_inner_prefix_does_not_inherit_icon_library() {
        let root = ScopeContext::root();
        let outer = root.declare(ThemeScope::new().with_icon_library(IconLibrary::Fa));
        let inner = outer.declare(ThemeScope::new().with_class_prefix("y-"));

        assert_eq!(inner.resolve().icon_library(), None);
        assert_eq!(inner.resolve().class_prefix(), Some("y-"));
    }

    #[test]
    fn test_empty_declaration_resets_ancestor() {
        let root = ScopeContext::root();
        let outer = root.declare(ThemeScope::new().with_class_prefix("x-"));
        let inner = outer.declare(ThemeScope::new());
        assert_eq!(inner.resolve(), &ThemeScope::EMPTY);
    }

    #[test]
    fn test_siblings_are_independent() {
        let root = ScopeContext::root();
        let left = root.declare(ThemeScope::new().with_class_prefix("l-"));
        let right = root.declare(ThemeScope::new().with_class_prefix("r-"));
        assert_eq!(left.resolve().class_prefix(), Some("l-"));
        assert_eq!(right.resolve().class_prefix(), Some("r-"));
        assert_eq!(root.resolve().class_prefix(), None);
    }

    #[test]
    fn test_parent_after_subtree() {
        let root = ScopeContext::root();
        {
            let scoped = root.declare(ThemeScope::new().with_class_prefix("tmp-"));
            assert_eq!(
                scoped.parent().map(|p| p.resolve().clone()),
                Some(ThemeScope::EMPTY)
            );
        }
        assert_eq!(root.resolve(), &ThemeScope::EMPTY);
    }
}
