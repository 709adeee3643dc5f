//! Tree-scoped theming: class prefix and default icon library.
//!
//! - [`ThemeScope`]: one declaration, loadable from YAML/JSON
//! - [`ScopeContext`]: explicit context threaded through nested subtrees
//! - [`IconLibrary`]: closed set of icon font families
//! - [`ScopeError`]: errors from loading a declaration

mod context;
mod error;
mod icon;
mod theme_scope;

pub use context::ScopeContext;
pub use error::ScopeError;
pub use icon::{IconLibrary, UnknownIconLibrary};
pub use theme_scope::ThemeScope;
