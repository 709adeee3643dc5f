//! # bulmers-tokens
//!
//! The vocabulary layer of bulmers: one exact-match allow-list per style
//! dimension, and the predicates that test candidate values against them.
//!
//! This crate knows nothing about configuration objects or class synthesis.
//! A value missing from its dimension's table is simply "not supplied";
//! nothing here ever fails.
//!
//! ```rust
//! use bulmers_tokens::{is_valid, Dimension};
//!
//! assert!(is_valid(Dimension::Viewport, "tablet"));
//! assert!(!is_valid(Dimension::Viewport, "phone"));
//! ```

mod dimension;
pub mod tables;
mod validate;

pub use dimension::{Dimension, UnknownDimension};
pub use validate::{is_valid, is_valid_opt, viewport_suffix};
