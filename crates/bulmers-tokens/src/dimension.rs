//! The closed set of style dimensions.
//!
//! A [`Dimension`] names one allow-list table. Dimensions are identified on
//! the command line and in diagnostics by their kebab-case name, e.g.
//! `"justify-content"`.

use std::str::FromStr;

use crate::tables;

/// A style dimension owning one allow-list of literal values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Dimension {
    /// Named text and background colors.
    Color,
    /// Margin/padding scale, `0`-`6` and `auto`.
    Spacing,
    /// Heading-style text sizes `1`-`7`.
    TextSize,
    TextAlign,
    TextWeight,
    TextTransform,
    TextFamily,
    /// CSS `display` values that have a helper class.
    Display,
    FlexDirection,
    FlexWrap,
    JustifyContent,
    AlignContent,
    AlignItems,
    AlignSelf,
    /// Shared by `flex-grow` and `flex-shrink`.
    FlexFactor,
    /// Float helpers.
    Pull,
    /// Responsive breakpoints.
    Viewport,
}

impl Dimension {
    /// Every dimension, in declaration order.
    pub const ALL: &'static [Dimension] = &[
        Dimension::Color,
        Dimension::Spacing,
        Dimension::TextSize,
        Dimension::TextAlign,
        Dimension::TextWeight,
        Dimension::TextTransform,
        Dimension::TextFamily,
        Dimension::Display,
        Dimension::FlexDirection,
        Dimension::FlexWrap,
        Dimension::JustifyContent,
        Dimension::AlignContent,
        Dimension::AlignItems,
        Dimension::AlignSelf,
        Dimension::FlexFactor,
        Dimension::Pull,
        Dimension::Viewport,
    ];

    /// Returns the allow-list for this dimension.
    pub fn allowed(self) -> &'static [&'static str] {
        match self {
            Dimension::Color => tables::COLORS,
            Dimension::Spacing => tables::SPACING,
            Dimension::TextSize => tables::TEXT_SIZES,
            Dimension::TextAlign => tables::TEXT_ALIGNMENTS,
            Dimension::TextWeight => tables::TEXT_WEIGHTS,
            Dimension::TextTransform => tables::TEXT_TRANSFORMS,
            Dimension::TextFamily => tables::TEXT_FAMILIES,
            Dimension::Display => tables::DISPLAYS,
            Dimension::FlexDirection => tables::FLEX_DIRECTIONS,
            Dimension::FlexWrap => tables::FLEX_WRAPS,
            Dimension::JustifyContent => tables::JUSTIFY_CONTENT,
            Dimension::AlignContent => tables::ALIGN_CONTENT,
            Dimension::AlignItems => tables::ALIGN_ITEMS,
            Dimension::AlignSelf => tables::ALIGN_SELF,
            Dimension::FlexFactor => tables::FLEX_FACTORS,
            Dimension::Pull => tables::PULLS,
            Dimension::Viewport => tables::VIEWPORTS,
        }
    }

    /// Returns `true` if `value` is a member of this dimension's allow-list.
    ///
    /// Same as [`is_valid`](crate::is_valid).
    pub fn accepts(self, value: &str) -> bool {
        crate::is_valid(self, value)
    }

    /// Returns the kebab-case name of this dimension.
    pub fn as_str(self) -> &'static str {
        match self {
            Dimension::Color => "color",
            Dimension::Spacing => "spacing",
            Dimension::TextSize => "text-size",
            Dimension::TextAlign => "text-align",
            Dimension::TextWeight => "text-weight",
            Dimension::TextTransform => "text-transform",
            Dimension::TextFamily => "text-family",
            Dimension::Display => "display",
            Dimension::FlexDirection => "flex-direction",
            Dimension::FlexWrap => "flex-wrap",
            Dimension::JustifyContent => "justify-content",
            Dimension::AlignContent => "align-content",
            Dimension::AlignItems => "align-items",
            Dimension::AlignSelf => "align-self",
            Dimension::FlexFactor => "flex-factor",
            Dimension::Pull => "pull",
            Dimension::Viewport => "viewport",
        }
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a dimension name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown dimension '{name}'. Available: {}", available_names())]
pub struct UnknownDimension {
    pub name: String,
}

fn available_names() -> String {
    Dimension::ALL
        .iter()
        .map(|d| d.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

impl FromStr for Dimension {
    type Err = UnknownDimension;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Dimension::ALL
            .iter()
            .copied()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| UnknownDimension {
                name: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_round_trips_for_every_dimension() {
        for dim in Dimension::ALL {
            assert_eq!(dim.as_str().parse::<Dimension>(), Ok(*dim));
        }
    }

    #[test]
    fn test_unknown_dimension_lists_available() {
        let err = "colour".parse::<Dimension>().unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("'colour'"));
        assert!(msg.contains("justify-content"));
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert!("Color".parse::<Dimension>().is_err());
    }

    #[test]
    fn test_every_dimension_has_a_table() {
        for dim in Dimension::ALL {
            assert!(!dim.allowed().is_empty(), "{} has no values", dim);
        }
    }
}
