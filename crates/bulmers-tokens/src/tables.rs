//! Literal values accepted by each style dimension.
//!
//! Every table is an exact-match vocabulary: no case folding, no synonyms.
//! Order inside a table carries no meaning beyond documentation.

/// Named colors, including the grey scale and the light/dark variants.
pub const COLORS: &[&str] = &[
    "white",
    "black",
    "light",
    "dark",
    "primary",
    "link",
    "info",
    "success",
    "warning",
    "danger",
    "black-bis",
    "black-ter",
    "grey-darker",
    "grey-dark",
    "grey",
    "grey-light",
    "grey-lighter",
    "white-ter",
    "white-bis",
    "primary-light",
    "link-light",
    "info-light",
    "success-light",
    "warning-light",
    "danger-light",
    "primary-dark",
    "link-dark",
    "info-dark",
    "success-dark",
    "warning-dark",
    "danger-dark",
];

/// Margin and padding scale.
pub const SPACING: &[&str] = &["0", "1", "2", "3", "4", "5", "6", "auto"];

pub const TEXT_SIZES: &[&str] = &["1", "2", "3", "4", "5", "6", "7"];

pub const TEXT_ALIGNMENTS: &[&str] = &["centered", "justified", "left", "right"];

pub const TEXT_WEIGHTS: &[&str] = &["light", "normal", "medium", "semibold", "bold"];

pub const TEXT_TRANSFORMS: &[&str] = &["capitalized", "lowercase", "uppercase"];

pub const TEXT_FAMILIES: &[&str] = &["sans-serif", "monospace", "primary", "secondary", "code"];

pub const DISPLAYS: &[&str] = &["block", "flex", "inline", "inline-block", "inline-flex"];

pub const FLEX_DIRECTIONS: &[&str] = &["row", "row-reverse", "column", "column-reverse"];

pub const FLEX_WRAPS: &[&str] = &["nowrap", "wrap", "wrap-reverse"];

pub const JUSTIFY_CONTENT: &[&str] = &[
    "flex-start",
    "flex-end",
    "center",
    "space-between",
    "space-around",
    "space-evenly",
    "start",
    "end",
    "left",
    "right",
];

pub const ALIGN_CONTENT: &[&str] = &[
    "flex-start",
    "flex-end",
    "center",
    "space-between",
    "space-around",
    "space-evenly",
    "stretch",
    "start",
    "end",
    "baseline",
];

pub const ALIGN_ITEMS: &[&str] = &[
    "stretch",
    "flex-start",
    "flex-end",
    "center",
    "baseline",
    "start",
    "end",
    "self-start",
    "self-end",
];

pub const ALIGN_SELF: &[&str] = &["auto", "flex-start", "flex-end", "center", "baseline", "stretch"];

/// Shared by `flex-grow` and `flex-shrink`.
pub const FLEX_FACTORS: &[&str] = &["0", "1", "2", "3", "4", "5"];

pub const PULLS: &[&str] = &["left", "right"];

/// Responsive breakpoints, in ascending screen width, followed by the
/// range-restricted `-only` variants.
pub const VIEWPORTS: &[&str] = &[
    "mobile",
    "tablet",
    "desktop",
    "widescreen",
    "fullhd",
    "touch",
    "tablet-only",
    "desktop-only",
    "widescreen-only",
];
