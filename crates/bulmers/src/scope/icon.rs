//! Default icon font families.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The icon font family icon-rendering collaborators default to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconLibrary {
    /// Font Awesome.
    Fa,
    /// Material Design Icons.
    Mdi,
    /// Ionicons.
    Ion,
}

impl IconLibrary {
    pub const ALL: &'static [IconLibrary] = &[IconLibrary::Fa, IconLibrary::Mdi, IconLibrary::Ion];

    pub fn as_str(self) -> &'static str {
        match self {
            IconLibrary::Fa => "fa",
            IconLibrary::Mdi => "mdi",
            IconLibrary::Ion => "ion",
        }
    }
}

impl std::fmt::Display for IconLibrary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when an icon library name is not one of the closed set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown icon library '{0}' (expected one of: fa, mdi, ion)")]
pub struct UnknownIconLibrary(pub String);

impl FromStr for IconLibrary {
    type Err = UnknownIconLibrary;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IconLibrary::ALL
            .iter()
            .copied()
            .find(|lib| lib.as_str() == s)
            .ok_or_else(|| UnknownIconLibrary(s.to_string()))
    }
}
