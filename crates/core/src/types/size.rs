//! Garment sizes.

use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when a string is not a known size code.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid size '{0}' (expected one of PP, P, M, G, GG, XG)")]
pub struct SizeError(pub String);

/// Garment size as printed on the label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Size {
    PP,
    P,
    M,
    G,
    GG,
    XG,
}

impl Size {
    /// Every size, smallest first.
    pub const ALL: [Self; 6] = [Self::PP, Self::P, Self::M, Self::G, Self::GG, Self::XG];

    /// The label code (`"P"`, `"GG"`, ...).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PP => "PP",
            Self::P => "P",
            Self::M => "M",
            Self::G => "G",
            Self::GG => "GG",
            Self::XG => "XG",
        }
    }

    /// Match a size code ignoring case.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|size| size.as_str().eq_ignore_ascii_case(code.trim()))
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Size {
    type Err = SizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| SizeError(s.to_owned()))
    }
}
