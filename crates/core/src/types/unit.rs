//! Sale units for catalog entries.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Unit a product is sold by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Unit {
    #[default]
    #[serde(rename = "un")]
    Un,
    #[serde(rename = "kg")]
    Kg,
    #[serde(rename = "100g")]
    HundredGrams,
    #[serde(rename = "pack")]
    Pack,
    #[serde(rename = "lt")]
    Lt,
}

impl Unit {
    /// Short label shown next to quantities.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Un => "un",
            Self::Kg => "kg",
            Self::HundredGrams => "100g",
            Self::Pack => "pack",
            Self::Lt => "lt",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
