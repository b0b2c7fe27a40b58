//! Product categories.
//!
//! Categories are a closed set: the admin form offers exactly these and the
//! catalog filter compares them by equality, never by substring.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A product category.
///
/// Serialized as the Spanish display label so the wire format matches what
/// the category chips show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Category {
    #[default]
    #[serde(rename = "Almacén")]
    Almacen,
    Limpieza,
    Higiene,
    Bebidas,
    Packs,
    Otros,
}

impl Category {
    /// All categories, in display order.
    pub const ALL: [Self; 6] = [
        Self::Almacen,
        Self::Limpieza,
        Self::Higiene,
        Self::Bebidas,
        Self::Packs,
        Self::Otros,
    ];

    /// Display label for category chips and the admin form.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Almacen => "Almacén",
            Self::Limpieza => "Limpieza",
            Self::Higiene => "Higiene",
            Self::Bebidas => "Bebidas",
            Self::Packs => "Packs",
            Self::Otros => "Otros",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The active category selector: everything, or one concrete category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// The "Todos" sentinel - no category restriction.
    #[default]
    All,
    /// Only products in this exact category.
    Only(Category),
}

impl From<Option<Category>> for CategoryFilter {
    fn from(category: Option<Category>) -> Self {
        category.map_or(Self::All, Self::Only)
    }
}
