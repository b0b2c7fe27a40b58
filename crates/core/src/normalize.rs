//! Accent- and case-insensitive text canonicalization.
//!
//! Search must match "Champú" against the query "champu", so both sides of
//! every comparison run through [`normalize`] first.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Canonicalize a string for comparison: NFD-decompose, strip combining
/// marks, lowercase.
///
/// Total on any input; the empty string maps to itself, and the function is
/// idempotent.
#[must_use]
pub fn normalize(text: &str) -> String {
    text.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_lowercases() {
        assert_eq!(normalize("ARROZ Blanco"), "arroz blanco");
    }

    #[test]
    fn test_strips_diacritics() {
        assert_eq!(normalize("Champú"), "champu");
        assert_eq!(normalize("Almacén"), "almacen");
        assert_eq!(normalize("Envío"), "envio");
    }

    #[test]
    fn test_accent_variants_collapse() {
        assert_eq!(normalize("Champú"), normalize("champu"));
        assert_eq!(normalize("CAFÉ"), normalize("cafe"));
    }

    #[test]
    fn test_idempotent() {
        for s in ["", "Champú", "Jabón Líquido 3L", "ñoquis", "ÁÉÍÓÚ"] {
            assert_eq!(normalize(&normalize(s)), normalize(s));
        }
    }

    #[test]
    fn test_enye_folds_to_n() {
        // ñ decomposes to n + combining tilde; stripping the mark folds it
        // into plain n, which is what the search box expects.
        assert_eq!(normalize("ñ"), "n");
    }
}
