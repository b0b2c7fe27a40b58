//! Catalog filtering.
//!
//! Derives the visible product list from the full catalog, the active
//! category chip, and the search box. Pure: no mutation, no re-sorting, and
//! the same inputs always produce the same output.

use crate::normalize::normalize;
use crate::product::Product;
use crate::types::CategoryFilter;

/// Filter the catalog by category, then by free-text query.
///
/// The category step keeps products whose category equals the selected one
/// exactly. The search step, skipped when the trimmed query is empty, keeps
/// products where the normalized query is a substring of the normalized
/// title, description, internal code, or any normalized keyword.
///
/// The result is a subset of `products` in the original relative order.
#[must_use]
pub fn filter_products<'a>(
    products: &'a [Product],
    category: CategoryFilter,
    query: &str,
) -> Vec<&'a Product> {
    let query = query.trim();
    let normalized_query = (!query.is_empty()).then(|| normalize(query));

    products
        .iter()
        .filter(|product| match category {
            CategoryFilter::All => true,
            CategoryFilter::Only(selected) => product.category == selected,
        })
        .filter(|product| {
            normalized_query
                .as_deref()
                .is_none_or(|q| matches_query(product, q))
        })
        .collect()
}

/// Whether a normalized query matches any searchable field of a product.
fn matches_query(product: &Product, normalized_query: &str) -> bool {
    normalize(&product.title).contains(normalized_query)
        || normalize(&product.description).contains(normalized_query)
        || normalize(&product.internal_code).contains(normalized_query)
        || product
            .keywords
            .iter()
            .any(|keyword| normalize(keyword).contains(normalized_query))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Category, Price, ProductId, Unit};

    fn product(id: &str, title: &str, category: Category, keywords: &[&str]) -> Product {
        Product {
            id: ProductId::new(id),
            internal_code: format!("G000{id}"),
            barcode: None,
            title: title.to_owned(),
            description: String::new(),
            price: Price::new(100),
            old_price: None,
            stock: 10,
            unit: Unit::Un,
            image: String::new(),
            category,
            is_pack: false,
            available: true,
            keywords: keywords.iter().map(|&k| k.to_owned()).collect(),
        }
    }

    fn catalog() -> Vec<Product> {
        vec![
            product("1", "Shampoo Herbal 400ml", Category::Higiene, &["champu", "pelo"]),
            product("2", "Aceite de Oliva", Category::Almacen, &["cocina"]),
            product("3", "Arroz Blanco Premium 1kg", Category::Almacen, &[]),
            product("4", "Jabón Líquido para Ropa", Category::Limpieza, &["detergente"]),
        ]
    }

    #[test]
    fn test_no_filters_returns_everything_in_order() {
        let catalog = catalog();
        let visible = filter_products(&catalog, CategoryFilter::All, "");
        assert_eq!(visible.len(), 4);
        let ids: Vec<_> = visible.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3", "4"]);
    }

    #[test]
    fn test_category_is_exact_match() {
        let catalog = catalog();
        let visible = filter_products(&catalog, CategoryFilter::Only(Category::Almacen), "");
        let ids: Vec<_> = visible.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["2", "3"]);
    }

    #[test]
    fn test_query_is_accent_and_case_insensitive() {
        let catalog = catalog();
        let visible = filter_products(&catalog, CategoryFilter::All, "CHAMPÚ");
        let ids: Vec<_> = visible.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["1"]);

        let visible = filter_products(&catalog, CategoryFilter::All, "jabon");
        let ids: Vec<_> = visible.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["4"]);
    }

    #[test]
    fn test_query_matches_internal_code() {
        let catalog = catalog();
        let visible = filter_products(&catalog, CategoryFilter::All, "g0003");
        let ids: Vec<_> = visible.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["3"]);
    }

    #[test]
    fn test_category_and_query_compose() {
        let catalog = catalog();
        let visible = filter_products(&catalog, CategoryFilter::Only(Category::Almacen), "arroz");
        let ids: Vec<_> = visible.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["3"]);
        // Same query in the wrong category finds nothing.
        let visible = filter_products(&catalog, CategoryFilter::Only(Category::Higiene), "arroz");
        assert!(visible.is_empty());
    }

    #[test]
    fn test_whitespace_query_is_ignored() {
        let catalog = catalog();
        let visible = filter_products(&catalog, CategoryFilter::All, "   ");
        assert_eq!(visible.len(), 4);
    }

    #[test]
    fn test_result_is_subset_preserving_order() {
        let catalog = catalog();
        let visible = filter_products(&catalog, CategoryFilter::All, "a");
        let mut last_index = 0;
        for p in visible {
            let index = catalog
                .iter()
                .position(|c| c.id == p.id)
                .expect("filtered product must come from the input");
            assert!(index >= last_index);
            last_index = index;
        }
    }

    #[test]
    fn test_pure_no_mutation() {
        let catalog = catalog();
        let before = catalog.clone();
        let first = filter_products(&catalog, CategoryFilter::All, "arroz");
        let second = filter_products(&catalog, CategoryFilter::All, "arroz");
        assert_eq!(catalog, before);
        let first_ids: Vec<_> = first.iter().map(|p| p.id.clone()).collect();
        let second_ids: Vec<_> = second.iter().map(|p| p.id.clone()).collect();
        assert_eq!(first_ids, second_ids);
    }
}
