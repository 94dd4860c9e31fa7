//! Client-side catalog filtering.
//!
//! The listing fetches the whole collection once; searching and picking a
//! category chip only narrow what is already loaded.

use api::Product;

/// A category chip of the listing page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Category {
    pub id: &'static str,
    pub label: &'static str,
}

pub const CATEGORIES: &[Category] = &[
    Category { id: "new", label: "NEW" },
    Category { id: "shirts", label: "SHIRTS" },
    Category { id: "polo-shirts", label: "POLO SHIRTS" },
    Category { id: "shorts", label: "SHORTS" },
    Category { id: "suits", label: "SUITS" },
    Category { id: "best-sellers", label: "BEST SELLERS" },
    Category { id: "t-shirts", label: "T-SHIRTS" },
    Category { id: "jeans", label: "JEANS" },
    Category { id: "jackets", label: "JACKETS" },
    Category { id: "coats", label: "COATS" },
];

/// Products whose name contains `query` and, when one is selected, whose
/// category equals `category` (both case-insensitive).
pub fn filter_products(products: &[Product], query: &str, category: Option<&str>) -> Vec<Product> {
    products
        .iter()
        .filter(|p| p.matches_query(query))
        .filter(|p| category.is_none_or(|c| p.in_category(c)))
        .cloned()
        .collect()
}

/// Clicking the selected chip again clears the selection.
pub fn toggle_category(current: Option<&str>, clicked: &str) -> Option<String> {
    if current == Some(clicked) {
        None
    } else {
        Some(clicked.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, name: &str, category: &str) -> Product {
        serde_json::from_value(serde_json::json!({
            "_id": id,
            "name": name,
            "category": category,
            "price": 10,
        }))
        .unwrap()
    }

    fn catalog() -> Vec<Product> {
        vec![
            product("1", "Embroidered Seersucker Shirt", "shirts"),
            product("2", "Basic Slim Fit T-Shirt", "T-Shirts"),
            product("3", "Blurred Print T-Shirt", "t-shirts"),
            product("4", "Full Sleeve Zipper", "jackets"),
        ]
    }

    fn ids(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let products = catalog();
        assert_eq!(ids(&filter_products(&products, "t-SHIRT", None)), ["2", "3"]);
        assert_eq!(ids(&filter_products(&products, "zip", None)), ["4"]);
        assert!(filter_products(&products, "coat", None).is_empty());
    }

    #[test]
    fn test_empty_query_keeps_everything() {
        assert_eq!(filter_products(&catalog(), "", None).len(), 4);
    }

    #[test]
    fn test_category_and_query_combine() {
        let products = catalog();
        assert_eq!(ids(&filter_products(&products, "", Some("t-shirts"))), ["2", "3"]);
        assert_eq!(ids(&filter_products(&products, "basic", Some("t-shirts"))), ["2"]);
        assert!(filter_products(&products, "basic", Some("shirts")).is_empty());
    }

    #[test]
    fn test_toggle_category() {
        assert_eq!(toggle_category(None, "jeans").as_deref(), Some("jeans"));
        assert_eq!(toggle_category(Some("jeans"), "coats").as_deref(), Some("coats"));
        assert_eq!(toggle_category(Some("jeans"), "jeans"), None);
    }
}
