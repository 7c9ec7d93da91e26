use crate::catalog::{FilterState, Product, ALL_CATEGORY};

/// Products visible under the current filter, in catalog order.
///
/// A product passes when its category matches the active one by exact string
/// equality (the sentinel matches everything) and, if a search string is
/// set, the case-folded `name + desc` contains the case-folded search text
/// as a substring. No scoring; the filter is stable.
pub fn visible_products<'a>(products: &'a [Product], filter: &FilterState) -> Vec<&'a Product> {
    let q = filter.q.trim().to_lowercase();
    products
        .iter()
        .filter(|p| {
            let category_ok = filter.active_category == ALL_CATEGORY
                || p.category == filter.active_category;
            let search_ok = q.is_empty()
                || format!("{}{}", p.name, p.desc_text())
                    .to_lowercase()
                    .contains(q.as_str());
            category_ok && search_ok
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(name: &str, category: &str, desc: &str) -> Product {
        Product {
            name: name.to_string(),
            category: category.to_string(),
            price: None,
            desc: if desc.is_empty() {
                None
            } else {
                Some(desc.to_string())
            },
            image: None,
        }
    }

    fn filter(active: &str, q: &str) -> FilterState {
        FilterState {
            active_category: active.to_string(),
            q: q.to_string(),
        }
    }

    #[test]
    fn test_search_over_name_and_desc() {
        let catalog = [
            product("Simit", "Simit", "taze"),
            product("Poğaça", "Poğaça", ""),
        ];
        let visible = visible_products(&catalog, &filter(ALL_CATEGORY, "simit"));
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "Simit");

        let by_desc = visible_products(&catalog, &filter(ALL_CATEGORY, "taze"));
        assert_eq!(by_desc.len(), 1);
        assert_eq!(by_desc[0].name, "Simit");
    }

    #[test]
    fn test_category_match_is_exact_not_slug() {
        let catalog = [product("a", "Tost", ""), product("b", "TOST", "")];
        let visible = visible_products(&catalog, &filter("Tost", ""));
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "a");
    }

    #[test]
    fn test_sentinel_matches_everything() {
        let catalog = [product("a", "Tost", ""), product("b", "Simit", "")];
        assert_eq!(visible_products(&catalog, &filter(ALL_CATEGORY, "")).len(), 2);
    }

    #[test]
    fn test_search_folds_case_at_match_time() {
        // The filter state carries the text exactly as typed; both sides
        // fold only for the comparison.
        let catalog = [product("Su", "İçecekler", "500ml")];
        let upper = filter(ALL_CATEGORY, "SU");
        assert_eq!(upper.q, "SU");
        assert_eq!(visible_products(&catalog, &upper).len(), 1);
        assert_eq!(
            visible_products(&catalog, &filter(ALL_CATEGORY, "sU")).len(),
            1
        );
    }

    #[test]
    fn test_whitespace_only_search_matches_all() {
        let catalog = [product("a", "Tost", ""), product("b", "Simit", "")];
        assert_eq!(
            visible_products(&catalog, &filter(ALL_CATEGORY, "   ")).len(),
            2
        );
    }

    #[test]
    fn test_catalog_order_preserved() {
        let catalog = [
            product("c", "Tost", ""),
            product("a", "Tost", ""),
            product("b", "Tost", ""),
        ];
        let names: Vec<&str> = visible_products(&catalog, &filter("Tost", ""))
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, ["c", "a", "b"]);
    }
}
