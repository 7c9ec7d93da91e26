use crate::catalog::ALL_CATEGORY;
use crate::order::category_from_slug;
use crate::slug::slugify;

/// The four view intents the hash can express.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    CategoryGrid,
    CategoryProducts(String),
    Contact,
}

impl Default for Route {
    fn default() -> Self {
        Route::Home
    }
}

/// Parse a location hash into a [`Route`], resolving a `#/menu/<slug>`
/// segment against `categories` (the resolved category order).
///
/// Recognized shapes: `#/`, `#/menu`, `#/menu/<slug>`, `#/contact`;
/// everything else, including the empty hash, is Home. An unknown or
/// colliding slug resolves per [`category_from_slug`], falling back to the
/// [`ALL_CATEGORY`] sentinel. Pure and total given (hash, categories).
pub fn parse_hash(hash: &str, categories: &[String]) -> Route {
    let path = hash.strip_prefix('#').unwrap_or(hash);
    let parts: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    match parts.as_slice() {
        ["menu", seg, ..] => {
            let slug = urlencoding::decode(seg)
                .map(|s| s.into_owned())
                .unwrap_or_else(|_| (*seg).to_string());
            let category = category_from_slug(categories, &slug)
                .cloned()
                .unwrap_or_else(|| ALL_CATEGORY.to_string());
            Route::CategoryProducts(category)
        }
        ["menu"] => Route::CategoryGrid,
        ["contact", ..] => Route::Contact,
        _ => Route::Home,
    }
}

/// Hash fragment for selecting `category` from the UI: `#/menu` for the
/// sentinel, `#/menu/<slug>` otherwise. Writing it to the location re-enters
/// [`parse_hash`] via the hashchange notification, so selection is
/// idempotent whether driven by a click or by direct navigation.
pub fn hash_for_category(category: &str) -> String {
    if category == ALL_CATEGORY {
        "#/menu".to_string()
    } else {
        format!("#/menu/{}", urlencoding::encode(&slugify(category)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(names: &[&str]) -> Vec<String> {
        let mut v = vec![ALL_CATEGORY.to_string()];
        v.extend(names.iter().map(|s| s.to_string()));
        v
    }

    #[test]
    fn test_known_category_slug() {
        let categories = order(&["Tostlar", "İçecekler"]);
        assert_eq!(
            parse_hash("#/menu/tostlar", &categories),
            Route::CategoryProducts("Tostlar".to_string())
        );
    }

    #[test]
    fn test_unknown_slug_falls_back_to_all() {
        let categories = order(&["Tostlar"]);
        assert_eq!(
            parse_hash("#/menu/unknown-slug", &categories),
            Route::CategoryProducts(ALL_CATEGORY.to_string())
        );
    }

    #[test]
    fn test_menu_without_segment_is_grid() {
        assert_eq!(parse_hash("#/menu", &order(&[])), Route::CategoryGrid);
        assert_eq!(parse_hash("#/menu/", &order(&[])), Route::CategoryGrid);
    }

    #[test]
    fn test_contact() {
        assert_eq!(parse_hash("#/contact", &order(&[])), Route::Contact);
    }

    #[test]
    fn test_empty_and_unrecognized_go_home() {
        let categories = order(&[]);
        assert_eq!(parse_hash("", &categories), Route::Home);
        assert_eq!(parse_hash("#/", &categories), Route::Home);
        assert_eq!(parse_hash("#/nowhere", &categories), Route::Home);
        assert_eq!(parse_hash("#///", &categories), Route::Home);
    }

    #[test]
    fn test_percent_encoded_segment_decodes() {
        let categories = order(&["İçecekler"]);
        assert_eq!(
            parse_hash("#/menu/%69cecekler", &categories),
            Route::CategoryProducts("İçecekler".to_string())
        );
    }

    #[test]
    fn test_hash_for_category() {
        assert_eq!(hash_for_category(ALL_CATEGORY), "#/menu");
        assert_eq!(hash_for_category("Tostlar"), "#/menu/tostlar");
        assert_eq!(hash_for_category("İçecekler"), "#/menu/icecekler");
    }

    #[test]
    fn test_round_trip() {
        let categories = order(&["Tostlar", "Pastalar"]);
        let hash = hash_for_category("Tostlar");
        assert_eq!(
            parse_hash(&hash, &categories),
            Route::CategoryProducts("Tostlar".to_string())
        );
    }

    #[test]
    fn test_before_catalog_load_degrades_to_all() {
        // Resolver not yet run: categories is just the sentinel.
        let categories = order(&[]);
        assert_eq!(
            parse_hash("#/menu/tostlar", &categories),
            Route::CategoryProducts(ALL_CATEGORY.to_string())
        );
    }
}
