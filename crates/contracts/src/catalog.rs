use serde::{Deserialize, Serialize};

/// The "show everything" pseudo-category. Always first in a resolved
/// category order and never slugified against a product.
pub const ALL_CATEGORY: &str = "Tümü";

// ============================================================================
// Catalog records
// ============================================================================

/// One menu item as it appears in the catalog document. Identity is
/// positional: there is no id field and duplicates are allowed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,

    /// Free-form display label. Grouping and routing derive from it.
    pub category: String,

    #[serde(default)]
    pub price: Option<f64>,

    #[serde(default)]
    pub desc: Option<String>,

    #[serde(default)]
    pub image: Option<String>,
}

impl Product {
    /// Description text for search matching; absent reads as empty.
    pub fn desc_text(&self) -> &str {
        self.desc.as_deref().unwrap_or("")
    }
}

/// Shape of the fetched catalog resource. A document without an `items`
/// key decodes as an empty catalog, not an error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MenuDocument {
    #[serde(default)]
    pub items: Vec<Product>,
}

// ============================================================================
// Filter state
// ============================================================================

/// What the visitor is currently looking at: one category (or the
/// [`ALL_CATEGORY`] sentinel) plus the search text as typed. Case folding
/// happens at match time, so the raw text survives for display.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    pub active_category: String,
    pub q: String,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            active_category: ALL_CATEGORY.to_string(),
            q: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_items_is_empty_catalog() {
        let doc: MenuDocument = serde_json::from_str("{}").unwrap();
        assert!(doc.items.is_empty());
    }

    #[test]
    fn test_optional_fields_default() {
        let doc: MenuDocument =
            serde_json::from_str(r#"{"items":[{"name":"Simit","category":"Simit"}]}"#).unwrap();
        let p = &doc.items[0];
        assert_eq!(p.name, "Simit");
        assert_eq!(p.price, None);
        assert_eq!(p.desc_text(), "");
        assert_eq!(p.image, None);
    }

    #[test]
    fn test_default_filter_state() {
        let f = FilterState::default();
        assert_eq!(f.active_category, ALL_CATEGORY);
        assert!(f.q.is_empty());
    }
}
