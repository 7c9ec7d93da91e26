use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::catalog::{Product, ALL_CATEGORY};
use crate::slug::slugify;

/// Curated display precedence for category slugs, food before beverages.
/// A slug's priority is its index here; anything absent sorts after every
/// ranked slug.
pub const CATEGORY_PRIORITY: &[&str] = &[
    "kahvalti",
    "sahanda-grubu",
    "kruvasan",
    "borekler",
    "acik-sicak-sandvicler-sandvicler",
    "tostlar",
    "simit",
    "pastalar",
    "aperatifler",
    "icecekler",
];

static PRIORITY_RANK: Lazy<HashMap<&'static str, usize>> = Lazy::new(|| {
    CATEGORY_PRIORITY
        .iter()
        .enumerate()
        .map(|(rank, slug)| (*slug, rank))
        .collect()
});

fn rank_of(slug: &str) -> usize {
    PRIORITY_RANK.get(slug).copied().unwrap_or(usize::MAX)
}

/// Accent-insensitive comparison key standing in for locale collation:
/// lowercase with the same diacritic folding the slugifier applies, but
/// keeping every character.
fn collation_key(s: &str) -> String {
    s.chars()
        .flat_map(|c| {
            let c = if c == 'İ' { 'i' } else { c };
            c.to_lowercase()
        })
        .map(crate::slug::fold_diacritic)
        .collect()
}

/// Distinct category display names across the catalog, in first-seen order.
/// Raw strings distinguish: names differing only by case or accents stay
/// separate categories even when their slugs collide.
pub fn distinct_categories(products: &[Product]) -> Vec<String> {
    let mut seen = Vec::new();
    for p in products {
        if !seen.contains(&p.category) {
            seen.push(p.category.clone());
        }
    }
    seen
}

/// Total order over the given categories: priority rank first, then
/// accent-folded collation of the display string, then the raw string.
/// The [`ALL_CATEGORY`] sentinel is prepended and always index 0.
pub fn resolve_order(categories: &[String]) -> Vec<String> {
    let mut ordered: Vec<String> = categories.to_vec();
    ordered.sort_by(|a, b| {
        rank_of(&slugify(a))
            .cmp(&rank_of(&slugify(b)))
            .then_with(|| collation_key(a).cmp(&collation_key(b)))
            .then_with(|| a.cmp(b))
    });
    let mut result = Vec::with_capacity(ordered.len() + 1);
    result.push(ALL_CATEGORY.to_string());
    result.extend(ordered);
    result
}

/// First category in `categories` whose slug equals `slug`, if any.
/// First match wins; this is the defined tie-break for slug collisions.
pub fn category_from_slug<'a>(categories: &'a [String], slug: &str) -> Option<&'a String> {
    categories
        .iter()
        .filter(|c| c.as_str() != ALL_CATEGORY)
        .find(|c| slugify(c) == slug)
}
