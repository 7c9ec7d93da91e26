//! URL-safe identifiers derived from display text.
//!
//! The slug is the only join key between free-text category names and hash
//! path segments: two display strings are "the same category" for routing
//! purposes iff their slugs are equal. The mapping is many-to-one; reverse
//! lookups resolve collisions with first-match-wins (see `route`).

/// Normalize display text into a slug: Turkish-aware lowercase, diacritics
/// folded to their ASCII base letter, every run of other characters
/// collapsed to a single hyphen, no leading or trailing hyphen.
///
/// Total and deterministic; empty input yields the empty string.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    for c in text.chars() {
        // Dotted capital İ lowercases to "i" plus a combining dot via the
        // locale-independent tables; map it up front so slugs stay ASCII.
        let c = if c == 'İ' { 'i' } else { c };
        for lc in c.to_lowercase() {
            let folded = fold_diacritic(lc);
            if folded.is_ascii_alphanumeric() {
                slug.push(folded);
            } else if !slug.is_empty() && !slug.ends_with('-') {
                slug.push('-');
            }
        }
    }
    if slug.ends_with('-') {
        slug.pop();
    }
    slug
}

/// Fixed folding table for the lowercase Turkish letters the menu uses.
pub(crate) fn fold_diacritic(c: char) -> char {
    match c {
        'ç' => 'c',
        'ğ' => 'g',
        'ı' => 'i',
        'ö' => 'o',
        'ş' => 's',
        'ü' => 'u',
        _ => c,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turkish_letters_fold() {
        assert_eq!(slugify("Tostlar"), "tostlar");
        assert_eq!(slugify("Poğaça"), "pogaca");
        assert_eq!(slugify("İçecekler"), "icecekler");
        assert_eq!(slugify("Börekler"), "borekler");
        assert_eq!(slugify("Kahvaltı"), "kahvalti");
    }

    #[test]
    fn test_runs_collapse_to_single_hyphen() {
        assert_eq!(
            slugify("Açık Sıcak Sandviçler / Sandviçler"),
            "acik-sicak-sandvicler-sandvicler"
        );
        assert_eq!(slugify("  Sahanda   Grubu  "), "sahanda-grubu");
    }

    #[test]
    fn test_no_edge_hyphens() {
        assert_eq!(slugify("--tost--"), "tost");
        assert_eq!(slugify("!!!"), "");
        assert_eq!(slugify(""), "");
    }

    #[test]
    fn test_idempotent() {
        for s in ["Poğaça", "Açık Sıcak Sandviçler / Sandviçler", "İçecekler", "x  y"] {
            let once = slugify(s);
            assert_eq!(slugify(&once), once);
        }
    }

    #[test]
    fn test_output_shape() {
        // ^[a-z0-9]*(-[a-z0-9]+)*$ without pulling in a regex crate.
        for s in ["Çay & Kahve", " 2'li Menü ", "ŞŞŞ---ğğğ", "a"] {
            let slug = slugify(s);
            assert!(!slug.starts_with('-') && !slug.ends_with('-'), "{slug}");
            assert!(!slug.contains("--"), "{slug}");
            assert!(
                slug.chars().all(|c| c.is_ascii_alphanumeric() || c == '-'),
                "{slug}"
            );
        }
    }
}
