//! Key normalization shared by every lookup table.

/// Words that never count as evidence when comparing category names.
const FILLER_WORDS: &[&str] = &["&", "and", "the", "of", "for", "with"];

/// Normalize a free-text table key: trimmed, lowercase, single spaces.
pub fn normalize_key(raw: &str) -> String {
    raw.split_whitespace()
        .map(|w| w.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Normalize a category to snake_case.
///
/// Punctuation other than `&` separates words, so `"Garden & Outdoor"`,
/// `"garden-&-outdoor"` and `"garden_&_outdoor"` all become
/// `"garden_&_outdoor"`.
pub fn normalize_category(raw: &str) -> String {
    let spaced: String = raw
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '&' {
                c
            } else {
                ' '
            }
        })
        .collect();
    spaced
        .split_whitespace()
        .map(|w| w.to_lowercase())
        .collect::<Vec<_>>()
        .join("_")
}

/// Meaningful words of a category, filler words removed.
pub fn category_words(raw: &str) -> Vec<String> {
    normalize_category(raw)
        .split('_')
        .filter(|w| !w.is_empty() && !FILLER_WORDS.contains(w))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_is_trimmed_and_lowercased() {
        assert_eq!(normalize_key("  Stainless   Steel "), "stainless steel");
        assert_eq!(normalize_key(""), "");
    }

    #[test]
    fn category_variants_collapse() {
        assert_eq!(normalize_category("Garden & Outdoor"), "garden_&_outdoor");
        assert_eq!(normalize_category("garden_&_outdoor"), "garden_&_outdoor");
        assert_eq!(normalize_category("Cell-Phones / Accessories"), "cell_phones_accessories");
        assert_eq!(normalize_category("   "), "");
    }

    #[test]
    fn category_words_skip_filler() {
        assert_eq!(category_words("Garden & Outdoor"), vec!["garden", "outdoor"]);
        assert_eq!(category_words("home_and_kitchen"), vec!["home", "kitchen"]);
    }
}
