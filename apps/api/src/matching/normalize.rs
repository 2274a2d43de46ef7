//! The one place that decides how keywords and text are compared.

/// Case-folds `text` for keyword comparison.
///
/// Lower-casing only: no stemming, no tokenization, no word boundaries, so
/// "java" is found inside "javascript". Scoring and the skill-frequency
/// comparison both go through this function.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
}

/// True if `keyword` occurs anywhere in the already-normalized `haystack`.
pub fn contains_keyword(normalized_haystack: &str, keyword: &str) -> bool {
    normalized_haystack.contains(&normalize(keyword))
}

/// Number of non-overlapping occurrences of `keyword` in the already-normalized `haystack`.
pub fn count_keyword(normalized_haystack: &str, keyword: &str) -> usize {
    let needle = normalize(keyword);
    if needle.is_empty() {
        return 0;
    }
    normalized_haystack.matches(needle.as_str()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_lowercases_only() {
        assert_eq!(normalize("Power BI, Node.js"), "power bi, node.js");
    }

    #[test]
    fn test_contains_is_substring_not_word() {
        let text = normalize("Built SPAs in JavaScript");
        assert!(contains_keyword(&text, "Java"));
        assert!(contains_keyword(&text, "script"));
        assert!(!contains_keyword(&text, "Python"));
    }

    #[test]
    fn test_count_is_non_overlapping() {
        assert_eq!(count_keyword("aaaa", "aa"), 2);
        assert_eq!(count_keyword(&normalize("CSS, css and Css"), "CSS"), 3);
        assert_eq!(count_keyword("html", ""), 0);
    }
}
