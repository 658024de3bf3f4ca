//! DNS query name classification

use crate::types::CategoryName;

/// Maps DNS query names onto a fixed, ordered list of categories
///
/// A query belongs to the first category whose name occurs anywhere in it
/// (ASCII case-insensitive), so list order is match priority.
#[derive(Debug, Clone)]
pub struct CategoryClassifier {
    categories: Vec<CategoryName>,
}

impl CategoryClassifier {
    #[must_use]
    pub fn new(categories: Vec<CategoryName>) -> Self {
        Self { categories }
    }

    /// Index of the first matching category, if any
    #[must_use]
    pub fn classify(&self, query: &str) -> Option<usize> {
        self.categories
            .iter()
            .position(|category| contains_ignore_ascii_case(query, category.as_str()))
    }

    #[must_use]
    pub fn categories(&self) -> &[CategoryName] {
        &self.categories
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

fn contains_ignore_ascii_case(haystack: &str, needle: &str) -> bool {
    let (haystack, needle) = (haystack.as_bytes(), needle.as_bytes());
    if needle.is_empty() {
        return true;
    }
    haystack
        .windows(needle.len())
        .any(|window| window.eq_ignore_ascii_case(needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier(names: &[&str]) -> CategoryClassifier {
        CategoryClassifier::new(
            names
                .iter()
                .map(|n| CategoryName::new((*n).to_string()).unwrap())
                .collect(),
        )
    }

    #[test]
    fn test_substring_match() {
        let c = classifier(&["instagram", "google"]);
        assert_eq!(c.classify("www.instagram.com"), Some(0));
        assert_eq!(c.classify("fonts.googleapis.com"), Some(1));
        assert_eq!(c.classify("example.org"), None);
    }

    #[test]
    fn test_first_category_wins() {
        let c = classifier(&["apple", "google"]);
        // matches both, apple listed first
        assert_eq!(c.classify("apple.google.test"), Some(0));

        let reversed = classifier(&["google", "apple"]);
        assert_eq!(reversed.classify("apple.google.test"), Some(0));
    }

    #[test]
    fn test_case_insensitive() {
        let c = classifier(&["spotify"]);
        assert_eq!(c.classify("APRESOLVE.SPOTIFY.COM"), Some(0));
    }

    #[test]
    fn test_empty_query_and_empty_list() {
        let c = classifier(&["facebook"]);
        assert_eq!(c.classify(""), None);
        assert!(classifier(&[]).is_empty());
        assert_eq!(classifier(&[]).classify("facebook.com"), None);
    }

    #[test]
    fn test_query_shorter_than_category() {
        let c = classifier(&["whatsapp"]);
        assert_eq!(c.classify("wa.me"), None);
    }
}
