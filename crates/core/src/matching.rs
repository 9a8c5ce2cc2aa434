//! Match rules used by the suggestion searches.
//!
//! Mobile search, name search and the vocabulary searches deliberately use
//! different rules; keep them distinct.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchPolicy {
    /// Case-sensitive starts-with.
    Prefix,
    /// Starts-with after Unicode lowercasing both sides.
    PrefixIgnoreCase,
    /// Substring containment after Unicode lowercasing both sides.
    ContainsIgnoreCase,
}

impl MatchPolicy {
    /// Empty `partial` matches every candidate.
    #[must_use]
    pub fn matches(self, candidate: &str, partial: &str) -> bool {
        if partial.is_empty() {
            return true;
        }
        match self {
            Self::Prefix => candidate.starts_with(partial),
            Self::PrefixIgnoreCase => {
                candidate.to_lowercase().starts_with(&partial.to_lowercase())
            },
            Self::ContainsIgnoreCase => candidate.to_lowercase().contains(&partial.to_lowercase()),
        }
    }

    /// Keep the items whose key matches `partial`, preserving order.
    pub fn filter<T, F>(self, items: impl IntoIterator<Item = T>, partial: &str, key: F) -> Vec<T>
    where
        F: Fn(&T) -> &str,
    {
        items.into_iter().filter(|item| self.matches(key(item), partial)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_is_case_sensitive() {
        assert!(MatchPolicy::Prefix.matches("9998887771", "999"));
        assert!(!MatchPolicy::Prefix.matches("8887776661", "999"));
        assert!(!MatchPolicy::Prefix.matches("Books", "books"));
    }

    #[test]
    fn prefix_does_not_match_inner_fragment() {
        assert!(!MatchPolicy::Prefix.matches("9876543210", "654"));
    }

    #[test]
    fn prefix_ignore_case_folds_both_sides() {
        assert!(MatchPolicy::PrefixIgnoreCase.matches("Books", "bo"));
        assert!(MatchPolicy::PrefixIgnoreCase.matches("books", "BOO"));
        assert!(!MatchPolicy::PrefixIgnoreCase.matches("Old books", "bo"));
    }

    #[test]
    fn contains_ignore_case_finds_any_fragment() {
        assert!(MatchPolicy::ContainsIgnoreCase.matches("Ram Patel", "ram"));
        assert!(MatchPolicy::ContainsIgnoreCase.matches("Shyam Ram", "ram"));
        assert!(MatchPolicy::ContainsIgnoreCase.matches("Shyam Ram", "YAM"));
        assert!(!MatchPolicy::ContainsIgnoreCase.matches("Asha", "ram"));
    }

    #[test]
    fn empty_partial_matches_everything() {
        for policy in
            [MatchPolicy::Prefix, MatchPolicy::PrefixIgnoreCase, MatchPolicy::ContainsIgnoreCase]
        {
            assert!(policy.matches("anything", ""));
            assert!(policy.matches("", ""));
        }
    }

    #[test]
    fn filter_preserves_order() {
        let items: Vec<String> =
            ["Box", "bag", "Bottle", "crate"].into_iter().map(str::to_owned).collect();
        let kept = MatchPolicy::PrefixIgnoreCase.filter(items, "b", String::as_str);
        assert_eq!(kept, vec!["Box".to_owned(), "bag".to_owned(), "Bottle".to_owned()]);
    }

    #[test]
    fn filter_agrees_with_matches() {
        let items: Vec<String> =
            ["Ram Patel", "Shyam Ram", "Asha"].into_iter().map(str::to_owned).collect();
        for policy in
            [MatchPolicy::Prefix, MatchPolicy::PrefixIgnoreCase, MatchPolicy::ContainsIgnoreCase]
        {
            let expected: Vec<String> =
                items.iter().filter(|c| policy.matches(c, "Ram")).cloned().collect();
            assert_eq!(policy.filter(items.clone(), "Ram", String::as_str), expected);
        }
    }
}
