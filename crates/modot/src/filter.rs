//! Keyword filtering for edge records.

/// Default Graphviz fill color for highlighted nodes.
pub const DEFAULT_FILL_COLOR: &str = "yellow";

/// Substring filter deciding which edges are kept and which nodes are
/// highlighted.
///
/// Set once before parsing begins and never mutated afterwards. An empty
/// keyword matches nothing, so every record is discarded and the resulting
/// graph is empty.
#[derive(Debug, Clone)]
pub struct KeywordFilter {
    keyword: String,
    fill_color: String,
}

impl KeywordFilter {
    /// Create a filter from a keyword and a Graphviz fill color.
    #[must_use]
    pub fn new(keyword: &str, fill_color: &str) -> Self {
        Self {
            keyword: keyword.to_string(),
            fill_color: fill_color.to_string(),
        }
    }

    /// Returns `true` iff the keyword is non-empty and `name` contains it as
    /// a contiguous, case-sensitive substring.
    ///
    /// This is plain containment, not a glob or regex.
    #[must_use]
    pub fn matches(&self, name: &str) -> bool {
        !self.keyword.is_empty() && name.contains(&self.keyword)
    }

    /// The active keyword.
    #[must_use]
    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    /// The fill color applied to highlighted nodes.
    #[must_use]
    pub fn fill_color(&self) -> &str {
        &self.fill_color
    }
}

impl Default for KeywordFilter {
    /// Matches nothing, highlights with [`DEFAULT_FILL_COLOR`].
    fn default() -> Self {
        Self::new("", DEFAULT_FILL_COLOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_keyword_matches_nothing() {
        let filter = KeywordFilter::new("", "yellow");
        assert!(!filter.matches(""));
        assert!(!filter.matches("github.com/foo/bar"));
    }

    #[test]
    fn substring_containment_is_case_sensitive() {
        let filter = KeywordFilter::new("foo", "yellow");
        assert!(filter.matches("github.com/foo/bar"));
        assert!(filter.matches("foo"));
        assert!(!filter.matches("github.com/Foo/bar"));
        assert!(!filter.matches("github.com/f-o-o/bar"));
    }

    #[test]
    fn default_filter_discards_everything() {
        let filter = KeywordFilter::default();
        assert_eq!(filter.keyword(), "");
        assert_eq!(filter.fill_color(), DEFAULT_FILL_COLOR);
        assert!(!filter.matches("anything"));
    }
}
