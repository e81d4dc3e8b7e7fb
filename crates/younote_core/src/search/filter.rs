//! Case- and diacritic-insensitive name filter.
//!
//! # Invariants
//! - An empty filter is never constructed; callers get `None` instead and
//!   list unfiltered. Whitespace is real search text.
//! - `fold_name` is applied identically to stored names and filter text, so
//!   matching is a plain substring test on folded keys.
//! - A filter whose folded key is empty matches nothing.
//! - Folding is for matching only; name ordering compares the names as
//!   stored.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Ordering applied to a note listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Creation order, oldest first.
    #[default]
    Insertion,
    /// Name ascending, case-sensitive; ties broken by creation order.
    NameAscending,
}

impl SortKey {
    pub(crate) fn order_by_sql(self) -> &'static str {
        match self {
            Self::Insertion => "ORDER BY seq ASC",
            Self::NameAscending => "ORDER BY name ASC, seq ASC",
        }
    }
}

/// Substring filter over note names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameFilter {
    raw: String,
    key: String,
}

impl NameFilter {
    /// Builds a filter from user search text.
    ///
    /// Returns `None` for empty text, which means "show everything".
    pub fn parse(text: &str) -> Option<Self> {
        if text.is_empty() {
            return None;
        }
        Some(Self {
            raw: text.to_string(),
            key: fold_name(text),
        })
    }

    /// Search text as typed.
    pub fn text(&self) -> &str {
        &self.raw
    }

    /// Folded form compared against `notes.name_key`.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns whether the folded key is empty, e.g. text made only of
    /// combining marks. Such a filter matches no note.
    pub fn is_vacuous(&self) -> bool {
        self.key.is_empty()
    }

    /// Returns whether `name` contains this filter after folding.
    pub fn matches(&self, name: &str) -> bool {
        !self.is_vacuous() && fold_name(name).contains(&self.key)
    }

    /// Ordering used when a filter is active and the caller did not pick one.
    pub fn default_sort() -> SortKey {
        SortKey::NameAscending
    }
}

/// Folds a string for comparison: canonical decomposition, combining marks
/// dropped, lowercase.
pub fn fold_name(value: &str) -> String {
    value
        .nfd()
        .filter(|ch| !is_combining_mark(*ch))
        .flat_map(char::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{fold_name, NameFilter, SortKey};

    #[test]
    fn fold_removes_case_and_diacritics() {
        assert_eq!(fold_name("Café Crème"), "cafe creme");
        assert_eq!(fold_name("ÅNGSTRÖM"), "angstrom");
        assert_eq!(fold_name("work"), "work");
    }

    #[test]
    fn only_empty_text_means_no_filter() {
        assert!(NameFilter::parse("").is_none());

        let spaces = NameFilter::parse("  ").expect("whitespace is search text");
        assert_eq!(spaces.key(), "  ");
        assert!(spaces.matches("Work  Ideas"));
        assert!(!spaces.matches("Work Ideas"));
    }

    #[test]
    fn combining_marks_only_filter_matches_nothing() {
        let filter = NameFilter::parse("\u{301}").expect("text is not empty");
        assert!(filter.is_vacuous());
        assert!(!filter.matches("Café"));
        assert!(!filter.matches("anything"));
    }

    #[test]
    fn filter_matches_substring_ignoring_case_and_accents() {
        let filter = NameFilter::parse("CAFE").expect("filter should parse");
        assert_eq!(filter.text(), "CAFE");
        assert_eq!(filter.key(), "cafe");
        assert!(filter.matches("Le café du coin"));
        assert!(!filter.matches("Coffee"));
    }

    #[test]
    fn filtered_listing_defaults_to_name_order() {
        assert_eq!(NameFilter::default_sort(), SortKey::NameAscending);
        assert_eq!(SortKey::default(), SortKey::Insertion);
    }
}
