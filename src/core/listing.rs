//! # Participant Listing
//!
//! Pure helpers the Participants screen derives its rows from on every
//! render: category labels, category filtering, and name ordering.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::api::{Category, Participant};

pub const UNKNOWN_CATEGORY: &str = "Unknown";

/// Looks up a category label in the screen's category table.
pub fn category_name(categories: &[Category], id: Option<i64>) -> &str {
    id.and_then(|id| categories.iter().find(|c| c.id == id))
        .map(|c| c.name.as_str())
        .unwrap_or(UNKNOWN_CATEGORY)
}

/// Which participants the list shows. Parsed from a selector string:
/// `"all"` or a category id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Category(i64),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterParseError(pub String);

impl fmt::Display for FilterParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "not a category selector: {:?}", self.0)
    }
}

impl std::error::Error for FilterParseError {}

impl FromStr for CategoryFilter {
    type Err = FilterParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s == "all" {
            return Ok(CategoryFilter::All);
        }
        s.parse::<i64>()
            .map(CategoryFilter::Category)
            .map_err(|_| FilterParseError(s.to_string()))
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => write!(f, "all"),
            CategoryFilter::Category(id) => write!(f, "{id}"),
        }
    }
}

impl CategoryFilter {
    pub fn matches(&self, participant: &Participant) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Category(id) => participant.category == Some(*id),
        }
    }

    /// Next selector in the cycle `all → first category → … → last → all`.
    pub fn next(self, categories: &[Category]) -> Self {
        match self {
            CategoryFilter::All => categories
                .first()
                .map(|c| CategoryFilter::Category(c.id))
                .unwrap_or(CategoryFilter::All),
            CategoryFilter::Category(id) => categories
                .iter()
                .position(|c| c.id == id)
                .and_then(|i| categories.get(i + 1))
                .map(|c| CategoryFilter::Category(c.id))
                .unwrap_or(CategoryFilter::All),
        }
    }
}

/// Participants matching `filter`, in server order.
pub fn filter_by_category<'a>(
    participants: &'a [Participant],
    filter: CategoryFilter,
) -> Vec<&'a Participant> {
    participants.iter().filter(|p| filter.matches(p)).collect()
}

/// Name comparison the way a reader expects a directory to be ordered.
///
/// Letters compare by their base form first, so `Émile` files under `E`.
/// Ties are broken by accents (plain before accented), then by case
/// (lowercase before uppercase).
pub fn compare_names(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(base_letters(b))
        .then_with(|| accented_letters(a).cmp(accented_letters(b)))
        .then_with(|| case_rank(a).cmp(&case_rank(b)))
}

// Lowercased, decomposed, with combining marks dropped.
fn base_letters(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
}

// Lowercased and decomposed, marks kept.
fn accented_letters(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd().flat_map(char::to_lowercase)
}

// Lowercase letters rank before uppercase ones at the same position.
fn case_rank(s: &str) -> Vec<bool> {
    s.chars().map(char::is_uppercase).collect()
}

/// Stable in-place sort by participant name.
pub fn sort_by_name(participants: &mut [&Participant]) {
    participants.sort_by(|a, b| compare_names(&a.name, &b.name));
}
