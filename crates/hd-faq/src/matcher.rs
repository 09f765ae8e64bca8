//! Two-phase FAQ matcher: category keywords first, then word overlap.

use crate::types::FaqEntry;
use std::collections::HashSet;
use std::fmt;

pub const UNAVAILABLE_MESSAGE: &str =
    "Sorry, I couldn't access our FAQ database at the moment.";

pub const NO_MATCH_MESSAGE: &str = "I couldn't find a specific answer to your question in our FAQ. \
Please try rephrasing your question or contact our support team for assistance.";

/// FAQ category, in matching order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Return,
    Shipping,
    International,
    Contact,
    Track,
    Free,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Return,
        Category::Shipping,
        Category::International,
        Category::Contact,
        Category::Track,
        Category::Free,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Return => "return",
            Category::Shipping => "shipping",
            Category::International => "international",
            Category::Contact => "contact",
            Category::Track => "track",
            Category::Free => "free",
        }
    }

    /// Lowercase trigger keywords, matched by substring containment.
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            Category::Return => &["return", "refund", "policy", "return policy"],
            Category::Shipping => &["shipping", "delivery", "ship", "time", "how long"],
            Category::International => &["international", "china", "canada", "uk", "australia", "europe"],
            Category::Contact => &["contact", "phone", "number", "call", "support"],
            Category::Track => &["track", "tracking", "order", "where"],
            Category::Free => &["free", "cost", "price", "shipping cost"],
        }
    }

    fn triggered_by(&self, text: &str) -> bool {
        self.keywords().iter().any(|kw| text.contains(kw))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a query was resolved. Indices point into the entries slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    Category { category: Category, index: usize },
    WordOverlap { index: usize },
    NoMatch,
    Unavailable,
}

/// Resolve `query` against `entries` without materializing the answer.
pub fn find_match(query: &str, entries: &[FaqEntry]) -> MatchOutcome {
    if entries.is_empty() {
        return MatchOutcome::Unavailable;
    }

    let query = query.trim().to_lowercase();
    let questions: Vec<String> = entries.iter().map(|e| e.question.to_lowercase()).collect();

    // A triggered category with no matching entry falls through to the next one.
    for category in Category::ALL {
        if !category.triggered_by(&query) {
            continue;
        }
        if let Some(index) = questions.iter().position(|q| category.triggered_by(q)) {
            return MatchOutcome::Category { category, index };
        }
    }

    let query_words: HashSet<&str> = query.split_whitespace().collect();
    if query_words.is_empty() {
        return MatchOutcome::NoMatch;
    }
    questions
        .iter()
        .position(|q| q.split_whitespace().any(|w| query_words.contains(w)))
        .map(|index| MatchOutcome::WordOverlap { index })
        .unwrap_or(MatchOutcome::NoMatch)
}

/// Answer `query` from `entries`, or one of the fixed fallback messages.
pub fn match_query(query: &str, entries: &[FaqEntry]) -> String {
    match find_match(query, entries) {
        MatchOutcome::Category { index, .. } | MatchOutcome::WordOverlap { index } => {
            entries[index].answer.clone()
        }
        MatchOutcome::NoMatch => NO_MATCH_MESSAGE.to_string(),
        MatchOutcome::Unavailable => UNAVAILABLE_MESSAGE.to_string(),
    }
}
