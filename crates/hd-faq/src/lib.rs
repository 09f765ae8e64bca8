//! FAQ storage and two-phase keyword matching.

pub mod matcher;
pub mod store;
pub mod types;

pub use matcher::{find_match, match_query, Category, MatchOutcome, NO_MATCH_MESSAGE, UNAVAILABLE_MESSAGE};
pub use store::{FaqError, FaqStore};
pub use types::FaqEntry;
