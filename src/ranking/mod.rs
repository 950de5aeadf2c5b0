pub mod similarity;
pub mod tiered;

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::SearchOptions;
use crate::core::Record;

pub use similarity::{distance, similarity};
pub use tiered::{rank, TieredRanker};

/// Trait for ranking implementations
pub trait Ranker: Send + Sync {
    /// Rank records against query, return filtered and sorted by score (highest first)
    fn rank<'a>(
        &self,
        records: &'a [Record],
        query: &str,
        options: &SearchOptions,
    ) -> Vec<Match<'a>>;

    /// Get ranker name for logging
    fn name(&self) -> &str;
}

/// Why a record matched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchReason {
    /// Key or fragment equals the query
    Exact,
    /// Key or fragment starts with the query
    Prefix,
    /// Key, fragment or tags contain the query
    Contains,
    /// Edit-distance similarity against key and fragment
    Fuzzy,
}

impl MatchReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchReason::Exact => "exact",
            MatchReason::Prefix => "prefix",
            MatchReason::Contains => "contains",
            MatchReason::Fuzzy => "fuzzy",
        }
    }
}

impl fmt::Display for MatchReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Record with score and match reason
#[derive(Debug, Clone, Serialize)]
pub struct Match<'a> {
    #[serde(flatten)]
    pub record: &'a Record,
    pub score: f64,
    pub reason: MatchReason,
}

impl<'a> Match<'a> {
    pub fn new(record: &'a Record, score: f64, reason: MatchReason) -> Self {
        Self { record, score, reason }
    }
}
