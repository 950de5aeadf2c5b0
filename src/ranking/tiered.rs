use std::cmp::Ordering;

use crate::config::SearchOptions;
use crate::core::Record;
use crate::ranking::similarity::similarity;
use crate::ranking::{Match, MatchReason, Ranker};

pub const EXACT_SCORE: f64 = 1.0;
pub const PREFIX_SCORE: f64 = 0.95;
pub const CONTAINS_SCORE: f64 = 0.8;

/// Tiered lexical ranker: exact, prefix, contains, then fuzzy.
///
/// Structural tiers carry fixed scores so they always outrank fuzzy matches
/// of similar quality. The first tier that fires decides the score.
#[derive(Debug, Clone, Copy, Default)]
pub struct TieredRanker;

impl TieredRanker {
    pub fn new() -> Self {
        Self
    }
}

impl Ranker for TieredRanker {
    fn rank<'a>(
        &self,
        records: &'a [Record],
        query: &str,
        options: &SearchOptions,
    ) -> Vec<Match<'a>> {
        rank(records, query, options)
    }

    fn name(&self) -> &str {
        "tiered"
    }
}

/// Score every record, keep those at or above the threshold, best first.
///
/// Equal scores keep the order of `records`.
pub fn rank<'a>(records: &'a [Record], query: &str, options: &SearchOptions) -> Vec<Match<'a>> {
    let query_lower = query.to_lowercase();

    let mut ranked: Vec<Match<'a>> = records
        .iter()
        .map(|record| {
            let (reason, score) = classify(&query_lower, record);
            Match::new(record, score, reason)
        })
        .filter(|m| m.score >= options.threshold())
        .collect();

    // Stable sort by score descending
    ranked.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    ranked.truncate(options.limit());

    ranked
}

/// Tier for one record against an already lowercased query.
fn classify(query: &str, record: &Record) -> (MatchReason, f64) {
    let key = record.key.to_lowercase();
    let frag = record.frag.to_lowercase();

    if key == query || frag == query {
        return (MatchReason::Exact, EXACT_SCORE);
    }

    if key.starts_with(query) || frag.starts_with(query) {
        return (MatchReason::Prefix, PREFIX_SCORE);
    }

    let tags = record.tags.join(" ").to_lowercase();
    if key.contains(query) || frag.contains(query) || tags.contains(query) {
        return (MatchReason::Contains, CONTAINS_SCORE);
    }

    // Tags stay out of the fuzzy tier
    let score = similarity(query, &key).max(similarity(query, &frag));
    (MatchReason::Fuzzy, score)
}
