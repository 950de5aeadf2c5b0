use std::time::Instant;

use crate::config::SearchOptions;
use crate::core::{Record, SearchResponse};
use crate::error::Result;
use crate::ranking::{Ranker, TieredRanker};
use crate::store::RecordSource;

/// Search engine over a loaded record collection
pub struct SearchEngine {
    records: Vec<Record>,
    ranker: Box<dyn Ranker>,
}

impl SearchEngine {
    /// Create engine over an in-memory collection with the tiered ranker
    pub fn new(records: Vec<Record>) -> Self {
        Self {
            records,
            ranker: Box::new(TieredRanker::new()),
        }
    }

    /// Load the collection once from a record source
    pub fn open(source: &dyn RecordSource) -> Result<Self> {
        let records = source.load()?;
        tracing::debug!("Engine ready: {} records from {}", records.len(), source.describe());
        Ok(Self::new(records))
    }

    /// Replace the ranker
    pub fn with_ranker(mut self, ranker: Box<dyn Ranker>) -> Self {
        self.ranker = ranker;
        self
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn ranker_name(&self) -> &str {
        self.ranker.name()
    }

    /// Rank the collection against a query
    pub fn search(&self, query: &str, options: &SearchOptions) -> SearchResponse<'_> {
        let start = Instant::now();

        let matches = self.ranker.rank(&self.records, query, options);

        let response = SearchResponse {
            query: query.to_string(),
            matches,
            total_records: self.records.len(),
            latency_ms: start.elapsed().as_secs_f64() * 1000.0,
            ranking_method: self.ranker.name().to_string(),
        };

        tracing::debug!("Search {}", response.display());
        response
    }
}
