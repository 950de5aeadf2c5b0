//! # fragsearch
//!
//! Small lexical search engine over short records (key, fragment text, tags):
//! - Tiered matching: exact, prefix, contains, then fuzzy
//! - Levenshtein-based similarity for the fuzzy tier
//! - Threshold filtering and stable best-first ordering
//! - JSON file store seeded with a sample dataset
//! - Interfaces: Rust library and CLI
//!
//! ## Example Usage
//!
//! ```rust
//! use fragsearch::{rank, Record, SearchOptions};
//!
//! let records = vec![
//!     Record::new("engine/start", "Ignition sequence start").with_tags(["engine", "start"]),
//!     Record::new("brake/check", "Brake pressure check").with_tags(["brake"]),
//! ];
//!
//! let matches = rank(&records, "Brake", &SearchOptions::default());
//! assert_eq!(matches[0].record.key, "brake/check");
//! println!("{} - {:.3} ({})", matches[0].record.key, matches[0].score, matches[0].reason);
//! ```

pub mod config;
pub mod core;
pub mod engine;
pub mod error;
pub mod ranking;
pub mod store;

// Re-export primary types
pub use config::SearchOptions;
pub use crate::core::{Record, SearchResponse};
pub use engine::SearchEngine;
pub use error::{FragSearchError, Result};
pub use ranking::{distance, rank, similarity, Match, MatchReason, Ranker, TieredRanker};
pub use store::{JsonFileStore, MemoryStore, RecordSource};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
